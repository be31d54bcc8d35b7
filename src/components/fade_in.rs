use yew::prelude::*;
use web_sys::Element;

use crate::state::FadeState;
use crate::viewport::{watch_visibility, BrowserViewport, Subscription};

#[derive(Properties, PartialEq)]
pub struct FadeInProps {
    /// Milliseconds before the transition starts.
    #[prop_or_default]
    pub delay: u32,
    pub children: Children,
}

/// Fades and slides its children in whenever they cross into the viewport,
/// and back out when they leave.
#[function_component(FadeIn)]
pub fn fade_in(props: &FadeInProps) -> Html {
    let node_ref = use_node_ref();
    let visible = use_state_eq(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node_ref: &NodeRef| {
                let subscription = match node_ref.cast::<Element>() {
                    Some(element) => watch_visibility(&BrowserViewport, &element, move |seen| {
                        visible.set(seen)
                    }),
                    // Never attached, nothing to watch
                    None => Subscription::noop(),
                };
                move || subscription.release()
            },
            node_ref.clone(),
        );
    }

    let fade = FadeState::new(props.delay).apply(*visible);

    html! {
        <div ref={node_ref} class={fade.class_name()} style={fade.style()}>
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_hidden_with_requested_delay() {
        let rendered = ServerRenderer::<FadeIn>::with_props(|| FadeInProps {
            delay: 300,
            children: Children::new(vec![html! { <p>{"The Meaning of Mukumu Bijap"}</p> }]),
        })
        .render()
        .await;

        assert!(rendered.contains(r#"class="fade-in""#), "{}", rendered);
        assert!(rendered.contains("transition-delay: 300ms;"), "{}", rendered);
        assert!(rendered.contains("The Meaning of Mukumu Bijap"));
    }

    #[function_component(UndelayedFade)]
    fn undelayed_fade() -> Html {
        html! {
            <FadeIn>
                <p>{"Selected Works"}</p>
            </FadeIn>
        }
    }

    #[tokio::test]
    async fn delay_defaults_to_zero() {
        let rendered = ServerRenderer::<UndelayedFade>::new().render().await;

        assert!(rendered.contains("transition-delay: 0ms;"), "{}", rendered);
        assert!(rendered.contains("Selected Works"));
    }
}
