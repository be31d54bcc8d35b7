use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub id: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Anchor target for the navigation links, with the shared page padding.
#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    html! {
        <section id={props.id.clone()} class={classes!("page-section", props.class.clone())}>
            { for props.children.iter() }
        </section>
    }
}
