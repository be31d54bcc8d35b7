use yew::prelude::*;

use crate::content::Icon;

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    html! {
        <span
            class={classes!("icon", props.icon.class_name(), props.class.clone())}
            aria-hidden="true"
        >
            {props.icon.glyph()}
        </span>
    }
}
