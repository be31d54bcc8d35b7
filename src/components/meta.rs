use yew::prelude::*;

use crate::content::PageMeta;

#[derive(Properties, PartialEq)]
pub struct MetaTagsProps {
    pub meta: PageMeta,
}

/// Head metadata kept in the tree as hidden markup. Moving it into the real
/// document head is left to whoever hosts the page.
#[function_component(MetaTags)]
pub fn meta_tags(props: &MetaTagsProps) -> Html {
    let meta = &props.meta;

    html! {
        <div class="meta-tags" hidden=true>
            <title>{meta.title}</title>
            <meta name="description" content={meta.description} />
            <meta name="keywords" content={meta.keywords} />
        </div>
    }
}
