use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::{Icon, ServiceOffering};

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: ServiceOffering,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;

    html! {
        <div class={classes!("service-card", props.class.clone())}>
            <IconGlyph icon={service.icon} class="service-icon" />
            <h3 class="service-title">{service.title}</h3>
            <p class="service-description">{service.description}</p>
            <div class="service-footer">
                <span class="service-price">{service.price}</span>
                <button type="button" class="service-details">
                    {"View Details "}
                    <IconGlyph icon={Icon::ArrowRight} />
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::SERVICES;
    use yew::ServerRenderer;

    #[tokio::test]
    async fn renders_every_field() {
        let rendered = ServerRenderer::<ServiceCard>::with_props(|| ServiceCardProps {
            service: SERVICES[1].clone(),
            class: Classes::new(),
        })
        .render()
        .await;

        assert!(rendered.contains("Commercial &amp; Brand") || rendered.contains("Commercial & Brand"));
        assert!(rendered.contains("Custom Quotes"));
        assert!(rendered.contains("icon-film"));
        assert!(rendered.contains("View Details"));
    }
}
