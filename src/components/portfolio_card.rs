use yew::prelude::*;

use crate::content::{PortfolioItem, BRAND};

#[derive(Properties, PartialEq)]
pub struct PortfolioCardProps {
    pub item: PortfolioItem,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(PortfolioCard)]
pub fn portfolio_card(props: &PortfolioCardProps) -> Html {
    let item = &props.item;

    html! {
        <div class={classes!("portfolio-card", props.class.clone())}>
            <div class="portfolio-image">
                <img
                    src={item.image_url}
                    alt={format!("{} - {} Photography", item.title, title_case(BRAND))}
                    loading="lazy"
                />
            </div>
            <div class="portfolio-overlay">
                <span class="portfolio-category">{item.category}</span>
                <h3 class="portfolio-title">{item.title}</h3>
                <div class="portfolio-tags">
                    { for item.tags.iter().map(|tag| html! {
                        <span class="portfolio-tag">{*tag}</span>
                    }) }
                </div>
            </div>
        </div>
    }
}

fn title_case(text: &str) -> String {
    text.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_string() + &chars.as_str().to_lowercase(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
