use log::info;
use yew::prelude::*;

mod config;
mod content;
mod state;
mod viewport;
mod components {
    pub mod contact_form;
    pub mod fade_in;
    pub mod icon;
    pub mod meta;
    pub mod nav;
    pub mod portfolio_card;
    pub mod section;
    pub mod service_card;
}
mod pages {
    pub mod home;
}

use components::nav::Nav;
use pages::home::Home;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Home />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
