use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icon::IconGlyph;
use crate::content::{Icon, BRAND, EMAIL, NAV_LINKS, PHONE, SOCIAL_LINKS};
use crate::state::{stagger_delay_ms, MenuState, NavViewState, ScrollMonitor};
use crate::viewport::{watch_scroll, BrowserViewport};

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state_eq(MenuState::default);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let subscription =
                    watch_scroll(&BrowserViewport, ScrollMonitor::default(), move |scrolled| {
                        is_scrolled.set(scrolled)
                    });
                move || subscription.release()
            },
            (),
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            let next = (*menu).toggled();
            debug!("Mobile menu open: {}", next.open);
            menu.set(next);
        })
    };

    // No prevent_default here, the anchor jump still has to happen.
    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set((*menu).closed());
        })
    };

    let view = NavViewState {
        scrolled: *is_scrolled,
        menu_open: menu.open,
    };

    html! {
        <nav class={classes!("site-nav", view.appearance().class_name())}>
            <div class="nav-content">
                <a href="#home" class="brand">
                    <span class="brand-mark">
                        <IconGlyph icon={Icon::Camera} />
                    </span>
                    <span class="brand-name">{BRAND}</span>
                </a>

                <div class={view.desktop_links_class()}>
                    { for NAV_LINKS.iter().map(|link| html! {
                        <a key={link.label} href={link.href()} class="desktop-link">
                            {link.label.to_uppercase()}
                        </a>
                    }) }
                </div>

                <button class="menu-trigger" aria-label="Toggle Menu" onclick={toggle_menu}>
                    <IconGlyph icon={if menu.open { Icon::Close } else { Icon::Menu }} />
                </button>
            </div>

            <div class={menu.overlay_class()}>
                <div class="menu-links">
                    <div class="menu-divider"></div>
                    { for NAV_LINKS.iter().enumerate().map(|(index, link)| html! {
                        <a
                            key={link.label}
                            href={link.href()}
                            class="menu-link"
                            onclick={close_menu.clone()}
                            style={format!("transition-delay: {}ms", stagger_delay_ms(index))}
                        >
                            {link.label}
                        </a>
                    }) }

                    <div class="menu-contact">
                        <p class="menu-contact-title">{"Get in touch"}</p>
                        <div class="menu-social">
                            { for SOCIAL_LINKS.iter().map(|social| html! {
                                <IconGlyph icon={social.icon} />
                            }) }
                        </div>
                        <p class="menu-phone">{PHONE}</p>
                        <p class="menu-email">{EMAIL}</p>
                    </div>
                </div>
            </div>

            <style>
                {r#"
                    .site-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        border-bottom: 1px solid transparent;
                        transition: all 0.3s ease;
                    }
                    .site-nav.transparent {
                        background: transparent;
                        padding: 1.5rem 0;
                        color: #fff;
                    }
                    .site-nav.solid {
                        background: #fff;
                        border-bottom-color: #f5f5f4;
                        box-shadow: 0 1px 2px rgba(0, 0, 0, 0.05);
                        padding: 0.75rem 0;
                        color: #1c1917;
                    }
                    .nav-content {
                        max-width: 1200px;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        position: relative;
                        z-index: 50;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        color: inherit;
                        text-decoration: none;
                    }
                    .brand-mark {
                        width: 2.5rem;
                        height: 2.5rem;
                        border: 2px solid currentColor;
                        border-radius: 50%;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .brand-name {
                        font-family: Georgia, serif;
                        font-size: 1.5rem;
                        font-weight: bold;
                        letter-spacing: -0.02em;
                    }
                    .desktop-links {
                        display: flex;
                        gap: 2rem;
                        font-size: 0.875rem;
                        letter-spacing: 0.05em;
                    }
                    .desktop-links.light a {
                        color: #e7e5e4;
                    }
                    .desktop-links.muted a {
                        color: #57534e;
                    }
                    .desktop-link {
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .desktop-link:hover {
                        color: #f59e0b !important;
                    }
                    .menu-trigger {
                        display: none;
                        background: none;
                        border: none;
                        color: inherit;
                        font-size: 1.75rem;
                        padding: 0.5rem;
                        border-radius: 50%;
                        cursor: pointer;
                    }
                    .menu-overlay {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 100vh;
                        overflow-y: auto;
                        background: #fafaf9;
                        z-index: 40;
                        padding: 8rem 1.5rem 2.5rem;
                        display: flex;
                        flex-direction: column;
                        transform: translateX(100%);
                        transition: transform 0.5s ease-in-out;
                    }
                    .menu-overlay.open {
                        transform: translateX(0);
                    }
                    .menu-links {
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1.5rem;
                        flex: 1;
                    }
                    .menu-divider {
                        width: 3rem;
                        height: 0.25rem;
                        background: #f59e0b;
                        margin-bottom: 1rem;
                    }
                    .menu-link {
                        font-family: Georgia, serif;
                        font-size: 2.25rem;
                        color: #1c1917;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .menu-link:hover {
                        color: #d97706;
                    }
                    .menu-contact {
                        margin-top: auto;
                        padding-top: 3rem;
                        border-top: 1px solid #e7e5e4;
                        width: 100%;
                        color: #57534e;
                    }
                    .menu-contact-title {
                        font-size: 0.875rem;
                        text-transform: uppercase;
                        letter-spacing: 0.1em;
                        color: #78716c;
                    }
                    .menu-social {
                        display: flex;
                        gap: 1.5rem;
                        font-size: 1.5rem;
                        color: #1c1917;
                        margin-bottom: 1rem;
                    }
                    @media (max-width: 768px) {
                        .desktop-links {
                            display: none;
                        }
                        .menu-trigger {
                            display: block;
                        }
                        .brand-name {
                            font-size: 1.25rem;
                        }
                    }
                    @media (min-width: 769px) {
                        .menu-overlay {
                            display: none;
                        }
                    }
                "#}
            </style>
        </nav>
    }
}
