//! View-state flags and the class/style selection derived from them.

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollMonitor {
    pub threshold: f64,
}

impl Default for ScrollMonitor {
    fn default() -> Self {
        Self {
            threshold: config::SCROLL_THRESHOLD,
        }
    }
}

impl ScrollMonitor {
    pub fn is_scrolled(&self, offset: f64) -> bool {
        offset > self.threshold
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { open: !self.open }
    }

    pub fn closed(self) -> Self {
        Self { open: false }
    }

    /// The overlay stays mounted either way; only its transform changes.
    pub fn overlay_class(&self) -> &'static str {
        if self.open {
            "menu-overlay open"
        } else {
            "menu-overlay"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAppearance {
    /// Opaque background, dark text.
    Solid,
    /// Sits over the hero image with light text.
    Transparent,
}

impl NavAppearance {
    pub fn class_name(&self) -> &'static str {
        match self {
            NavAppearance::Solid => "solid",
            NavAppearance::Transparent => "transparent",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavViewState {
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavViewState {
    pub fn appearance(&self) -> NavAppearance {
        if self.scrolled || self.menu_open {
            NavAppearance::Solid
        } else {
            NavAppearance::Transparent
        }
    }

    /// Desktop links only follow the scroll position; the menu is mobile-only.
    pub fn desktop_links_class(&self) -> &'static str {
        if self.scrolled {
            "desktop-links muted"
        } else {
            "desktop-links light"
        }
    }
}

pub fn stagger_delay_ms(index: usize) -> u32 {
    index as u32 * config::MENU_STAGGER_MS
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FadeState {
    pub visible: bool,
    pub delay_ms: u32,
}

impl FadeState {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            visible: false,
            delay_ms,
        }
    }

    /// Every report wins, entering or leaving.
    pub fn apply(self, intersecting: bool) -> Self {
        Self {
            visible: intersecting,
            ..self
        }
    }

    pub fn class_name(&self) -> &'static str {
        if self.visible {
            "fade-in visible"
        } else {
            "fade-in"
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transition-duration: {}ms; transition-delay: {}ms;",
            config::FADE_DURATION_MS,
            self.delay_ms
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_threshold_is_strict() {
        let monitor = ScrollMonitor::default();
        assert!(!monitor.is_scrolled(0.0));
        assert!(!monitor.is_scrolled(49.0));
        assert!(!monitor.is_scrolled(50.0));
        assert!(monitor.is_scrolled(51.0));
        assert!(!monitor.is_scrolled(10.0));
    }

    #[test]
    fn menu_starts_closed_and_toggles() {
        let menu = MenuState::default();
        assert!(!menu.open);

        let menu = menu.toggled();
        assert!(menu.open);
        assert!(!menu.toggled().open);
    }

    #[test]
    fn closing_is_idempotent() {
        let open = MenuState::default().toggled();
        assert!(!open.closed().open);
        assert!(!open.closed().closed().open);
    }

    #[test]
    fn overlay_is_displaced_not_removed() {
        assert_eq!(MenuState::default().overlay_class(), "menu-overlay");
        assert_eq!(MenuState { open: true }.overlay_class(), "menu-overlay open");
    }

    #[test]
    fn nav_is_solid_when_scrolled_or_menu_open() {
        let cases = [
            (false, false, NavAppearance::Transparent),
            (true, false, NavAppearance::Solid),
            (false, true, NavAppearance::Solid),
            (true, true, NavAppearance::Solid),
        ];
        for (scrolled, menu_open, expected) in cases {
            let state = NavViewState { scrolled, menu_open };
            assert_eq!(state.appearance(), expected, "{:?}", state);
        }
    }

    #[test]
    fn desktop_links_ignore_menu() {
        let state = NavViewState {
            scrolled: false,
            menu_open: true,
        };
        assert_eq!(state.desktop_links_class(), "desktop-links light");
    }

    #[test]
    fn stagger_grows_with_index() {
        assert_eq!(stagger_delay_ms(0), 0);
        assert_eq!(stagger_delay_ms(3), 150);
    }

    #[test]
    fn fade_delay_is_rendered_exactly() {
        for delay in [0, 1, 150, 600, 2500] {
            let style = FadeState::new(delay).style();
            assert!(
                style.contains(&format!("transition-delay: {}ms;", delay)),
                "{}",
                style
            );
        }
    }

    #[test]
    fn fade_follows_every_crossing() {
        let state = FadeState::new(0);
        assert!(!state.visible);

        let state = state.apply(true);
        assert_eq!(state.class_name(), "fade-in visible");
        let state = state.apply(false);
        assert_eq!(state.class_name(), "fade-in");
        let state = state.apply(true);
        assert!(state.visible);
        assert_eq!(state.delay_ms, 0);
    }
}
