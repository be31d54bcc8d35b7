use log::Level;

/// Vertical offset past which the navigation bar turns solid.
pub const SCROLL_THRESHOLD: f64 = 50.0;

pub const FADE_DURATION_MS: u32 = 1000;

// Per-link delay in the mobile menu cascade.
pub const MENU_STAGGER_MS: u32 = 50;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
