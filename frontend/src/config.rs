use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Header switches to its scrolled look once `scrollY` is strictly above this.
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;

pub const SUBMIT_DELAY_MS: u32 = 1_500;
pub const SUCCESS_DISPLAY_MS: u32 = 3_000;
/// Lets the newly shown panel lay out before measuring the hero.
pub const PANEL_SCROLL_DELAY_MS: u32 = 100;

pub const HERO_EXPANDED_HEIGHT: &str = "50vh";
/// Where the hero/panel boundary should land, as a fraction of viewport height.
pub const HERO_BOUNDARY_VIEWPORT_FRACTION: f64 = 0.4;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_BOTTOM_MARGIN_PX: u32 = 50;
pub const REVEAL_SELECTOR: &str = ".project-card, .feature-item, .service-item, .info-card";
pub const REVEALED_CLASS: &str = "fade-in-up";

pub const SUBMIT_LABEL: &str = "Get Free Quote";
pub const SUBMITTING_LABEL: &str = "Submitting...";

pub const ESCAPE_KEY: &str = "Escape";
pub const TOGGLE_SECTION_EVENT: &str = "keysolutions:toggle-section";
