use log::debug;
use web_sys::{window, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};

use crate::config;

/// Only same-page fragments with a name (`#contact`) are scroll targets.
pub fn anchor_target(href: &str) -> Option<&str> {
    match href.strip_prefix('#') {
        Some(name) if !name.is_empty() && !name.contains(char::is_whitespace) => Some(href),
        _ => None,
    }
}

/// Window offset that puts the bottom of the hero at a fixed fraction of the viewport.
pub fn hero_boundary_top(hero_offset_top: f64, hero_height: f64, viewport_height: f64) -> f64 {
    hero_offset_top + hero_height - viewport_height * config::HERO_BOUNDARY_VIEWPORT_FRACTION
}

/// Smooth-scrolls to the anchor's target; missing targets are ignored.
pub fn scroll_to_anchor(href: &str) {
    let Some(selector) = anchor_target(href) else {
        return;
    };
    let target = window()
        .and_then(|w| w.document())
        .and_then(|d| d.query_selector(selector).ok().flatten());

    if let Some(target) = target {
        debug!("Scrolling to {}", selector);
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Start);
        target.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

pub fn scroll_to_hero_boundary(hero: &HtmlElement) {
    let Some(window) = window() else {
        return;
    };
    let viewport_height = window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0);
    let top = hero_boundary_top(
        f64::from(hero.offset_top()),
        f64::from(hero.offset_height()),
        viewport_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
