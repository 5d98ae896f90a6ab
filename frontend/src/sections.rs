use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{error, info};
use thiserror::Error;
use yew::prelude::*;

use crate::config;

/// The three detail panels that hang off the hero images.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Slab,
    Deck,
    Roof,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::Slab, Section::Deck, Section::Roof];

    pub fn name(self) -> &'static str {
        match self {
            Section::Slab => "slab",
            Section::Deck => "deck",
            Section::Roof => "roof",
        }
    }

    pub fn panel_id(self) -> &'static str {
        match self {
            Section::Slab => "slab-details",
            Section::Deck => "deck-details",
            Section::Roof => "roof-details",
        }
    }

    pub fn image_class(self) -> &'static str {
        match self {
            Section::Slab => "hero-slab-image",
            Section::Deck => "hero-deck-image",
            Section::Roof => "hero-roof-image",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Section::Slab => "Concrete Slabs",
            Section::Deck => "Custom Decks",
            Section::Roof => "Roofing",
        }
    }

    fn index(self) -> usize {
        match self {
            Section::Slab => 0,
            Section::Deck => 1,
            Section::Roof => 2,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SectionError {
    #[error("Section {0} not found")]
    NotFound(String),
}

impl FromStr for Section {
    type Err = SectionError;

    /// Accepts either the short name (`deck`) or the panel id (`deck-details`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| s == section.name() || s == section.panel_id())
            .ok_or_else(|| SectionError::NotFound(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeroLayout {
    #[default]
    Natural,
    Expanded,
}

impl HeroLayout {
    pub fn style(self) -> String {
        match self {
            HeroLayout::Natural => "height: auto; overflow: visible;".to_string(),
            HeroLayout::Expanded => format!(
                "height: {0}; min-height: {0}; overflow: hidden;",
                config::HERO_EXPANDED_HEIGHT
            ),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    Opened(Section),
    Closed,
}

/// Owns which panel is open, the panel visibility flags and the hero layout.
///
/// Every mutation goes through `toggle`, `close_all` or `on_escape`, so at
/// most one panel is ever visible and `active` always names it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct SectionToggler {
    active: Option<Section>,
    panels: [bool; 3],
    hero: HeroLayout,
    scroll_requests: u32,
}

impl SectionToggler {
    pub fn active(&self) -> Option<Section> {
        self.active
    }

    pub fn is_visible(&self, section: Section) -> bool {
        self.panels[section.index()]
    }

    pub fn hero(&self) -> HeroLayout {
        self.hero
    }

    /// Bumped every time a panel opens; the view keys its deferred scroll on it.
    pub fn scroll_requests(&self) -> u32 {
        self.scroll_requests
    }

    pub fn toggle(&mut self, section: Section) -> ToggleOutcome {
        let was_visible = self.is_visible(section);

        self.hide_all();

        if was_visible {
            ToggleOutcome::Closed
        } else {
            self.panels[section.index()] = true;
            self.active = Some(section);
            self.hero = HeroLayout::Expanded;
            self.scroll_requests = self.scroll_requests.wrapping_add(1);
            ToggleOutcome::Opened(section)
        }
    }

    /// String entry point for callers outside the typed UI (legacy hooks).
    pub fn toggle_named(&mut self, name: &str) -> Result<ToggleOutcome, SectionError> {
        let section = name.parse::<Section>()?;
        Ok(self.toggle(section))
    }

    pub fn close_all(&mut self) {
        self.hide_all();
    }

    /// Returns whether the key press closed an open panel.
    pub fn on_escape(&mut self, key: &str) -> bool {
        if key == config::ESCAPE_KEY && self.active.is_some() {
            self.close_all();
            true
        } else {
            false
        }
    }

    fn hide_all(&mut self) {
        self.panels = [false; 3];
        self.hero = HeroLayout::Natural;
        self.active = None;
    }
}

pub enum SectionAction {
    Toggle(Section),
    ToggleNamed(String),
    CloseAll,
    Escape(String),
}

impl Reducible for SectionToggler {
    type Action = SectionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            SectionAction::Toggle(section) => {
                let outcome = next.toggle(section);
                info!("Toggled {} section: {:?}", section, outcome);
            }
            SectionAction::ToggleNamed(name) => match next.toggle_named(&name) {
                Ok(outcome) => info!("Toggled section {:?} by name: {:?}", name, outcome),
                Err(e) => {
                    error!("{}", e);
                    return self;
                }
            },
            SectionAction::CloseAll => next.close_all(),
            SectionAction::Escape(key) => {
                if !next.on_escape(&key) {
                    return self;
                }
                info!("Closed open section on {}", key);
            }
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_consistent(toggler: &SectionToggler) {
        let visible: Vec<Section> = Section::ALL
            .into_iter()
            .filter(|s| toggler.is_visible(*s))
            .collect();
        assert!(visible.len() <= 1, "more than one panel visible: {:?}", visible);
        assert_eq!(toggler.active(), visible.first().copied());
        match toggler.active() {
            Some(_) => assert_eq!(toggler.hero(), HeroLayout::Expanded),
            None => assert_eq!(toggler.hero(), HeroLayout::Natural),
        }
    }

    #[test]
    fn starts_closed() {
        let toggler = SectionToggler::default();
        assert_eq!(toggler.active(), None);
        assert_consistent(&toggler);
    }

    #[test]
    fn any_toggle_sequence_keeps_one_panel_at_most() {
        let sequence = [
            Section::Slab,
            Section::Deck,
            Section::Deck,
            Section::Roof,
            Section::Slab,
            Section::Slab,
            Section::Slab,
            Section::Roof,
            Section::Deck,
        ];
        let mut toggler = SectionToggler::default();
        for section in sequence {
            toggler.toggle(section);
            assert_consistent(&toggler);
        }
        assert_eq!(toggler.active(), Some(Section::Deck));
    }

    #[test]
    fn switching_sections_closes_the_previous_one() {
        let mut toggler = SectionToggler::default();
        assert_eq!(toggler.toggle(Section::Slab), ToggleOutcome::Opened(Section::Slab));
        assert_eq!(toggler.toggle(Section::Roof), ToggleOutcome::Opened(Section::Roof));
        assert!(!toggler.is_visible(Section::Slab));
        assert!(toggler.is_visible(Section::Roof));
    }

    #[test]
    fn double_toggle_closes() {
        for section in Section::ALL {
            let mut toggler = SectionToggler::default();
            toggler.toggle(section);
            assert_eq!(toggler.toggle(section), ToggleOutcome::Closed);
            assert_eq!(toggler.active(), None);
            assert_consistent(&toggler);
        }
    }

    #[test]
    fn opening_requests_a_scroll_closing_does_not() {
        let mut toggler = SectionToggler::default();
        toggler.toggle(Section::Deck);
        assert_eq!(toggler.scroll_requests(), 1);
        toggler.toggle(Section::Deck);
        assert_eq!(toggler.scroll_requests(), 1);
        toggler.toggle(Section::Roof);
        assert_eq!(toggler.scroll_requests(), 2);
    }

    #[test]
    fn escape_closes_open_section() {
        let mut toggler = SectionToggler::default();
        toggler.toggle(Section::Roof);
        assert!(toggler.on_escape("Escape"));
        assert_eq!(toggler.active(), None);
        assert_consistent(&toggler);
    }

    #[test]
    fn escape_without_open_section_is_noop() {
        let mut toggler = SectionToggler::default();
        let before = toggler.clone();
        assert!(!toggler.on_escape("Escape"));
        assert_eq!(toggler, before);
    }

    #[test]
    fn other_keys_do_not_close() {
        let mut toggler = SectionToggler::default();
        toggler.toggle(Section::Slab);
        assert!(!toggler.on_escape("Enter"));
        assert!(!toggler.on_escape("escape"));
        assert_eq!(toggler.active(), Some(Section::Slab));
    }

    #[test]
    fn close_all_is_idempotent() {
        let mut toggler = SectionToggler::default();
        toggler.toggle(Section::Deck);
        toggler.close_all();
        let once = toggler.clone();
        toggler.close_all();
        assert_eq!(toggler, once);
        assert_consistent(&toggler);
    }

    #[test]
    fn parses_names_and_panel_ids() {
        assert_eq!("slab".parse::<Section>(), Ok(Section::Slab));
        assert_eq!("deck-details".parse::<Section>(), Ok(Section::Deck));
        assert_eq!(
            "attic".parse::<Section>(),
            Err(SectionError::NotFound("attic".to_string()))
        );
        assert_eq!(
            SectionError::NotFound("attic".to_string()).to_string(),
            "Section attic not found"
        );
    }

    #[test]
    fn unknown_name_leaves_state_untouched() {
        let mut toggler = SectionToggler::default();
        toggler.toggle(Section::Deck);
        let before = toggler.clone();
        assert!(toggler.toggle_named("garage").is_err());
        assert_eq!(toggler, before);
    }

    #[test]
    fn reducer_returns_same_state_for_rejected_actions() {
        let state = Rc::new(SectionToggler::default());
        let next = state.clone().reduce(SectionAction::ToggleNamed("shed".into()));
        assert!(Rc::ptr_eq(&state, &next));
        let next = state.clone().reduce(SectionAction::Escape("Escape".into()));
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn reducer_applies_toggle_and_escape() {
        let state = Rc::new(SectionToggler::default());
        let opened = state.reduce(SectionAction::ToggleNamed("roof".into()));
        assert_eq!(opened.active(), Some(Section::Roof));
        let closed = opened.reduce(SectionAction::Escape("Escape".into()));
        assert_eq!(closed.active(), None);
    }

    #[test]
    fn hero_style_follows_layout() {
        assert_eq!(HeroLayout::Natural.style(), "height: auto; overflow: visible;");
        assert_eq!(
            HeroLayout::Expanded.style(),
            "height: 50vh; min-height: 50vh; overflow: hidden;"
        );
    }
}
