//! Tunable thresholds, delays and the selector contract.
//!
//! DESIGN
//! ======
//! Every number the controller acts on lives here so the host can override
//! it from an inline JSON document without a rebuild. Missing fields fall
//! back to the defaults in [`crate::consts`], so an empty object is a valid
//! configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts;
use crate::error::PageError;

/// Controller configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    pub scroll_threshold_px: f64,
    pub parallax_factor: f64,
    pub resize_debounce_ms: u32,
    pub tablet_breakpoint_px: f64,
    pub press_revert_ms: u32,
    pub ripple_ms: u32,
    pub pulse_period_ms: u32,
    pub pulse_ring_ms: u32,
    pub notification_visible_ms: u32,
    pub notification_exit_ms: u32,
    pub card_delay_max_s: f64,
    pub hero_stagger_s: f64,
    pub visibility_threshold: f64,
    pub visibility_root_margin: String,
    /// Seed for the icon-card delay generator. `None` seeds from the host clock.
    pub seed: Option<u64>,
    pub selectors: Selectors,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            scroll_threshold_px: consts::SCROLL_THRESHOLD_PX,
            parallax_factor: consts::PARALLAX_FACTOR,
            resize_debounce_ms: consts::RESIZE_DEBOUNCE_MS,
            tablet_breakpoint_px: consts::TABLET_BREAKPOINT_PX,
            press_revert_ms: consts::PRESS_REVERT_MS,
            ripple_ms: consts::RIPPLE_MS,
            pulse_period_ms: consts::PULSE_PERIOD_MS,
            pulse_ring_ms: consts::PULSE_RING_MS,
            notification_visible_ms: consts::NOTIFICATION_VISIBLE_MS,
            notification_exit_ms: consts::NOTIFICATION_EXIT_MS,
            card_delay_max_s: consts::CARD_DELAY_MAX_S,
            hero_stagger_s: consts::HERO_STAGGER_S,
            visibility_threshold: consts::VISIBILITY_THRESHOLD,
            visibility_root_margin: consts::VISIBILITY_ROOT_MARGIN.to_owned(),
            seed: None,
            selectors: Selectors::default(),
        }
    }
}

impl PageConfig {
    /// Parse a configuration document. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PageError::Config`] if `text` is not valid JSON or a field
    /// has the wrong type.
    pub fn from_json(text: &str) -> Result<Self, PageError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Whether a scroll position puts the navbar in its scrolled state.
    #[must_use]
    pub fn is_scrolled(&self, scroll_y: f64) -> bool {
        scroll_y > self.scroll_threshold_px
    }

    /// Whether a viewport width hides the icon cards.
    #[must_use]
    pub fn hides_cards(&self, inner_width: f64) -> bool {
        inner_width <= self.tablet_breakpoint_px
    }
}

/// CSS selectors the controller binds to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub nav_links: String,
    pub cta_buttons: String,
    pub play_button: String,
    pub navbar: String,
    pub hero_background: String,
    pub icon_cards: String,
    pub glow_buttons: String,
    pub menu_trigger: String,
    pub menu_bars: String,
    pub link_panel: String,
    pub hero_entrance: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            nav_links: ".nav-link".to_owned(),
            cta_buttons: ".nav-cta, .cta-demo".to_owned(),
            play_button: ".btn-play".to_owned(),
            navbar: ".navbar".to_owned(),
            hero_background: ".hero-background".to_owned(),
            icon_cards: ".icon-card".to_owned(),
            glow_buttons: ".btn-primary, .nav-cta".to_owned(),
            menu_trigger: ".mobile-menu-btn".to_owned(),
            menu_bars: "span".to_owned(),
            link_panel: ".nav-links".to_owned(),
            hero_entrance: ".announcement-badge, .hero-headline, .hero-subheadline, .hero-cta".to_owned(),
        }
    }
}
