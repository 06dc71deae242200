//! Inline style recipes for the transient visual effects.
//!
//! Everything here is pure: it turns geometry and kinds into `(property,
//! value)` declarations. The controller applies them through the host.

#[cfg(test)]
#[path = "effects_test.rs"]
mod effects_test;

use crate::host::Rect;

/// Inline style declarations as `(property, value)` pairs.
pub type StyleDecls = Vec<(&'static str, String)>;

/// Hover glow for primary buttons.
pub const GLOW_SHADOW: &str = "0 0 20px rgba(33, 128, 141, 0.3)";

/// Press scale for call-to-action buttons.
pub const CTA_PRESS: &str = "scale(0.95)";

/// Press scale for the play button.
pub const PLAY_PRESS: &str = "scale(0.9)";

/// Transform of a hovered icon card.
pub const CARD_LIFT: &str = "translateY(-8px) scale(1.1)";

pub const NOTIFICATION_HIDDEN: &str = "translateX(100%)";
pub const NOTIFICATION_SHOWN: &str = "translateX(0)";

/// Notification palette.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Info,
    #[default]
    Default,
}

impl NotificationKind {
    /// Background color for this kind.
    #[must_use]
    pub fn color(self) -> &'static str {
        match self {
            Self::Success => "#10B981",
            Self::Info => "#3B82F6",
            Self::Default => "#6B7280",
        }
    }
}

/// Format a CSS number the way the browser would print it (no `-0`).
#[must_use]
pub fn css_number(value: f64) -> String {
    // -0.0 + 0.0 == +0.0
    format!("{}", value + 0.0)
}

#[must_use]
pub fn px(value: f64) -> String {
    format!("{}px", css_number(value))
}

#[must_use]
pub fn seconds(value: f64) -> String {
    format!("{}s", css_number(value))
}

/// Hero background transform for a scroll position.
#[must_use]
pub fn parallax_transform(scroll_y: f64, factor: f64) -> String {
    format!("translateY({})", px(scroll_y * factor))
}

/// Styles for a fresh notification, positioned off-screen to the right.
#[must_use]
pub fn notification_styles(kind: NotificationKind) -> StyleDecls {
    vec![
        ("position", "fixed".to_owned()),
        ("top", "100px".to_owned()),
        ("right", "20px".to_owned()),
        ("padding", "16px 24px".to_owned()),
        ("background", kind.color().to_owned()),
        ("color", "white".to_owned()),
        ("border-radius", "8px".to_owned()),
        ("box-shadow", "0 10px 15px -3px rgba(0, 0, 0, 0.1)".to_owned()),
        ("z-index", "10000".to_owned()),
        ("transform", NOTIFICATION_HIDDEN.to_owned()),
        ("transition", "transform 0.3s ease".to_owned()),
    ]
}

/// Size and button-relative offset of a click ripple.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

impl RippleGeometry {
    /// Center a square ripple, as wide as the button's larger side, on the pointer.
    #[must_use]
    pub fn centered(rect: Rect, client_x: f64, client_y: f64) -> Self {
        let size = rect.width.max(rect.height);
        Self {
            size,
            left: client_x - rect.left - size / 2.0,
            top: client_y - rect.top - size / 2.0,
        }
    }

    #[must_use]
    pub fn styles(&self) -> StyleDecls {
        vec![
            ("position", "absolute".to_owned()),
            ("width", px(self.size)),
            ("height", px(self.size)),
            ("left", px(self.left)),
            ("top", px(self.top)),
            ("background", "rgba(255, 255, 255, 0.3)".to_owned()),
            ("border-radius", "50%".to_owned()),
            ("transform", "scale(0)".to_owned()),
            ("animation", "ripple 0.6s linear".to_owned()),
            ("pointer-events", "none".to_owned()),
        ]
    }
}

/// Styles the ripple's host button needs so the ripple is clipped to it.
#[must_use]
pub fn ripple_container_styles() -> StyleDecls {
    vec![("position", "relative".to_owned()), ("overflow", "hidden".to_owned())]
}

/// Styles for one expanding ring around the play button.
#[must_use]
pub fn pulse_ring_styles() -> StyleDecls {
    vec![
        ("position", "absolute".to_owned()),
        ("top", "-5px".to_owned()),
        ("left", "-5px".to_owned()),
        ("right", "-5px".to_owned()),
        ("bottom", "-5px".to_owned()),
        ("border", "2px solid rgba(33, 128, 141, 0.4)".to_owned()),
        ("border-radius", "50%".to_owned()),
        ("animation", "pulse-expand 1s ease-out forwards".to_owned()),
        ("pointer-events", "none".to_owned()),
    ]
}
