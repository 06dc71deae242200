//! Shared defaults for the landing crate.

// ── Scroll ──────────────────────────────────────────────────────

/// Vertical scroll (px) beyond which the navbar is styled as scrolled.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// Multiplier applied to the scroll position for the hero parallax offset.
pub const PARALLAX_FACTOR: f64 = -0.2;

// ── Resize ──────────────────────────────────────────────────────

/// Quiet period before a burst of resize events is acted on.
pub const RESIZE_DEBOUNCE_MS: u32 = 250;

/// Viewport width (px) at or below which the icon cards are hidden.
pub const TABLET_BREAKPOINT_PX: f64 = 1024.0;

// ── Buttons ─────────────────────────────────────────────────────

/// How long a pressed button stays scaled down.
pub const PRESS_REVERT_MS: u32 = 150;

/// Lifetime of a click ripple.
pub const RIPPLE_MS: u32 = 600;

/// Interval between play-button pulse rings while hovered.
pub const PULSE_PERIOD_MS: u32 = 1000;

/// Lifetime of a single pulse ring.
pub const PULSE_RING_MS: u32 = 1000;

// ── Notifications ───────────────────────────────────────────────

/// How long a notification stays on screen before sliding out.
pub const NOTIFICATION_VISIBLE_MS: u32 = 3000;

/// Slide-out duration; the node is removed when it ends.
pub const NOTIFICATION_EXIT_MS: u32 = 300;

// ── Entrance animations ─────────────────────────────────────────

/// Upper bound (seconds, exclusive) of the random icon-card animation delay.
pub const CARD_DELAY_MAX_S: f64 = 2.0;

/// Delay step (seconds) between consecutive hero entrance elements.
pub const HERO_STAGGER_S: f64 = 0.1;

/// Fraction of an element that must be visible before it animates in.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Observer root margin: the viewport shrunk by 50px at the bottom.
pub const VISIBILITY_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Classes ─────────────────────────────────────────────────────

pub const CLASS_SCROLLED: &str = "scrolled";
pub const CLASS_ACTIVE: &str = "active";
pub const CLASS_MOBILE_ACTIVE: &str = "mobile-active";
pub const CLASS_ANIMATE_IN: &str = "animate-in";
pub const CLASS_LOADED: &str = "loaded";

/// Fragment that scrolls back to the top instead of announcing a section.
pub const HOME_ANCHOR: &str = "#home";

/// Keyframes and state rules the effects rely on, installed once into `<head>`.
pub const EFFECT_STYLESHEET: &str = r"
@keyframes ripple {
  to {
    transform: scale(4);
    opacity: 0;
  }
}

@keyframes pulse-expand {
  0% {
    transform: scale(1);
    opacity: 0.7;
  }
  100% {
    transform: scale(1.5);
    opacity: 0;
  }
}

.navbar.scrolled {
  background-color: rgba(255, 255, 255, 0.98);
  backdrop-filter: blur(20px);
}

.mobile-active {
  display: flex !important;
  flex-direction: column;
  position: absolute;
  top: 100%;
  left: 0;
  right: 0;
  background: white;
  padding: 20px;
  box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
}

.animate-in {
  opacity: 1;
  transform: translateY(0);
}

.loaded .icon-card {
  opacity: 0;
  transform: translateY(20px);
  transition: all 0.6s ease;
}

.loaded .icon-card.animate-in {
  opacity: 1;
  transform: translateY(0);
}
";
