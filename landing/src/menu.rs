//! Mobile menu state machine.
//!
//! The only genuinely binary state on the page. The trigger toggles between
//! the two states; Escape only ever closes. There is no timed auto-close.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

/// Whether the mobile link panel is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Input that can move the menu between states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuEvent {
    TriggerClicked,
    EscapePressed,
}

impl MenuState {
    /// Next state after `event`.
    #[must_use]
    pub fn next(self, event: MenuEvent) -> Self {
        match (self, event) {
            (Self::Closed, MenuEvent::TriggerClicked) => Self::Open,
            (Self::Open, MenuEvent::TriggerClicked | MenuEvent::EscapePressed) => Self::Closed,
            (Self::Closed, MenuEvent::EscapePressed) => Self::Closed,
        }
    }

    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// Inline styles for one hamburger bar: `(transform, opacity)`.
pub type BarStyle = (&'static str, &'static str);

/// Bar styles for the open state, forming an "X". Empty strings leave the property cleared.
pub const OPEN_BARS: [BarStyle; 3] = [
    ("rotate(45deg) translate(5px, 5px)", ""),
    ("", "0"),
    ("rotate(-45deg) translate(7px, -6px)", ""),
];
