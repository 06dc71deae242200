//! Listener bindings handed to the host, and the event payloads it sends back.
//!
//! [`crate::page::Page::initialize`] returns one [`Listener`] per DOM listener
//! the page needs. The host registers each with its event source and, when
//! the event fires, passes the same listener plus an [`EventInput`] to
//! [`crate::page::Page::dispatch`].

#[cfg(test)]
#[path = "listener_test.rs"]
mod listener_test;

/// Where a listener is attached.
#[derive(Clone, Debug, PartialEq)]
pub enum ListenerTarget<E> {
    Window,
    Document,
    Element(E),
}

/// DOM event a listener subscribes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    MouseEnter,
    MouseLeave,
    KeyDown,
    Scroll,
    Resize,
    DomContentLoaded,
}

impl EventKind {
    /// The DOM event type string.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Click => "click",
            Self::MouseEnter => "mouseenter",
            Self::MouseLeave => "mouseleave",
            Self::KeyDown => "keydown",
            Self::Scroll => "scroll",
            Self::Resize => "resize",
            Self::DomContentLoaded => "DOMContentLoaded",
        }
    }
}

/// Which controller behavior a listener drives.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    /// Navigation link click: smooth-scroll home or announce the section.
    NavLink,
    /// Call-to-action click: success toast and press animation.
    CallToAction,
    /// Play button click: info toast and press animation.
    PlayButton,
    /// Primary button hover glow.
    ButtonGlow,
    /// Primary button click ripple.
    ButtonRipple,
    /// Play button hover: start the pulse interval.
    PulseStart,
    /// Play button leave: stop the pulse interval.
    PulseStop,
    /// Icon card hover: pause and lift.
    CardEnter,
    /// Icon card leave: resume and settle.
    CardLeave,
    /// Hamburger trigger click.
    MenuToggle,
    /// Window scroll: navbar styling.
    NavbarScroll,
    /// Window scroll: hero parallax.
    Parallax,
    /// Window resize (debounced).
    Resize,
    /// Document keydown.
    KeyDown,
    /// Document finished parsing.
    PageReady,
}

/// A listener the host must register.
#[derive(Clone, Debug, PartialEq)]
pub struct Listener<E> {
    pub target: ListenerTarget<E>,
    pub event: EventKind,
    pub route: Route,
}

impl<E> Listener<E> {
    #[must_use]
    pub fn on_window(event: EventKind, route: Route) -> Self {
        Self { target: ListenerTarget::Window, event, route }
    }

    #[must_use]
    pub fn on_document(event: EventKind, route: Route) -> Self {
        Self { target: ListenerTarget::Document, event, route }
    }

    #[must_use]
    pub fn on_element(element: E, event: EventKind, route: Route) -> Self {
        Self { target: ListenerTarget::Element(element), event, route }
    }

    /// The element this listener is attached to, if it is element-scoped.
    #[must_use]
    pub fn element(&self) -> Option<&E> {
        match &self.target {
            ListenerTarget::Element(element) => Some(element),
            ListenerTarget::Window | ListenerTarget::Document => None,
        }
    }
}

/// Event data the controller reads.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum EventInput {
    #[default]
    None,
    /// Pointer position in viewport coordinates.
    Pointer { client_x: f64, client_y: f64 },
    /// Key name as reported by the browser (`"Escape"`, `"Enter"`, ...).
    Key(String),
}

/// What the host should do with the event after dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Propagation {
    Continue,
    PreventDefault,
}
