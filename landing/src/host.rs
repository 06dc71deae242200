//! Host capability interface: everything the controller needs from a document.
//!
//! SYSTEM CONTEXT
//! ==============
//! The controller never reaches for a global window or document. A host
//! implements [`Host`] over whatever actually renders the page (the browser
//! DOM in production, an in-memory tree in tests) and is passed by mutable
//! reference into every controller call.
//!
//! Scheduling is callback-free on this side of the seam: `set_timeout`,
//! `set_interval` and `request_animation_frame` only hand back a [`TimerId`].
//! When the timer fires the host calls [`crate::page::Page::on_timer`] with
//! that id. Visibility observation works the same way through
//! [`crate::page::Page::on_visibility`].

use std::fmt;

use crate::error::PageError;

/// Handle for a scheduled timeout, interval or animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Handle for an installed visibility observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverId(pub u64);

/// Viewport-relative box of an element, in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// Options for a visibility observer.
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be visible to count as intersecting.
    pub threshold: f64,
    /// CSS margin applied to the viewport before intersecting.
    pub root_margin: String,
}

/// Document capabilities the controller depends on.
pub trait Host {
    /// A node in the host's document.
    type Element: Clone + PartialEq + fmt::Debug;

    // --- Lookup ---

    /// First element matching `selector`, in document order.
    fn query(&self, selector: &str) -> Option<Self::Element>;

    /// Every element matching `selector` (which may be a comma-separated list), in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    /// Descendants of `parent` matching `selector`, in document order.
    fn query_within(&self, parent: &Self::Element, selector: &str) -> Vec<Self::Element>;

    /// Nearest inclusive ancestor of `element` matching `selector`.
    fn closest(&self, element: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// The document body.
    ///
    /// # Errors
    ///
    /// Fails when the document has no body.
    fn body(&self) -> Result<Self::Element, PageError>;

    /// The document head.
    ///
    /// # Errors
    ///
    /// Fails when the document has no head.
    fn head(&self) -> Result<Self::Element, PageError>;

    // --- Mutation ---

    /// # Errors
    ///
    /// Fails when the host rejects the class token.
    fn add_class(&mut self, element: &Self::Element, class: &str) -> Result<(), PageError>;

    /// # Errors
    ///
    /// Fails when the host rejects the class token.
    fn remove_class(&mut self, element: &Self::Element, class: &str) -> Result<(), PageError>;

    /// Set an inline style property. An empty `value` clears it.
    ///
    /// # Errors
    ///
    /// Fails when the element has no inline style (for example, non-HTML nodes).
    fn set_style(&mut self, element: &Self::Element, property: &str, value: &str) -> Result<(), PageError>;

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_text(&mut self, element: &Self::Element, text: &str);

    /// Create a detached element.
    ///
    /// # Errors
    ///
    /// Fails when `tag` is not a valid element name.
    fn create_element(&mut self, tag: &str) -> Result<Self::Element, PageError>;

    /// # Errors
    ///
    /// Fails when the host refuses the insertion.
    fn append_child(&mut self, parent: &Self::Element, child: &Self::Element) -> Result<(), PageError>;

    /// Detach `element` from the document. Detached elements are left alone.
    fn remove(&mut self, element: &Self::Element);

    fn bounding_rect(&self, element: &Self::Element) -> Rect;

    // --- Window ---

    fn scroll_y(&self) -> f64;

    fn inner_width(&self) -> f64;

    fn inner_height(&self) -> f64;

    fn scroll_to_top_smooth(&mut self);

    /// Whether the document is still parsing (ready state `loading`).
    fn is_loading(&self) -> bool;

    /// Milliseconds on the host clock.
    fn now_ms(&self) -> f64;

    // --- Scheduling ---

    fn set_timeout(&mut self, delay_ms: u32) -> TimerId;

    fn set_interval(&mut self, period_ms: u32) -> TimerId;

    /// # Errors
    ///
    /// Fails when the host cannot schedule a frame callback.
    fn request_animation_frame(&mut self) -> Result<TimerId, PageError>;

    /// Cancel a timer. Unknown or already-fired ids are ignored.
    fn cancel(&mut self, id: TimerId);

    // --- Visibility ---

    /// # Errors
    ///
    /// Fails when the host cannot create the observer.
    fn observe_visibility(
        &mut self,
        elements: &[Self::Element],
        options: &VisibilityOptions,
    ) -> Result<ObserverId, PageError>;

    fn disconnect(&mut self, id: ObserverId);
}
