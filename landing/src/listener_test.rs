use super::*;

#[test]
fn event_names_match_dom() {
    assert_eq!(EventKind::Click.name(), "click");
    assert_eq!(EventKind::MouseEnter.name(), "mouseenter");
    assert_eq!(EventKind::MouseLeave.name(), "mouseleave");
    assert_eq!(EventKind::KeyDown.name(), "keydown");
    assert_eq!(EventKind::DomContentLoaded.name(), "DOMContentLoaded");
}

#[test]
fn element_listener_exposes_element() {
    let listener = Listener::on_element(7_u32, EventKind::Click, Route::NavLink);
    assert_eq!(listener.element(), Some(&7));
}

#[test]
fn window_and_document_listeners_have_no_element() {
    let window = Listener::<u32>::on_window(EventKind::Scroll, Route::Parallax);
    let document = Listener::<u32>::on_document(EventKind::KeyDown, Route::KeyDown);
    assert_eq!(window.element(), None);
    assert_eq!(document.element(), None);
    assert_eq!(window.target, ListenerTarget::Window);
    assert_eq!(document.target, ListenerTarget::Document);
}

#[test]
fn event_input_default_is_none() {
    assert_eq!(EventInput::default(), EventInput::None);
}
