//! Browser-side owner of the page: controller, host and registered listeners.
//!
//! ARCHITECTURE
//! ============
//! One `Rc<RefCell<App>>` per initialized document. The page handle holds the
//! only strong reference; DOM listeners, timers and the visibility observer
//! hold weak ones and borrow the app only for the duration of one callback.
//! A callback that finds the app already borrowed is skipped with a warning
//! rather than panicking.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use js_sys::Array;
use landing::config::PageConfig;
use landing::error::PageError;
use landing::host::TimerId;
use landing::listener::{EventInput, EventKind, Listener, ListenerTarget, Propagation};
use landing::page::Page;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event, EventTarget, IntersectionObserverEntry, KeyboardEvent, MouseEvent};

use crate::web_host::{WebHost, host_error};

/// A DOM listener this app added and must remove at teardown.
struct Registered {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

pub(crate) struct App {
    host: WebHost,
    page: Option<Page<WebHost>>,
    listeners: Vec<Registered>,
}

impl App {
    /// Bind a page to the current document and register its listeners.
    pub(crate) fn start(config: PageConfig) -> Result<Rc<RefCell<Self>>, PageError> {
        let window = web_sys::window().ok_or_else(|| PageError::Host("no window".to_owned()))?;
        let document = window
            .document()
            .ok_or_else(|| PageError::Host("window has no document".to_owned()))?;

        let app = Rc::new_cyclic(|weak: &Weak<RefCell<Self>>| {
            RefCell::new(Self {
                host: WebHost::new(window, document, weak.clone()),
                page: None,
                listeners: Vec::new(),
            })
        });

        {
            let mut guard = app.borrow_mut();
            let (page, wanted) = Page::initialize(&mut guard.host, config)?;
            guard.page = Some(page);
            for listener in wanted {
                match register(&guard.host, Rc::downgrade(&app), listener) {
                    Ok(registered) => guard.listeners.push(registered),
                    Err(err) => {
                        guard.teardown();
                        return Err(err);
                    }
                }
            }
            log::debug!("harmoniq: {} DOM listeners registered", guard.listeners.len());
        }
        Ok(app)
    }

    fn dispatch(&mut self, listener: &Listener<Element>, input: &EventInput) -> Result<Propagation, PageError> {
        match self.page.as_mut() {
            Some(page) => page.dispatch(&mut self.host, listener, input),
            None => Ok(Propagation::Continue),
        }
    }

    fn on_timer(&mut self, id: TimerId) {
        self.host.retire(id);
        if let Some(page) = self.page.as_mut()
            && let Err(err) = page.on_timer(&mut self.host, id)
        {
            log::error!("harmoniq: timer {id:?} failed: {err}");
        }
    }

    fn on_visibility(&mut self, element: &Element, intersecting: bool) {
        if let Some(page) = self.page.as_mut()
            && let Err(err) = page.on_visibility(&mut self.host, element, intersecting)
        {
            log::error!("harmoniq: visibility update failed: {err}");
        }
    }

    /// Unbind every listener, then cancel the page's timers and observers.
    pub(crate) fn teardown(&mut self) {
        for registered in self.listeners.drain(..) {
            if let Err(err) = registered
                .target
                .remove_event_listener_with_callback(registered.event, registered.callback.as_ref().unchecked_ref())
            {
                log::warn!("harmoniq: failed to remove {} listener: {err:?}", registered.event);
            }
        }
        if let Some(mut page) = self.page.take() {
            page.dispose(&mut self.host);
        }
        self.host.release_all();
    }
}

fn register(host: &WebHost, app: Weak<RefCell<App>>, listener: Listener<Element>) -> Result<Registered, PageError> {
    let target: EventTarget = match &listener.target {
        ListenerTarget::Window => host.window().clone().into(),
        ListenerTarget::Document => host.document().clone().into(),
        ListenerTarget::Element(element) => element.clone().into(),
    };
    let event = listener.event.name();
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| dispatch_event(&app, &listener, &event));
    target
        .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
        .map_err(host_error)?;
    Ok(Registered { target, event, callback })
}

fn event_input(kind: EventKind, event: &Event) -> EventInput {
    match kind {
        EventKind::Click => event.dyn_ref::<MouseEvent>().map_or(EventInput::None, |mouse| EventInput::Pointer {
            client_x: f64::from(mouse.client_x()),
            client_y: f64::from(mouse.client_y()),
        }),
        EventKind::KeyDown => event
            .dyn_ref::<KeyboardEvent>()
            .map_or(EventInput::None, |key| EventInput::Key(key.key())),
        EventKind::MouseEnter
        | EventKind::MouseLeave
        | EventKind::Scroll
        | EventKind::Resize
        | EventKind::DomContentLoaded => EventInput::None,
    }
}

fn dispatch_event(app: &Weak<RefCell<App>>, listener: &Listener<Element>, event: &Event) {
    let Some(rc) = app.upgrade() else {
        return;
    };
    let Ok(mut app) = rc.try_borrow_mut() else {
        log::warn!("harmoniq: {:?} event arrived while the page was busy; skipped", listener.route);
        return;
    };
    let input = event_input(listener.event, event);
    match app.dispatch(listener, &input) {
        Ok(Propagation::PreventDefault) => event.prevent_default(),
        Ok(Propagation::Continue) => {}
        Err(err) => log::error!("harmoniq: {:?} handler failed: {err}", listener.route),
    }
}

/// Route a fired timer back into the page.
pub(crate) fn fire_timer(app: &Weak<RefCell<App>>, id: TimerId) {
    let Some(rc) = app.upgrade() else {
        return;
    };
    let Ok(mut app) = rc.try_borrow_mut() else {
        log::warn!("harmoniq: timer {id:?} fired while the page was busy; skipped");
        return;
    };
    app.on_timer(id);
}

/// Route intersection observer entries back into the page.
pub(crate) fn notify_visibility(app: &Weak<RefCell<App>>, entries: &Array) {
    let Some(rc) = app.upgrade() else {
        return;
    };
    let Ok(mut app) = rc.try_borrow_mut() else {
        log::warn!("harmoniq: visibility change arrived while the page was busy; skipped");
        return;
    };
    for entry in entries.iter() {
        let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
            continue;
        };
        app.on_visibility(&entry.target(), entry.is_intersecting());
    }
}
