//! [`Host`] over the browser DOM.
//!
//! DESIGN
//! ======
//! Timers and observers are owned here, keyed by the ids handed to the page.
//! Dropping a `gloo_timers` handle cancels the browser timer, so cancelling
//! is just removal from the table. Every callback holds only a weak
//! reference to the [`App`] and routes back through `crate::app`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Weak;

use gloo_timers::callback::{Interval, Timeout};
use js_sys::Array;
use landing::error::PageError;
use landing::host::{Host, ObserverId, Rect, TimerId, VisibilityOptions};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverInit, NodeList,
    ScrollBehavior, ScrollToOptions, Window,
};

use crate::app::{self, App};

pub(crate) fn host_error(err: JsValue) -> PageError {
    PageError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

enum Scheduled {
    Timeout { _timer: Timeout },
    Interval { _timer: Interval },
    Frame { handle: i32, _callback: Closure<dyn FnMut(f64)> },
}

struct Observer {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

pub(crate) struct WebHost {
    window: Window,
    document: Document,
    app: Weak<RefCell<App>>,
    next_id: u64,
    scheduled: HashMap<TimerId, Scheduled>,
    /// One-shot timers that already fired, dropped on the next fire.
    spent: Vec<TimerId>,
    observers: HashMap<ObserverId, Observer>,
}

impl WebHost {
    pub(crate) fn new(window: Window, document: Document, app: Weak<RefCell<App>>) -> Self {
        Self {
            window,
            document,
            app,
            next_id: 1,
            scheduled: HashMap::new(),
            spent: Vec::new(),
            observers: HashMap::new(),
        }
    }

    pub(crate) fn window(&self) -> &Window {
        &self.window
    }

    pub(crate) fn document(&self) -> &Document {
        &self.document
    }

    fn next_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Note that `fired` ran. A callback can't drop its own closure, so
    /// one-shot entries are released on the following fire instead.
    pub(crate) fn retire(&mut self, fired: TimerId) {
        for id in self.spent.drain(..) {
            self.scheduled.remove(&id);
        }
        if matches!(self.scheduled.get(&fired), Some(Scheduled::Timeout { .. } | Scheduled::Frame { .. })) {
            self.spent.push(fired);
        }
    }

    /// Cancel everything still scheduled or observed.
    pub(crate) fn release_all(&mut self) {
        let ids: Vec<TimerId> = self.scheduled.keys().copied().collect();
        for id in ids {
            self.cancel(id);
        }
        self.spent.clear();
        let observers: Vec<ObserverId> = self.observers.keys().copied().collect();
        for id in observers {
            self.disconnect(id);
        }
    }

    fn style_of(element: &Element) -> Result<web_sys::CssStyleDeclaration, PageError> {
        element
            .dyn_ref::<HtmlElement>()
            .map(HtmlElement::style)
            .ok_or_else(|| PageError::Host(format!("<{}> has no inline style", element.tag_name())))
    }
}

fn elements_of(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

impl Host for WebHost {
    type Element = Element;

    fn query(&self, selector: &str) -> Option<Element> {
        match self.document.query_selector(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("harmoniq: bad selector `{selector}`: {err:?}");
                None
            }
        }
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        match self.document.query_selector_all(selector) {
            Ok(list) => elements_of(&list),
            Err(err) => {
                log::warn!("harmoniq: bad selector `{selector}`: {err:?}");
                Vec::new()
            }
        }
    }

    fn query_within(&self, parent: &Element, selector: &str) -> Vec<Element> {
        match parent.query_selector_all(selector) {
            Ok(list) => elements_of(&list),
            Err(err) => {
                log::warn!("harmoniq: bad selector `{selector}`: {err:?}");
                Vec::new()
            }
        }
    }

    fn closest(&self, element: &Element, selector: &str) -> Option<Element> {
        match element.closest(selector) {
            Ok(found) => found,
            Err(err) => {
                log::warn!("harmoniq: bad selector `{selector}`: {err:?}");
                None
            }
        }
    }

    fn body(&self) -> Result<Element, PageError> {
        self.document
            .body()
            .map(Element::from)
            .ok_or_else(|| PageError::MissingElement { selector: "body".to_owned() })
    }

    fn head(&self) -> Result<Element, PageError> {
        self.document
            .head()
            .map(Element::from)
            .ok_or_else(|| PageError::MissingElement { selector: "head".to_owned() })
    }

    fn add_class(&mut self, element: &Element, class: &str) -> Result<(), PageError> {
        element.class_list().add_1(class).map_err(host_error)
    }

    fn remove_class(&mut self, element: &Element, class: &str) -> Result<(), PageError> {
        element.class_list().remove_1(class).map_err(host_error)
    }

    fn set_style(&mut self, element: &Element, property: &str, value: &str) -> Result<(), PageError> {
        let style = Self::style_of(element)?;
        if value.is_empty() {
            style.remove_property(property).map(drop).map_err(host_error)
        } else {
            style.set_property(property, value).map_err(host_error)
        }
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_text(&mut self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn create_element(&mut self, tag: &str) -> Result<Element, PageError> {
        self.document.create_element(tag).map_err(host_error)
    }

    fn append_child(&mut self, parent: &Element, child: &Element) -> Result<(), PageError> {
        parent.append_child(child).map(drop).map_err(host_error)
    }

    fn remove(&mut self, element: &Element) {
        element.remove();
    }

    fn bounding_rect(&self, element: &Element) -> Rect {
        let rect = element.get_bounding_client_rect();
        Rect { left: rect.x(), top: rect.y(), width: rect.width(), height: rect.height() }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or(0.0)
    }

    fn inner_width(&self) -> f64 {
        self.window.inner_width().map_or(0.0, |w| w.as_f64().unwrap_or(0.0))
    }

    fn inner_height(&self) -> f64 {
        self.window.inner_height().map_or(0.0, |h| h.as_f64().unwrap_or(0.0))
    }

    fn scroll_to_top_smooth(&mut self) {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn is_loading(&self) -> bool {
        self.document.ready_state() == "loading"
    }

    fn now_ms(&self) -> f64 {
        js_sys::Date::now()
    }

    fn set_timeout(&mut self, delay_ms: u32) -> TimerId {
        let id = TimerId(self.next_id());
        let weak = self.app.clone();
        let timeout = Timeout::new(delay_ms, move || app::fire_timer(&weak, id));
        self.scheduled.insert(id, Scheduled::Timeout { _timer: timeout });
        id
    }

    fn set_interval(&mut self, period_ms: u32) -> TimerId {
        let id = TimerId(self.next_id());
        let weak = self.app.clone();
        let interval = Interval::new(period_ms, move || app::fire_timer(&weak, id));
        self.scheduled.insert(id, Scheduled::Interval { _timer: interval });
        id
    }

    fn request_animation_frame(&mut self) -> Result<TimerId, PageError> {
        let id = TimerId(self.next_id());
        let weak = self.app.clone();
        let callback = Closure::once(move |_timestamp: f64| app::fire_timer(&weak, id));
        let handle = self
            .window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(host_error)?;
        self.scheduled.insert(id, Scheduled::Frame { handle, _callback: callback });
        Ok(id)
    }

    fn cancel(&mut self, id: TimerId) {
        if let Some(Scheduled::Frame { handle, .. }) = self.scheduled.remove(&id)
            && let Err(err) = self.window.cancel_animation_frame(handle)
        {
            log::warn!("harmoniq: cancelAnimationFrame failed: {err:?}");
        }
    }

    fn observe_visibility(
        &mut self,
        elements: &[Element],
        options: &VisibilityOptions,
    ) -> Result<ObserverId, PageError> {
        let id = ObserverId(self.next_id());
        let weak = self.app.clone();
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, _observer: IntersectionObserver| app::notify_visibility(&weak, &entries),
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(host_error)?;
        for element in elements {
            observer.observe(element);
        }
        self.observers.insert(id, Observer { observer, _callback: callback });
        Ok(id)
    }

    fn disconnect(&mut self, id: ObserverId) {
        if let Some(entry) = self.observers.remove(&id) {
            entry.observer.disconnect();
        }
    }
}
