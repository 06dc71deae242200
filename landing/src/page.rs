//! The page controller.
//!
//! ARCHITECTURE
//! ============
//! [`Page`] is a plain struct generic over a [`Host`]. It holds no reference
//! to the host; every entry point borrows it for the duration of the call.
//! That keeps the controller single-owner and lets the browser layer store
//! page and host side by side in one `RefCell`.
//!
//! Entry points, all invoked by the host:
//!
//! - [`Page::initialize`] once, returning the listeners to register;
//! - [`Page::dispatch`] when a registered listener fires;
//! - [`Page::on_timer`] when a timer the page scheduled fires;
//! - [`Page::on_visibility`] when an observed element's visibility changes;
//! - [`Page::dispose`] at teardown.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::config::PageConfig;
use crate::consts;
use crate::effects::{self, NotificationKind, RippleGeometry, StyleDecls};
use crate::error::PageError;
use crate::host::{Host, ObserverId, TimerId, VisibilityOptions};
use crate::listener::{EventInput, EventKind, Listener, Propagation, Route};
use crate::menu::{self, MenuEvent, MenuState};
use crate::timers::{Task, Timers};

/// Interaction controller bound to one document.
pub struct Page<H: Host> {
    config: PageConfig,
    menu: MenuState,
    timers: Timers<H::Element>,
    resize_timer: Option<TimerId>,
    pulse_interval: Option<TimerId>,
    observer: Option<ObserverId>,
    loaded: bool,
    rng: SmallRng,
}

impl<H: Host> Page<H> {
    /// Bind the page's behavior to `host`.
    ///
    /// Returns the controller and the listeners the host must register. If the
    /// document is still loading, the page-load routine is deferred to a
    /// `DOMContentLoaded` listener; otherwise it runs before this returns.
    ///
    /// # Errors
    ///
    /// Fails if the effect stylesheet cannot be installed or the immediate
    /// page-load routine fails.
    pub fn initialize(host: &mut H, config: PageConfig) -> Result<(Self, Vec<Listener<H::Element>>), PageError> {
        let seed = config.seed.unwrap_or_else(|| host.now_ms().to_bits());
        let mut page = Self {
            config,
            menu: MenuState::Closed,
            timers: Timers::new(),
            resize_timer: None,
            pulse_interval: None,
            observer: None,
            loaded: false,
            rng: SmallRng::seed_from_u64(seed),
        };

        let mut listeners = Vec::new();
        page.bind_navigation(host, &mut listeners);
        page.bind_scroll(&mut listeners);
        page.bind_cards(host, &mut listeners)?;
        page.bind_buttons(host, &mut listeners);
        page.bind_menu(host, &mut listeners);
        page.install_stylesheet(host)?;

        if host.is_loading() {
            listeners.push(Listener::on_document(EventKind::DomContentLoaded, Route::PageReady));
        } else {
            page.on_ready(host)?;
        }

        log::debug!("page: initialized with {} listeners", listeners.len());
        Ok((page, listeners))
    }

    // --- Binding ---

    fn bind_navigation(&self, host: &H, out: &mut Vec<Listener<H::Element>>) {
        let s = &self.config.selectors;
        for link in host.query_all(&s.nav_links) {
            out.push(Listener::on_element(link, EventKind::Click, Route::NavLink));
        }
        for button in host.query_all(&s.cta_buttons) {
            out.push(Listener::on_element(button, EventKind::Click, Route::CallToAction));
        }
        if let Some(play) = host.query(&s.play_button) {
            out.push(Listener::on_element(play, EventKind::Click, Route::PlayButton));
        }
        out.push(Listener::on_window(EventKind::Resize, Route::Resize));
        out.push(Listener::on_document(EventKind::KeyDown, Route::KeyDown));
    }

    fn bind_scroll(&self, out: &mut Vec<Listener<H::Element>>) {
        out.push(Listener::on_window(EventKind::Scroll, Route::NavbarScroll));
        out.push(Listener::on_window(EventKind::Scroll, Route::Parallax));
    }

    fn bind_cards(&mut self, host: &mut H, out: &mut Vec<Listener<H::Element>>) -> Result<(), PageError> {
        for card in host.query_all(&self.config.selectors.icon_cards) {
            let delay = if self.config.card_delay_max_s > 0.0 {
                self.rng.random_range(0.0..self.config.card_delay_max_s)
            } else {
                0.0
            };
            host.set_style(&card, "animation-delay", &effects::seconds(delay))?;
            out.push(Listener::on_element(card.clone(), EventKind::MouseEnter, Route::CardEnter));
            out.push(Listener::on_element(card, EventKind::MouseLeave, Route::CardLeave));
        }
        Ok(())
    }

    fn bind_buttons(&self, host: &H, out: &mut Vec<Listener<H::Element>>) {
        let s = &self.config.selectors;
        for button in host.query_all(&s.glow_buttons) {
            out.push(Listener::on_element(button.clone(), EventKind::MouseEnter, Route::ButtonGlow));
            out.push(Listener::on_element(button, EventKind::Click, Route::ButtonRipple));
        }
        if let Some(play) = host.query(&s.play_button) {
            out.push(Listener::on_element(play.clone(), EventKind::MouseEnter, Route::PulseStart));
            out.push(Listener::on_element(play, EventKind::MouseLeave, Route::PulseStop));
        }
    }

    fn bind_menu(&self, host: &H, out: &mut Vec<Listener<H::Element>>) {
        if let Some(trigger) = host.query(&self.config.selectors.menu_trigger) {
            out.push(Listener::on_element(trigger, EventKind::Click, Route::MenuToggle));
        }
    }

    fn install_stylesheet(&self, host: &mut H) -> Result<(), PageError> {
        let style = host.create_element("style")?;
        host.set_text(&style, consts::EFFECT_STYLESHEET);
        let head = host.head()?;
        host.append_child(&head, &style)
    }

    // --- Dispatch ---

    /// Run the behavior behind `listener`.
    ///
    /// # Errors
    ///
    /// Fails when a required element is missing or the host rejects a mutation.
    pub fn dispatch(
        &mut self,
        host: &mut H,
        listener: &Listener<H::Element>,
        input: &EventInput,
    ) -> Result<Propagation, PageError> {
        match listener.route {
            Route::NavbarScroll => self.on_navbar_scroll(host)?,
            Route::Parallax => self.on_parallax(host)?,
            Route::Resize => self.on_resize(host),
            Route::KeyDown => {
                if let EventInput::Key(key) = input {
                    self.on_key_down(host, key)?;
                }
            }
            Route::PageReady => self.on_ready(host)?,
            route => {
                let Some(element) = listener.element() else {
                    log::warn!("page: {route:?} listener is not bound to an element");
                    return Ok(Propagation::Continue);
                };
                return self.dispatch_element(host, route, element, input);
            }
        }
        Ok(Propagation::Continue)
    }

    fn dispatch_element(
        &mut self,
        host: &mut H,
        route: Route,
        element: &H::Element,
        input: &EventInput,
    ) -> Result<Propagation, PageError> {
        match route {
            Route::NavLink => {
                self.on_nav_click(host, element)?;
                return Ok(Propagation::PreventDefault);
            }
            Route::CallToAction => {
                self.show_notification(host, "Downloading!", NotificationKind::Success)?;
                self.press(host, element, effects::CTA_PRESS)?;
            }
            Route::PlayButton => {
                self.show_notification(host, "Video player would open here!", NotificationKind::Info)?;
                let button = host
                    .closest(element, &self.config.selectors.play_button)
                    .unwrap_or_else(|| element.clone());
                self.press(host, &button, effects::PLAY_PRESS)?;
            }
            Route::ButtonGlow => host.set_style(element, "box-shadow", effects::GLOW_SHADOW)?,
            Route::ButtonRipple => {
                if let EventInput::Pointer { client_x, client_y } = *input {
                    self.spawn_ripple(host, element, client_x, client_y)?;
                }
            }
            Route::PulseStart => self.start_pulse(host, element),
            Route::PulseStop => self.stop_pulse(host),
            Route::CardEnter => {
                host.set_style(element, "animation-play-state", "paused")?;
                host.set_style(element, "transform", effects::CARD_LIFT)?;
            }
            Route::CardLeave => {
                host.set_style(element, "animation-play-state", "running")?;
                host.set_style(element, "transform", "")?;
            }
            Route::MenuToggle => self.transition_menu(host, MenuEvent::TriggerClicked)?,
            Route::NavbarScroll | Route::Parallax | Route::Resize | Route::KeyDown | Route::PageReady => {}
        }
        Ok(Propagation::Continue)
    }

    // --- Handlers ---

    fn on_nav_click(&mut self, host: &mut H, link: &H::Element) -> Result<(), PageError> {
        let target = host.attribute(link, "href").unwrap_or_default();
        if target == consts::HOME_ANCHOR {
            host.scroll_to_top_smooth();
        } else {
            let section = target.replacen('#', "", 1);
            self.show_notification(host, &format!("Navigating to {section}..."), NotificationKind::Default)?;
        }
        Ok(())
    }

    fn press(&mut self, host: &mut H, button: &H::Element, transform: &str) -> Result<(), PageError> {
        host.set_style(button, "transform", transform)?;
        let id = host.set_timeout(self.config.press_revert_ms);
        self.timers.track(id, Task::ClearTransform(button.clone()));
        Ok(())
    }

    fn on_navbar_scroll(&mut self, host: &mut H) -> Result<(), PageError> {
        let selector = &self.config.selectors.navbar;
        let navbar = host.query(selector).ok_or_else(|| PageError::missing(selector))?;
        if self.config.is_scrolled(host.scroll_y()) {
            host.add_class(&navbar, consts::CLASS_SCROLLED)
        } else {
            host.remove_class(&navbar, consts::CLASS_SCROLLED)
        }
    }

    fn on_parallax(&mut self, host: &mut H) -> Result<(), PageError> {
        let Some(background) = host.query(&self.config.selectors.hero_background) else {
            return Ok(());
        };
        let scrolled = host.scroll_y();
        if scrolled < host.inner_height() {
            let transform = effects::parallax_transform(scrolled, self.config.parallax_factor);
            host.set_style(&background, "transform", &transform)?;
        }
        Ok(())
    }

    fn on_resize(&mut self, host: &mut H) {
        if let Some(pending) = self.resize_timer.take() {
            host.cancel(pending);
            self.timers.forget(pending);
        }
        let id = host.set_timeout(self.config.resize_debounce_ms);
        self.timers.track(id, Task::ResizeSettled);
        self.resize_timer = Some(id);
    }

    fn apply_breakpoint(&mut self, host: &mut H) -> Result<(), PageError> {
        let display = if self.config.hides_cards(host.inner_width()) { "none" } else { "flex" };
        log::debug!("page: resize settled, icon cards display={display}");
        for card in host.query_all(&self.config.selectors.icon_cards) {
            host.set_style(&card, "display", display)?;
        }
        Ok(())
    }

    fn on_key_down(&mut self, host: &mut H, key: &str) -> Result<(), PageError> {
        if key == "Escape" && self.menu.is_open() {
            self.transition_menu(host, MenuEvent::EscapePressed)?;
        }
        Ok(())
    }

    fn transition_menu(&mut self, host: &mut H, event: MenuEvent) -> Result<(), PageError> {
        let s = &self.config.selectors;
        let Some(trigger) = host.query(&s.menu_trigger) else {
            return Ok(());
        };
        let panel = host.query(&s.link_panel).ok_or_else(|| PageError::missing(&s.link_panel))?;

        let next = self.menu.next(event);
        if next == self.menu {
            return Ok(());
        }
        let bars = host.query_within(&trigger, &s.menu_bars);
        if next.is_open() {
            host.add_class(&trigger, consts::CLASS_ACTIVE)?;
            host.add_class(&panel, consts::CLASS_MOBILE_ACTIVE)?;
            for (bar, (transform, opacity)) in bars.iter().zip(menu::OPEN_BARS) {
                host.set_style(bar, "transform", transform)?;
                host.set_style(bar, "opacity", opacity)?;
            }
        } else {
            host.remove_class(&trigger, consts::CLASS_ACTIVE)?;
            host.remove_class(&panel, consts::CLASS_MOBILE_ACTIVE)?;
            for bar in &bars {
                host.set_style(bar, "transform", "")?;
                host.set_style(bar, "opacity", "")?;
            }
        }
        if bars.len() < menu::OPEN_BARS.len() {
            log::warn!("page: menu trigger has {} bars, expected {}", bars.len(), menu::OPEN_BARS.len());
        }
        log::debug!("page: menu {:?} -> {next:?} on {event:?}", self.menu);
        self.menu = next;
        Ok(())
    }

    // --- Effects ---

    /// Show a toast in the top-right corner.
    ///
    /// The toast slides in on the next animation frame, stays for the visible
    /// period, slides out and is removed when the exit transition ends.
    ///
    /// # Errors
    ///
    /// Fails when the host cannot create, style or attach the toast.
    pub fn show_notification(
        &mut self,
        host: &mut H,
        message: &str,
        kind: NotificationKind,
    ) -> Result<H::Element, PageError> {
        let toast = host.create_element("div")?;
        host.set_text(&toast, message);
        apply_styles(host, &toast, &effects::notification_styles(kind))?;
        let body = host.body()?;
        host.append_child(&body, &toast)?;

        let enter = host.request_animation_frame()?;
        self.timers.track(enter, Task::NotificationEnter(toast.clone()));
        let exit = host.set_timeout(self.config.notification_visible_ms);
        self.timers.track(exit, Task::NotificationExit(toast.clone()));

        log::debug!("page: notification {kind:?}: {message}");
        Ok(toast)
    }

    fn spawn_ripple(&mut self, host: &mut H, button: &H::Element, client_x: f64, client_y: f64) -> Result<(), PageError> {
        let geometry = RippleGeometry::centered(host.bounding_rect(button), client_x, client_y);
        let ripple = host.create_element("span")?;
        apply_styles(host, &ripple, &geometry.styles())?;
        apply_styles(host, button, &effects::ripple_container_styles())?;
        host.append_child(button, &ripple)?;

        let id = host.set_timeout(self.config.ripple_ms);
        self.timers.track(id, Task::RemoveNode(ripple));
        Ok(())
    }

    fn start_pulse(&mut self, host: &mut H, button: &H::Element) {
        self.stop_pulse(host);
        let id = host.set_interval(self.config.pulse_period_ms);
        self.timers.track(id, Task::PulseTick(button.clone()));
        self.pulse_interval = Some(id);
    }

    fn stop_pulse(&mut self, host: &mut H) {
        if let Some(id) = self.pulse_interval.take() {
            host.cancel(id);
            self.timers.forget(id);
        }
    }

    fn spawn_pulse_ring(&mut self, host: &mut H, button: &H::Element) -> Result<(), PageError> {
        let ring = host.create_element("div")?;
        apply_styles(host, &ring, &effects::pulse_ring_styles())?;
        host.append_child(button, &ring)?;

        let id = host.set_timeout(self.config.pulse_ring_ms);
        self.timers.track(id, Task::RemoveNode(ring));
        Ok(())
    }

    // --- Timers ---

    /// Run the task behind a fired timer. Ids the page no longer owns are ignored.
    ///
    /// # Errors
    ///
    /// Fails when the host rejects the task's mutation.
    pub fn on_timer(&mut self, host: &mut H, id: TimerId) -> Result<(), PageError> {
        let Some(task) = self.timers.fire(id) else {
            return Ok(());
        };
        match task {
            Task::ClearTransform(element) => host.set_style(&element, "transform", "")?,
            Task::RemoveNode(element) => host.remove(&element),
            Task::NotificationEnter(toast) => host.set_style(&toast, "transform", effects::NOTIFICATION_SHOWN)?,
            Task::NotificationExit(toast) => {
                host.set_style(&toast, "transform", effects::NOTIFICATION_HIDDEN)?;
                let remove = host.set_timeout(self.config.notification_exit_ms);
                self.timers.track(remove, Task::RemoveNode(toast));
            }
            Task::PulseTick(button) => self.spawn_pulse_ring(host, &button)?,
            Task::ResizeSettled => {
                self.resize_timer = None;
                self.apply_breakpoint(host)?;
            }
        }
        Ok(())
    }

    // --- Page load ---

    fn on_ready(&mut self, host: &mut H) -> Result<(), PageError> {
        if self.loaded {
            return Ok(());
        }
        for (index, element) in host.query_all(&self.config.selectors.hero_entrance).iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let delay = index as f64 * self.config.hero_stagger_s;
            host.set_style(element, "animation-delay", &effects::seconds(delay))?;
        }

        let observed = host.query_all(&self.config.selectors.icon_cards);
        let options = VisibilityOptions {
            threshold: self.config.visibility_threshold,
            root_margin: self.config.visibility_root_margin.clone(),
        };
        self.observer = Some(host.observe_visibility(&observed, &options)?);

        let body = host.body()?;
        host.add_class(&body, consts::CLASS_LOADED)?;
        self.loaded = true;
        log::debug!("page: loaded, observing {} elements", observed.len());
        Ok(())
    }

    /// An observed element's visibility changed. Entering marks it animated-in for good.
    ///
    /// # Errors
    ///
    /// Fails when the host rejects the class change.
    pub fn on_visibility(&mut self, host: &mut H, element: &H::Element, intersecting: bool) -> Result<(), PageError> {
        if intersecting {
            host.add_class(element, consts::CLASS_ANIMATE_IN)?;
        }
        Ok(())
    }

    // --- Teardown ---

    /// Cancel every timer the page still owns and disconnect the observer.
    ///
    /// Pending removals and press reverts run immediately, so no toast, ripple,
    /// pulse ring or pressed transform outlives the page.
    pub fn dispose(&mut self, host: &mut H) {
        let entries = self.timers.drain();
        log::debug!("page: disposing, cancelling {} timers", entries.len());
        for (id, task) in entries {
            host.cancel(id);
            if let Err(err) = finish_on_dispose(host, task) {
                log::warn!("page: cleanup for timer {id:?} failed: {err}");
            }
        }
        self.resize_timer = None;
        self.pulse_interval = None;
        if let Some(observer) = self.observer.take() {
            host.disconnect(observer);
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn menu(&self) -> MenuState {
        self.menu
    }

    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Whether the page-load routine has run.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of timers the page currently owns.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

/// Settle a cancelled task's DOM effect. Tasks with no lasting effect are dropped.
fn finish_on_dispose<H: Host>(host: &mut H, task: Task<H::Element>) -> Result<(), PageError> {
    match task {
        Task::ClearTransform(element) => host.set_style(&element, "transform", "")?,
        Task::RemoveNode(node) | Task::NotificationExit(node) => host.remove(&node),
        Task::NotificationEnter(_) | Task::PulseTick(_) | Task::ResizeSettled => {}
    }
    Ok(())
}

fn apply_styles<H: Host>(host: &mut H, element: &H::Element, decls: &StyleDecls) -> Result<(), PageError> {
    for (property, value) in decls {
        host.set_style(element, property, value)?;
    }
    Ok(())
}
