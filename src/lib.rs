//! # harmoniq
//!
//! WebAssembly entry point for the Harmoniq landing page.
//!
//! This crate implements the [`landing::host::Host`] capability over the
//! browser DOM and wires DOM listeners, `gloo-timers` timers, animation
//! frames and an `IntersectionObserver` to the [`landing::page::Page`]
//! controller. Nothing runs when the module loads: the page script calls
//! [`initialize`] once and keeps the returned [`PageHandle`].

mod app;
mod config;
mod logging;
mod web_host;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use landing::error::PageError;
use wasm_bindgen::prelude::*;

use crate::app::App;

thread_local! {
    static LIVE: Cell<bool> = const { Cell::new(false) };
}

/// Bind the landing page behavior to the current document.
///
/// # Errors
///
/// Fails if a page handle is already live, the inline configuration is
/// malformed, or the document cannot be bound.
#[wasm_bindgen]
pub fn initialize() -> Result<PageHandle, JsError> {
    logging::init();
    if LIVE.with(Cell::get) {
        return Err(PageError::AlreadyInitialized.into());
    }
    let config = config::read_inline()?;
    let app = App::start(config)?;
    LIVE.with(|live| live.set(true));
    log::info!("harmoniq: landing page initialized");
    Ok(PageHandle { app: Some(app) })
}

/// Owner of the bound page. Disposing (or dropping) it unbinds everything.
#[wasm_bindgen]
pub struct PageHandle {
    app: Option<Rc<RefCell<App>>>,
}

#[wasm_bindgen]
impl PageHandle {
    /// Remove every listener, cancel every timer and release the controller.
    pub fn dispose(&mut self) {
        let Some(app) = self.app.take() else {
            return;
        };
        match app.try_borrow_mut() {
            Ok(mut app) => app.teardown(),
            Err(_) => log::error!("harmoniq: dispose called from inside a page callback; listeners left bound"),
        }
        LIVE.with(|live| live.set(false));
        log::info!("harmoniq: landing page disposed");
    }
}

impl Drop for PageHandle {
    fn drop(&mut self) {
        self.dispose();
    }
}
