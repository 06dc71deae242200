//! Browser console logging.

/// Route `log` records to the browser console and panics to `console.error`.
pub(crate) fn init() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        // Already installed by an earlier initialize.
        log::debug!("harmoniq: console logger not replaced: {err}");
    }
}
