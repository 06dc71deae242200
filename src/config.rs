//! Inline page configuration.
//!
//! The page may carry a `<script type="application/json" id="harmoniq-config">`
//! element whose body overrides fields of [`PageConfig`]. Without it the
//! defaults apply.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use landing::config::PageConfig;
use landing::error::PageError;

/// Id of the element holding the inline JSON configuration.
pub(crate) const CONFIG_ELEMENT_ID: &str = "harmoniq-config";

/// Read the inline configuration from the current document.
pub(crate) fn read_inline() -> Result<PageConfig, PageError> {
    let text = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|element| element.text_content());
    parse_inline(text.as_deref())
}

/// Parse an inline configuration body. Missing or blank bodies mean defaults.
pub(crate) fn parse_inline(text: Option<&str>) -> Result<PageConfig, PageError> {
    match text.map(str::trim) {
        Some(body) if !body.is_empty() => {
            log::info!("harmoniq: using inline configuration from #{CONFIG_ELEMENT_ID}");
            PageConfig::from_json(body)
        }
        _ => Ok(PageConfig::default()),
    }
}
