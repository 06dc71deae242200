//! Error type shared by the controller and its hosts.

/// Failures a handler can report back to the host.
///
/// Optional elements never produce an error; they are skipped. Only
/// elements the markup contract requires surface as [`PageError::MissingElement`].
#[derive(Debug, thiserror::Error)]
pub enum PageError {
    #[error("required element `{selector}` is missing from the document")]
    MissingElement { selector: String },
    #[error("the page controller is already initialized")]
    AlreadyInitialized,
    #[error("invalid page configuration: {0}")]
    Config(#[from] serde_json::Error),
    #[error("host call failed: {0}")]
    Host(String),
}

impl PageError {
    pub(crate) fn missing(selector: &str) -> Self {
        Self::MissingElement { selector: selector.to_owned() }
    }
}
