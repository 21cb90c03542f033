//! Error types for the browser glue
//!
//! `JsValue` errors coming out of `web-sys` are stringified with `{:?}` at
//! the point they are caught; nothing here holds a JS handle.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Errors that can occur in DOM helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// Not running in a browser window
    #[error("no window object available")]
    WindowNotAvailable,

    /// Window has no document
    #[error("no document object available")]
    DocumentNotAvailable,

    /// `querySelector` rejected the selector
    #[error("invalid selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    /// `createElement` rejected the tag name
    #[error("failed to create <{tag}>: {reason}")]
    ElementCreation { tag: String, reason: String },

    /// A class list edit failed (e.g. class name with whitespace)
    #[error("class list update failed: {0}")]
    ClassList(String),

    /// Event listener registration failed
    #[error("failed to add '{event}' listener: {reason}")]
    Listener { event: String, reason: String },
}

impl UiError {
    pub(crate) fn invalid_selector(selector: &str, err: &JsValue) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: format!("{err:?}"),
        }
    }
}

impl From<UiError> for folio_core::Error {
    fn from(err: UiError) -> Self {
        Self::dom(err.to_string())
    }
}

impl From<UiError> for JsValue {
    fn from(err: UiError) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}

/// Result type alias for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
