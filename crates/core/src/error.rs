//! Core error types for folio operations.
//!
//! All errors are explicit, typed, and recoverable - no panics allowed.
//! Page-level callers usually degrade these to a logged diagnostic; the
//! typed form exists so callers that care can tell failures apart.

use thiserror::Error;

/// Core error type for folio operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    // Network errors
    #[error("failed to reach '{url}': {reason}")]
    Transport { url: String, reason: String },

    #[error("failed to read response body from '{url}': {reason}")]
    Decode { url: String, reason: String },

    #[error("resource not found: '{url}' (HTTP 404)")]
    NotFound { url: String },

    #[error("HTTP error from '{url}': status {status}")]
    HttpStatus { url: String, status: u16 },

    // Parsing errors
    #[error("failed to parse JSON from '{url}': {reason}")]
    JsonParseFailed { url: String, reason: String },

    #[error("TOML parse error: {reason}")]
    TomlParseFailed { reason: String },

    // Configuration errors
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Document errors
    #[error("DOM operation failed: {reason}")]
    Dom { reason: String },
}

impl Error {
    /// Create a transport error.
    pub fn transport(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Transport {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a body decoding error.
    pub fn decode(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a not-found error.
    pub fn not_found(url: impl Into<String>) -> Self {
        Self::NotFound { url: url.into() }
    }

    /// Create an error for any other non-success HTTP status.
    pub fn http_status(url: impl Into<String>, status: u16) -> Self {
        Self::HttpStatus {
            url: url.into(),
            status,
        }
    }

    /// Create a JSON parse error.
    pub fn json_parse_failed(url: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::JsonParseFailed {
            url: url.into(),
            reason: reason.into(),
        }
    }

    /// Create a TOML parse error.
    pub fn toml_parse_failed(reason: impl Into<String>) -> Self {
        Self::TomlParseFailed {
            reason: reason.into(),
        }
    }

    /// Create an invalid configuration error.
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Create a DOM error.
    pub fn dom(reason: impl Into<String>) -> Self {
        Self::Dom {
            reason: reason.into(),
        }
    }
}

/// The standard Result type for folio operations.
pub type Result<T> = std::result::Result<T, Error>;
