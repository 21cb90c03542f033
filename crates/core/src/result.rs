//! Extension trait for degrading Results to the "fail silent" page policy.
//!
//! Page helpers never halt on failure: they report on a [`Diagnostics`]
//! sink and carry on with an absent or default value.

use crate::diagnostics::Diagnostics;
use crate::error::Result;

/// Extension trait providing reporting combinators for Results.
pub trait ResultExt<T> {
    /// Convert a Result to an Option, reporting the error if present.
    fn into_option_reported<D>(self, diagnostics: &D, context: &str) -> Option<T>
    where
        D: Diagnostics + ?Sized;

    /// Get the value or a default, reporting the error if present.
    fn or_default_reported<D>(self, diagnostics: &D, context: &str, default: T) -> T
    where
        D: Diagnostics + ?Sized;
}

impl<T> ResultExt<T> for Result<T> {
    fn into_option_reported<D>(self, diagnostics: &D, context: &str) -> Option<T>
    where
        D: Diagnostics + ?Sized,
    {
        match self {
            Ok(value) => Some(value),
            Err(e) => {
                diagnostics.error(&format!("{context}: {e}"));
                None
            }
        }
    }

    fn or_default_reported<D>(self, diagnostics: &D, context: &str, default: T) -> T
    where
        D: Diagnostics + ?Sized,
    {
        match self {
            Ok(value) => value,
            Err(e) => {
                diagnostics.error(&format!("{context}, using default: {e}"));
                default
            }
        }
    }
}
