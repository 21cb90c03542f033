//! Browser console diagnostics

use folio_core::Diagnostics;

/// Writes diagnostics to the browser console.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleDiagnostics;

impl Diagnostics for ConsoleDiagnostics {
    fn error(&self, message: &str) {
        web_sys::console::error_1(&message.into());
    }

    fn info(&self, message: &str) {
        web_sys::console::log_1(&message.into());
    }
}
