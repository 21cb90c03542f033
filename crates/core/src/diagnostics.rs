//! Diagnostic channel
//!
//! Failures that are swallowed rather than returned (fragment loads, the
//! null-returning JSON fetch) are reported here. In the browser this is the
//! console; in tests it is an in-memory log.

use std::cell::RefCell;

/// Severity of a diagnostic entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Informational message
    Info,
    /// A swallowed failure
    Error,
}

/// A single recorded diagnostic
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticEntry {
    pub level: Level,
    pub message: String,
}

/// Sink for human-readable diagnostics.
pub trait Diagnostics {
    /// Report a swallowed failure.
    fn error(&self, message: &str);

    /// Report progress. Ignored unless the sink cares.
    fn info(&self, message: &str) {
        let _ = message;
    }
}

/// Records diagnostics in memory.
#[derive(Debug, Default)]
pub struct MemoryDiagnostics {
    entries: RefCell<Vec<DiagnosticEntry>>,
}

impl MemoryDiagnostics {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every recorded entry, oldest first
    #[must_use]
    pub fn entries(&self) -> Vec<DiagnosticEntry> {
        self.entries.borrow().clone()
    }

    /// Messages recorded at [`Level::Error`]
    #[must_use]
    pub fn errors(&self) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|entry| entry.level == Level::Error)
            .map(|entry| entry.message.clone())
            .collect()
    }

    fn push(&self, level: Level, message: &str) {
        self.entries.borrow_mut().push(DiagnosticEntry {
            level,
            message: message.to_string(),
        });
    }
}

impl Diagnostics for MemoryDiagnostics {
    fn error(&self, message: &str) {
        self.push(Level::Error, message);
    }

    fn info(&self, message: &str) {
        self.push(Level::Info, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_diagnostics_records_in_order() {
        let diagnostics = MemoryDiagnostics::new();
        diagnostics.info("loading");
        diagnostics.error("failed");

        let entries = diagnostics.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, Level::Info);
        assert_eq!(entries[1].message, "failed");
        assert_eq!(diagnostics.errors(), vec!["failed".to_string()]);
    }
}
