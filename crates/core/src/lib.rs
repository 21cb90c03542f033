//! Platform-neutral core of the folio portfolio site glue
//!
//! Everything the browser adapter (`folio-ui`) does is expressed here
//! against small traits, so the behavior can be exercised natively.
//!
//! ## Module Structure
//! - `config`: fragment mapping and helper defaults (TOML)
//! - `loader`: concurrent fragment loading with per-slot reports
//! - `fetch`: JSON retrieval with a typed outcome and a null-on-failure shim
//! - `debounce`: single-slot trailing-edge debouncer
//! - `message`: transient status messages
//! - `email`: contact-form address check
//! - `dom`: platform seams (document, HTTP, timers)
//! - `diagnostics`: where swallowed failures are reported
//! - `testing`: in-memory seam implementations
//! - `error` / `result`: error type and reporting combinators

#![forbid(unsafe_code)]

pub mod config;
pub mod debounce;
pub mod diagnostics;
pub mod dom;
pub mod email;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod message;
pub mod result;
pub mod testing;

#[cfg(test)]
mod tests;

pub use config::{FragmentSlot, SiteConfig};
pub use debounce::Debouncer;
pub use diagnostics::{Diagnostics, MemoryDiagnostics};
pub use email::is_valid_email;
pub use error::{Error, Result};
pub use fetch::FetchOutcome;
pub use loader::{LoadReport, LoadStatus, LoadSummary};
pub use message::MessageKind;
pub use result::ResultExt;
