//! Embedded site configuration
//!
//! The page-wide config lives in a thread-local so the JS exports can read
//! their defaults (message class and duration, debounce wait) from it.
//! It starts as the embedded `config/site.toml`; [`install`] replaces it.

use std::cell::RefCell;

use folio_core::{Diagnostics, MessageKind, ResultExt, SiteConfig};

use crate::console::ConsoleDiagnostics;

/// `config/site.toml`, baked into the WASM binary
pub const SITE_TOML: &str = include_str!("../config/site.toml");

thread_local! {
    static ACTIVE: RefCell<SiteConfig> = RefCell::new(site_config(&ConsoleDiagnostics));
}

/// Parse the embedded config, falling back to the built-in defaults.
pub fn site_config<D: Diagnostics + ?Sized>(diagnostics: &D) -> SiteConfig {
    SiteConfig::from_toml_str(SITE_TOML).or_default_reported(
        diagnostics,
        "Invalid site config",
        SiteConfig::default(),
    )
}

/// Replace the page-wide config.
pub fn install(config: SiteConfig) {
    ACTIVE.with(|active| *active.borrow_mut() = config);
}

/// Snapshot of the page-wide config
#[must_use]
pub fn active_config() -> SiteConfig {
    ACTIVE.with(|active| active.borrow().clone())
}

/// Class applied by `showMessage` when the caller passes none
#[must_use]
pub fn message_kind() -> MessageKind {
    ACTIVE.with(|active| MessageKind::new(active.borrow().message.kind.as_str()))
}

/// How long `showMessage` keeps a message up when the caller passes no duration
#[must_use]
pub fn message_duration_ms() -> u32 {
    ACTIVE.with(|active| active.borrow().message.duration_ms)
}

/// Quiet period used by `debounce` when the caller passes no wait
#[must_use]
pub fn debounce_wait_ms() -> u32 {
    ACTIVE.with(|active| active.borrow().debounce.wait_ms)
}
