//! Client-side glue for the folio portfolio site
//!
//! This crate compiles to WASM and provides the browser half of the site:
//! shared header/footer/sidebar fragments are fetched and injected on page
//! load, and a handful of DOM helpers are exported for page scripts.
//!
//! ## Architecture
//! - Page logic lives in `folio-core` behind small traits
//! - This crate implements those traits with `web-sys`, `gloo-net` and
//!   `gloo-timers`
//! - Swallowed failures are written to the browser console
//!
//! ## Module Structure
//! - `bindings`: camelCase exports for plain JavaScript
//! - `config`: embedded `site.toml`
//! - `console`: console diagnostics sink
//! - `dom`: document access and element handles
//! - `loader`: DOM-ready trigger and fragment loading
//! - `net`: HTTP retrieval
//! - `timers`: `setTimeout` scheduling
//! - `utils`: the DOM helper functions
//! - `error`: error types

#![forbid(unsafe_code)]

pub mod bindings;
pub mod config;
pub mod console;
pub mod dom;
pub mod error;
pub mod loader;
pub mod net;
pub mod timers;
pub mod utils;

pub use error::UiError;
