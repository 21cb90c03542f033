//! Page-ready fragment loading
//!
//! Fills the configured placeholder containers once the document has been
//! parsed, without waiting for images or other subresources.

use folio_core::config::FragmentSlot;
use folio_core::loader::{self, LoadReport, LoadSummary};
use folio_core::{Diagnostics, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::console::ConsoleDiagnostics;
use crate::dom::{WebDom, document};
use crate::error::{Result, UiError};
use crate::net::HttpSource;

/// Run `f` once the document structure is parsed.
///
/// If `DOMContentLoaded` has already fired (the WASM module usually
/// finishes instantiating after it), `f` runs immediately.
///
/// # Errors
///
/// Returns an error if there is no document or the listener cannot be added.
pub fn on_dom_ready<F>(f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    let document = document()?;
    if document.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback: Closure<dyn FnMut()> = Closure::once(f);
    document
        .add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())
        .map_err(|e| UiError::Listener {
            event: "DOMContentLoaded".to_string(),
            reason: format!("{e:?}"),
        })?;
    // Fires once; the listener owns the closure for the rest of the page
    callback.forget();

    Ok(())
}

/// Fill one container from `url`.
///
/// # Errors
///
/// Returns an error only outside a browser window. Fetch failures are
/// logged to the console and show up in the report.
pub async fn load_component(selector: &str, url: &str) -> Result<LoadReport> {
    let dom = WebDom::new()?;
    let slot = FragmentSlot::new(selector, url);
    Ok(loader::load_component(&dom, &HttpSource, &ConsoleDiagnostics, &slot).await)
}

/// Load every configured fragment concurrently.
///
/// # Errors
///
/// Returns an error only outside a browser window.
pub async fn load_site_fragments(config: &SiteConfig) -> Result<Vec<LoadReport>> {
    let dom = WebDom::new()?;
    let reports =
        loader::load_components(&dom, &HttpSource, &ConsoleDiagnostics, &config.fragments).await;

    ConsoleDiagnostics.info(&format!(
        "Fragments: {}",
        LoadSummary::from_reports(&reports)
    ));
    Ok(reports)
}
