//! WASM entry point
//!
//! Installs the panic hook, reads the embedded site config, and fills the
//! shared page fragments once the document has been parsed.

use folio_core::Diagnostics;
use folio_ui::config::active_config;
use folio_ui::console::ConsoleDiagnostics;
use folio_ui::loader::{load_site_fragments, on_dom_ready};
use wasm_bindgen_futures::spawn_local;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();

    let config = active_config();

    let scheduled = on_dom_ready(move || {
        spawn_local(async move {
            if let Err(e) = load_site_fragments(&config).await {
                ConsoleDiagnostics.error(&format!("Fragment loading aborted: {e}"));
            }
        });
    });

    if let Err(e) = scheduled {
        ConsoleDiagnostics.error(&format!("Page startup failed: {e}"));
    }
}
