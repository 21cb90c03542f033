//! JavaScript exports
//!
//! Plain page scripts call the helpers under their familiar camelCase
//! names. Optional arguments fall back to the page-wide config in
//! [`crate::config`].

use folio_core::{Diagnostics, MessageKind};
use js_sys::{Array, Function};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::console::ConsoleDiagnostics;
use crate::{config, loader, utils};

// Shipped as a module snippet so pages with a strict CSP (no 'unsafe-eval')
// can still use `debounce`.
#[wasm_bindgen(inline_js = "
export function debounceWrapper(invoke) {
    return function (...args) { invoke(this, args); };
}
")]
extern "C" {
    /// Plain JS function that forwards `this` and its arguments to `invoke`
    #[wasm_bindgen(js_name = debounceWrapper)]
    fn debounce_wrapper(invoke: &Function) -> Function;
}

#[wasm_bindgen(js_name = smoothScrollTo)]
pub fn smooth_scroll_to(selector: &str) -> Result<(), JsValue> {
    utils::smooth_scroll_to(selector).map_err(Into::into)
}

#[wasm_bindgen(js_name = createElement)]
pub fn create_element(
    tag: &str,
    classes: Option<Vec<String>>,
    inner_html: Option<String>,
) -> Result<Element, JsValue> {
    utils::create_element(
        tag,
        &classes.unwrap_or_default(),
        inner_html.as_deref().unwrap_or_default(),
    )
    .map_err(Into::into)
}

#[wasm_bindgen(js_name = toggleClass)]
pub fn toggle_class(selector: &str, class_name: &str) -> Result<(), JsValue> {
    utils::toggle_class(selector, class_name).map_err(Into::into)
}

#[wasm_bindgen(js_name = isValidEmail)]
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    utils::is_valid_email(email)
}

#[wasm_bindgen(js_name = showMessage)]
pub fn show_message(
    container: Option<Element>,
    message: &str,
    kind: Option<String>,
    duration_ms: Option<u32>,
) {
    let kind = kind.map_or_else(config::message_kind, MessageKind::from);
    utils::show_message(
        container.as_ref(),
        message,
        &kind,
        duration_ms.unwrap_or_else(config::message_duration_ms),
    );
}

/// Resolves to the parsed JSON, or `null` on any failure.
#[wasm_bindgen(js_name = fetchJSON)]
pub async fn fetch_json(url: String) -> JsValue {
    let Some(value) = utils::fetch_json_or_none::<serde_json::Value>(&url).await else {
        return JsValue::NULL;
    };

    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .unwrap_or_else(|e| {
            ConsoleDiagnostics.error(&format!("Failed to convert JSON from {url}: {e}"));
            JsValue::NULL
        })
}

/// Returns a function that runs `func` after `wait` ms without new calls.
///
/// The returned function forwards its `this` and the arguments of the last
/// call.
#[wasm_bindgen(js_name = debounce)]
pub fn debounce(func: Function, wait: Option<u32>) -> Function {
    let debouncer = utils::debounce(
        move |(this, args): (JsValue, Array)| {
            if let Err(e) = func.apply(&this, &args) {
                ConsoleDiagnostics.error(&format!("Debounced callback threw: {e:?}"));
            }
        },
        wait.unwrap_or_else(config::debounce_wait_ms),
    );

    let invoke = Closure::<dyn Fn(JsValue, Array)>::new(move |this: JsValue, args: Array| {
        debouncer.invoke((this, args));
    });
    let wrapper = debounce_wrapper(invoke.as_ref().unchecked_ref());

    // The wrapper may be called for the rest of the page's life
    invoke.forget();
    wrapper
}

/// Fill `selector` with the fragment at `url`. Never rejects.
#[wasm_bindgen(js_name = loadComponent)]
pub async fn load_component(selector: String, url: String) {
    if let Err(e) = loader::load_component(&selector, &url).await {
        ConsoleDiagnostics.error(&format!("Failed to load {url}: {e}"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod bindings_test;
