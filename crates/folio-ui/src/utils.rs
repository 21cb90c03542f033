//! DOM helper functions
//!
//! Each helper is independent. Helpers that target a selector do nothing
//! when the selector matches no element.

use folio_core::debounce::Debouncer;
use folio_core::fetch::{self, FetchOutcome};
use folio_core::message::{self, MessageKind};
use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;
use web_sys::{Element, ScrollBehavior, ScrollIntoViewOptions};

use crate::console::ConsoleDiagnostics;
use crate::dom::{ElementTarget, document, query};
use crate::error::{Result, UiError};
use crate::net::HttpSource;
use crate::timers::GlooScheduler;

pub use folio_core::email::is_valid_email;

/// Smoothly scroll the first element matching `selector` into view.
///
/// # Errors
///
/// Returns an error if the selector does not parse or there is no document.
pub fn smooth_scroll_to(selector: &str) -> Result<()> {
    let Some(element) = query(selector)? else {
        return Ok(());
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

/// Build a detached element with optional classes and inner markup.
///
/// The caller is responsible for attaching it.
///
/// # Errors
///
/// Returns an error if the tag name or a class name is rejected by the
/// browser, or there is no document.
pub fn create_element<S: AsRef<str>>(tag: &str, classes: &[S], inner_html: &str) -> Result<Element> {
    let element = document()?
        .create_element(tag)
        .map_err(|e| UiError::ElementCreation {
            tag: tag.to_string(),
            reason: format!("{e:?}"),
        })?;

    if !classes.is_empty() {
        let tokens: js_sys::Array = classes
            .iter()
            .map(|class| JsValue::from_str(class.as_ref()))
            .collect();
        element
            .class_list()
            .add(&tokens)
            .map_err(|e| UiError::ClassList(format!("{e:?}")))?;
    }

    if !inner_html.is_empty() {
        element.set_inner_html(inner_html);
    }

    Ok(element)
}

/// Flip `class_name` on the first element matching `selector`.
///
/// # Errors
///
/// Returns an error if the selector or class name is rejected.
pub fn toggle_class(selector: &str, class_name: &str) -> Result<()> {
    let Some(element) = query(selector)? else {
        return Ok(());
    };

    element
        .class_list()
        .toggle(class_name)
        .map(|_| ())
        .map_err(|e| UiError::ClassList(format!("{e:?}")))
}

/// Show `message` in `container` with class `kind` for `duration_ms`.
///
/// Overlapping calls are not coordinated; see [`folio_core::message`].
pub fn show_message(
    container: Option<&Element>,
    message: &str,
    kind: &MessageKind,
    duration_ms: u32,
) {
    let target = container.cloned().map(ElementTarget::new);
    message::show_message(&GlooScheduler, target.as_ref(), message, kind, duration_ms);
}

/// GET `url` and parse the body as JSON, keeping the failure kind.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> FetchOutcome<T> {
    fetch::fetch_json(&HttpSource, url).await
}

/// GET `url` and parse the body as JSON; failures are logged to the
/// console and yield `None`.
pub async fn fetch_json_or_none<T: DeserializeOwned>(url: &str) -> Option<T> {
    fetch::fetch_json_or_none(&HttpSource, url, &ConsoleDiagnostics).await
}

/// Wrap `callback` so it only runs after `wait_ms` of quiet.
pub fn debounce<A, F>(callback: F, wait_ms: u32) -> Debouncer<GlooScheduler, A>
where
    A: 'static,
    F: Fn(A) + 'static,
{
    Debouncer::new(GlooScheduler, wait_ms, callback)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod utils_test;
