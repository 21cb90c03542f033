//! Tests for the JavaScript exports
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]
#![allow(clippy::expect_used)]

use folio_core::SiteConfig;
use gloo_timers::future::TimeoutFuture;
use js_sys::{Object, Reflect};
use wasm_bindgen_test::*;

use super::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen(inline_js = "
export function makeRecorder() {
    const recorder = function (...args) {
        recorder.count += 1;
        recorder.lastThis = this;
        recorder.lastArgs = args;
    };
    recorder.count = 0;
    return recorder;
}
")]
extern "C" {
    #[wasm_bindgen(js_name = makeRecorder)]
    fn make_recorder() -> Function;
}

fn recorded(recorder: &Function, key: &str) -> JsValue {
    Reflect::get(recorder, &JsValue::from_str(key)).expect("recorder property reads")
}

fn custom_config(toml: &str) -> SiteConfig {
    SiteConfig::from_toml_str(toml).expect("test config parses")
}

#[wasm_bindgen_test]
async fn test_debounce_forwards_this_and_last_arguments() {
    let recorder = make_recorder();
    let debounced = debounce(recorder.clone(), Some(20));
    let this_obj = Object::new();

    for i in 0..5 {
        debounced
            .call2(&this_obj, &JsValue::from(i), &JsValue::from_str("tail"))
            .expect("wrapper is callable");
    }
    assert_eq!(recorded(&recorder, "count").as_f64(), Some(0.0));

    TimeoutFuture::new(60).await;

    assert_eq!(recorded(&recorder, "count").as_f64(), Some(1.0));
    assert!(Object::is(&recorded(&recorder, "lastThis"), &this_obj));

    let args: Array = recorded(&recorder, "lastArgs")
        .dyn_into()
        .expect("arguments are recorded as an array");
    assert_eq!(args.length(), 2);
    assert_eq!(args.get(0).as_f64(), Some(4.0));
    assert_eq!(args.get(1).as_string().as_deref(), Some("tail"));
}

#[wasm_bindgen_test]
async fn test_debounce_without_wait_uses_configured_default() {
    config::install(custom_config("[debounce]\nwait_ms = 10\n"));
    let recorder = make_recorder();
    let debounced = debounce(recorder.clone(), None);
    config::install(SiteConfig::default());

    debounced.call0(&JsValue::NULL).expect("wrapper is callable");
    TimeoutFuture::new(50).await;

    assert_eq!(recorded(&recorder, "count").as_f64(), Some(1.0));
}

#[wasm_bindgen_test]
async fn test_fetch_json_missing_resource_resolves_null() {
    let value = fetch_json("/folio-test-missing-resource.json".to_string()).await;
    assert!(value.is_null());
}

#[wasm_bindgen_test]
fn test_create_element_without_optional_arguments() {
    let element = create_element("article", None, None).expect("element creates");

    assert_eq!(element.tag_name(), "ARTICLE");
    assert_eq!(element.class_name(), "");
    assert_eq!(element.inner_html(), "");
}

#[wasm_bindgen_test]
fn test_create_element_with_optional_arguments() {
    let element = create_element(
        "li",
        Some(vec!["card".to_string(), "featured".to_string()]),
        Some("<b>folio</b>".to_string()),
    )
    .expect("element creates");

    assert!(element.class_list().contains("card"));
    assert!(element.class_list().contains("featured"));
    assert_eq!(element.inner_html(), "<b>folio</b>");
}

#[wasm_bindgen_test]
fn test_show_message_defaults_to_success_kind() {
    let container = utils::create_element::<&str>("div", &[], "").expect("div creates");

    show_message(Some(container.clone()), "Sent", None, None);

    assert_eq!(container.text_content().as_deref(), Some("Sent"));
    assert_eq!(container.class_name(), "success");
}

#[wasm_bindgen_test]
async fn test_show_message_uses_configured_kind_and_duration() {
    config::install(custom_config(
        "[message]\nkind = \"notice\"\nduration_ms = 20\n",
    ));
    let container = utils::create_element::<&str>("div", &[], "").expect("div creates");

    show_message(Some(container.clone()), "Saved", None, None);
    config::install(SiteConfig::default());

    assert_eq!(container.class_name(), "notice");

    // The built-in 3000 ms default would still be showing the message
    TimeoutFuture::new(60).await;
    assert_eq!(container.text_content().as_deref(), Some(""));
    assert_eq!(container.class_name(), "");
}

#[wasm_bindgen_test]
fn test_is_valid_email_export() {
    assert!(is_valid_email("hello@example.com"));
    assert!(!is_valid_email("hello @example.com"));
}
