//! Tests for the DOM helpers
//!
//! Note: These tests require a WASM environment with DOM access.
//! Run with: wasm-pack test --headless --firefox

#![cfg(target_arch = "wasm32")]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_test::*;

use super::*;

wasm_bindgen_test_configure!(run_in_browser);

fn mount(id: &str, html: &str) -> Element {
    let document = document().expect("should have document");
    let element = document.create_element("div").expect("div creates");
    element.set_id(id);
    element.set_inner_html(html);
    document
        .body()
        .expect("should have body")
        .append_child(&element)
        .expect("append succeeds");
    element
}

#[wasm_bindgen_test]
fn test_create_element_with_classes_and_markup() {
    let element = create_element("div", &["a", "b"], "<span>x</span>").expect("element creates");

    assert_eq!(element.tag_name(), "DIV");
    assert_eq!(element.class_list().length(), 2);
    assert!(element.class_list().contains("a"));
    assert!(element.class_list().contains("b"));
    assert_eq!(element.inner_html(), "<span>x</span>");
    assert!(element.parent_node().is_none(), "element must stay detached");
}

#[wasm_bindgen_test]
fn test_create_element_defaults() {
    let element = create_element::<&str>("section", &[], "").expect("element creates");

    assert_eq!(element.tag_name(), "SECTION");
    assert_eq!(element.class_name(), "");
    assert_eq!(element.inner_html(), "");
}

#[wasm_bindgen_test]
fn test_create_element_invalid_tag() {
    let result = create_element::<&str>("1nvalid tag", &[], "");
    assert!(matches!(result, Err(UiError::ElementCreation { .. })));
}

#[wasm_bindgen_test]
fn test_toggle_class_flips_presence() {
    let element = mount("toggle-target", "");

    toggle_class("#toggle-target", "open").expect("toggle succeeds");
    assert!(element.class_list().contains("open"));

    toggle_class("#toggle-target", "open").expect("toggle succeeds");
    assert!(!element.class_list().contains("open"));
}

#[wasm_bindgen_test]
fn test_missing_targets_are_noops() {
    assert!(toggle_class("#does-not-exist", "open").is_ok());
    assert!(smooth_scroll_to("#does-not-exist").is_ok());
}

#[wasm_bindgen_test]
fn test_invalid_selector_is_error() {
    assert!(matches!(
        toggle_class("div[", "open"),
        Err(UiError::InvalidSelector { .. })
    ));
}

#[wasm_bindgen_test]
fn test_smooth_scroll_to_existing_element() {
    mount("scroll-target", "<p>projects</p>");
    assert!(smooth_scroll_to("#scroll-target").is_ok());
}

#[wasm_bindgen_test]
async fn test_show_message_sets_then_clears() {
    let container = mount("message-box", "");

    show_message(Some(&container), "ok", &MessageKind::success(), 50);
    assert_eq!(container.text_content().as_deref(), Some("ok"));
    assert_eq!(container.class_name(), "success");

    TimeoutFuture::new(80).await;
    assert_eq!(container.text_content().as_deref(), Some(""));
    assert_eq!(container.class_name(), "");
}

#[wasm_bindgen_test]
fn test_show_message_without_container() {
    show_message(None, "ok", &MessageKind::error(), 50);
}

#[wasm_bindgen_test]
async fn test_debounce_fires_once_with_last_args() {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let debounced = debounce(move |value: u32| sink.borrow_mut().push(value), 100);

    for value in 1..=5 {
        debounced.invoke(value);
        TimeoutFuture::new(10).await;
    }
    TimeoutFuture::new(150).await;

    assert_eq!(*calls.borrow(), vec![5]);
}

#[wasm_bindgen_test]
async fn test_fetch_json_missing_resource_is_none() {
    let outcome: FetchOutcome<serde_json::Value> =
        fetch_json("/folio-test-missing-resource.json").await;
    assert!(!outcome.is_success());

    let value: Option<serde_json::Value> =
        fetch_json_or_none("/folio-test-missing-resource.json").await;
    assert!(value.is_none());
}
