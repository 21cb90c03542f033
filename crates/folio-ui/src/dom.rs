//! Document access over `web-sys`
//!
//! Provides panic-free lookups. A selector that matches nothing is
//! `Ok(None)`; only a selector the browser cannot parse is an error.

use folio_core::dom::{DomHost, MessageTarget};
use web_sys::{Document, Element};

use crate::error::{Result, UiError};

/// The current document
///
/// # Errors
///
/// Returns an error outside a browser window.
pub fn document() -> Result<Document> {
    web_sys::window()
        .ok_or(UiError::WindowNotAvailable)?
        .document()
        .ok_or(UiError::DocumentNotAvailable)
}

/// First element matching `selector`
///
/// # Errors
///
/// Returns [`UiError::InvalidSelector`] if the selector does not parse.
pub fn query(selector: &str) -> Result<Option<Element>> {
    document()?
        .query_selector(selector)
        .map_err(|e| UiError::invalid_selector(selector, &e))
}

/// [`DomHost`] over a live document
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    /// Wrap the current document.
    ///
    /// # Errors
    ///
    /// Returns an error outside a browser window.
    pub fn new() -> Result<Self> {
        Ok(Self::from_document(document()?))
    }

    #[must_use]
    pub const fn from_document(document: Document) -> Self {
        Self { document }
    }
}

impl DomHost for WebDom {
    type Container = Element;

    fn query(&self, selector: &str) -> folio_core::Result<Option<Element>> {
        self.document
            .query_selector(selector)
            .map_err(|e| UiError::invalid_selector(selector, &e).into())
    }

    fn set_inner_html(&self, container: &Element, markup: &str) {
        container.set_inner_html(markup);
    }
}

/// Element used as a transient message box
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTarget(Element);

impl ElementTarget {
    #[must_use]
    pub const fn new(element: Element) -> Self {
        Self(element)
    }
}

impl MessageTarget for ElementTarget {
    fn set_text(&self, text: &str) {
        self.0.set_text_content(Some(text));
    }

    fn set_class(&self, class_name: &str) {
        self.0.set_class_name(class_name);
    }
}
