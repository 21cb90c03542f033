//! Platform seams
//!
//! The browser adapter implements these traits over `web-sys`, `gloo-net`
//! and `gloo-timers`; the [`crate::testing`] module implements them in
//! memory so the page logic runs under plain `cargo test`.

use std::future::Future;

use crate::error::Result;

/// A document that can be queried by CSS selector.
pub trait DomHost {
    /// Handle to a live element
    type Container;

    /// Find the first element matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Dom`] if the selector cannot be parsed.
    fn query(&self, selector: &str) -> Result<Option<Self::Container>>;

    /// Replace the element's inner markup verbatim.
    fn set_inner_html(&self, container: &Self::Container, markup: &str);
}

/// Raw HTTP response as seen by page code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}

/// GET-style retrieval of a resource as text.
pub trait TextSource {
    /// Retrieve `url`. No request body, headers or auth.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Transport`] if the request never completes and
    /// [`crate::Error::Decode`] if the body is not readable as text. HTTP
    /// error statuses are NOT errors at this layer.
    fn get(&self, url: &str) -> impl Future<Output = Result<RawResponse>>;
}

/// An element that can show a transient message.
pub trait MessageTarget {
    fn set_text(&self, text: &str);
    fn set_class(&self, class_name: &str);
}

/// Handle to a scheduled task.
pub trait TimerHandle {
    /// Cancel the task if it has not fired yet.
    fn cancel(self);
}

/// One-shot delayed execution on the event loop.
pub trait Scheduler {
    type Handle: TimerHandle + 'static;

    /// Run `task` once after `delay_ms` milliseconds.
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;

    /// Run `task` once after `delay_ms` milliseconds with no way to cancel it.
    ///
    /// Implementations must release everything the task owns once it has
    /// run.
    fn schedule_detached(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}
