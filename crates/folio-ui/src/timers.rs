//! Event-loop timers with `gloo-timers`

use folio_core::Diagnostics;
use folio_core::dom::{Scheduler, TimerHandle};
use gloo_timers::callback::Timeout;
use js_sys::Function;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;

use crate::console::ConsoleDiagnostics;

/// [`Scheduler`] backed by `setTimeout`
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooScheduler;

/// Pending `setTimeout`. Dropping it clears the timeout.
#[derive(Debug)]
pub struct GlooHandle(Timeout);

impl Scheduler for GlooScheduler {
    type Handle = GlooHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> GlooHandle {
        GlooHandle(Timeout::new(delay_ms, task))
    }

    // `once_into_js` hands ownership of the closure to JS, which frees it
    // after the single call, so nothing outlives the timeout.
    fn schedule_detached(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let Some(window) = web_sys::window() else {
            ConsoleDiagnostics.error("Cannot schedule timeout: no window object available");
            return;
        };

        let callback = Closure::once_into_js(move || task());
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<Function>(),
            timeout,
        ) {
            ConsoleDiagnostics.error(&format!("setTimeout failed: {e:?}"));
        }
    }
}

impl TimerHandle for GlooHandle {
    fn cancel(self) {
        drop(self.0.cancel());
    }
}
