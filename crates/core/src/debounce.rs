//! Trailing-edge debounce
//!
//! A [`Debouncer`] owns a single pending-task slot. Every [`Debouncer::invoke`]
//! cancels whatever is pending and schedules the callback again with the
//! newest arguments, so only the last call in a burst fires. A call that is
//! already running cannot be cancelled.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::dom::{Scheduler, TimerHandle};

type PendingSlot<H> = Rc<RefCell<Option<H>>>;

/// Delays a callback until `wait_ms` of quiet has passed since the last call.
pub struct Debouncer<S: Scheduler, A> {
    scheduler: S,
    wait_ms: u32,
    callback: Rc<dyn Fn(A)>,
    pending: PendingSlot<S::Handle>,
}

impl<S, A> Debouncer<S, A>
where
    S: Scheduler,
    A: 'static,
{
    pub fn new<F>(scheduler: S, wait_ms: u32, callback: F) -> Self
    where
        F: Fn(A) + 'static,
    {
        Self {
            scheduler,
            wait_ms,
            callback: Rc::new(callback),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Restart the quiet period; `args` replaces any earlier pending args.
    pub fn invoke(&self, args: A) {
        self.cancel();

        let callback = Rc::clone(&self.callback);
        let pending = Rc::clone(&self.pending);
        let handle = self.scheduler.schedule(
            self.wait_ms,
            Box::new(move || {
                // Release the slot before running so the callback may re-invoke
                let fired = pending.borrow_mut().take();
                drop(fired);
                callback(args);
            }),
        );

        *self.pending.borrow_mut() = Some(handle);
    }

    /// Drop the pending call, if any.
    pub fn cancel(&self) {
        let previous = self.pending.borrow_mut().take();
        if let Some(handle) = previous {
            handle.cancel();
        }
    }

    /// `true` while a call is scheduled but has not fired
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending.borrow().is_some()
    }
}

impl<S, A> Clone for Debouncer<S, A>
where
    S: Scheduler + Clone,
{
    fn clone(&self) -> Self {
        Self {
            scheduler: self.scheduler.clone(),
            wait_ms: self.wait_ms,
            callback: Rc::clone(&self.callback),
            pending: Rc::clone(&self.pending),
        }
    }
}

impl<S: Scheduler, A> fmt::Debug for Debouncer<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("wait_ms", &self.wait_ms)
            .field("pending", &self.pending.borrow().is_some())
            .finish_non_exhaustive()
    }
}
