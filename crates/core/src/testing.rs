//! In-memory implementations of the platform seams
//!
//! Used by this crate's tests and by downstream crates that want to run
//! page logic without a browser. Time only moves when
//! [`ManualScheduler::advance`] is called.

use std::cell::RefCell;
use std::collections::{BTreeMap, HashMap};
use std::rc::{Rc, Weak};

use crate::dom::{DomHost, MessageTarget, RawResponse, Scheduler, TextSource, TimerHandle};
use crate::error::{Error, Result};

struct ScheduledTask {
    id: u64,
    due_ms: u64,
    task: Box<dyn FnOnce()>,
}

#[derive(Default)]
struct ClockState {
    now_ms: u64,
    next_id: u64,
    tasks: Vec<ScheduledTask>,
}

/// Virtual-clock scheduler
#[derive(Clone, Default)]
pub struct ManualScheduler {
    state: Rc<RefCell<ClockState>>,
}

/// Handle returned by [`ManualScheduler`]
#[derive(Debug)]
pub struct ManualHandle {
    id: u64,
    state: Weak<RefCell<ClockState>>,
}

impl ManualScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.state.borrow().now_ms
    }

    /// Tasks scheduled but not yet run
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.state.borrow().tasks.len()
    }

    /// Move the clock forward, running due tasks in due-time order.
    /// Tasks scheduled by a running task also run if they fall due.
    pub fn advance(&self, ms: u64) {
        let target = {
            let mut state = self.state.borrow_mut();
            state.now_ms = state.now_ms.saturating_add(ms);
            state.now_ms
        };

        while let Some(task) = self.take_next_due(target) {
            (task.task)();
        }
    }

    fn take_next_due(&self, now_ms: u64) -> Option<ScheduledTask> {
        let mut state = self.state.borrow_mut();
        let position = state
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.due_ms <= now_ms)
            .min_by_key(|(_, task)| (task.due_ms, task.id))
            .map(|(position, _)| position)?;
        Some(state.tasks.remove(position))
    }

    fn push(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> u64 {
        let mut state = self.state.borrow_mut();
        let id = state.next_id;
        state.next_id = state.next_id.saturating_add(1);
        let due_ms = state.now_ms.saturating_add(u64::from(delay_ms));
        state.tasks.push(ScheduledTask { id, due_ms, task });
        id
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
        ManualHandle {
            id: self.push(delay_ms, task),
            state: Rc::downgrade(&self.state),
        }
    }

    fn schedule_detached(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        self.push(delay_ms, task);
    }
}

impl TimerHandle for ManualHandle {
    fn cancel(self) {
        if let Some(state) = self.state.upgrade() {
            state.borrow_mut().tasks.retain(|task| task.id != self.id);
        }
    }
}

/// Document made of named containers holding markup strings.
///
/// Container handles are the selector strings themselves. Selectors that
/// are blank or have unbalanced brackets are rejected like a browser would.
#[derive(Debug, Default)]
pub struct FakeDom {
    containers: RefCell<BTreeMap<String, String>>,
}

impl FakeDom {
    #[must_use]
    pub fn with_containers(selectors: &[&str]) -> Self {
        Self {
            containers: RefCell::new(
                selectors
                    .iter()
                    .map(|selector| ((*selector).to_string(), String::new()))
                    .collect(),
            ),
        }
    }

    /// Current markup of a container, `None` if it does not exist
    #[must_use]
    pub fn markup(&self, selector: &str) -> Option<String> {
        self.containers.borrow().get(selector).cloned()
    }

    /// Overwrite a container's markup, creating it if needed
    pub fn set_markup(&self, selector: &str, markup: &str) {
        self.containers
            .borrow_mut()
            .insert(selector.to_string(), markup.to_string());
    }
}

fn selector_is_valid(selector: &str) -> bool {
    let opens = selector.matches('[').count();
    let closes = selector.matches(']').count();
    !selector.trim().is_empty() && opens == closes
}

impl DomHost for FakeDom {
    type Container = String;

    fn query(&self, selector: &str) -> Result<Option<String>> {
        if !selector_is_valid(selector) {
            return Err(Error::dom(format!("'{selector}' is not a valid selector")));
        }
        Ok(self
            .containers
            .borrow()
            .contains_key(selector)
            .then(|| selector.to_string()))
    }

    fn set_inner_html(&self, container: &String, markup: &str) {
        self.set_markup(container, markup);
    }
}

/// Canned HTTP responses keyed by URL. Unknown URLs fail as unreachable.
#[derive(Debug, Default)]
pub struct StubSource {
    responses: HashMap<String, std::result::Result<RawResponse, Error>>,
    requests: RefCell<Vec<String>>,
}

impl StubSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_response(mut self, url: &str, response: RawResponse) -> Self {
        self.responses.insert(url.to_string(), Ok(response));
        self
    }

    #[must_use]
    pub fn with_error(mut self, url: &str, error: Error) -> Self {
        self.responses.insert(url.to_string(), Err(error));
        self
    }

    /// URLs requested so far, in order
    #[must_use]
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }
}

impl TextSource for StubSource {
    async fn get(&self, url: &str) -> Result<RawResponse> {
        self.requests.borrow_mut().push(url.to_string());
        self.responses
            .get(url)
            .cloned()
            .unwrap_or_else(|| Err(Error::transport(url, "connection refused")))
    }
}

/// Message container that remembers its text and class.
#[derive(Debug, Clone, Default)]
pub struct RecordingTarget {
    state: Rc<RefCell<(String, String)>>,
}

impl RecordingTarget {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> String {
        self.state.borrow().0.clone()
    }

    #[must_use]
    pub fn class_name(&self) -> String {
        self.state.borrow().1.clone()
    }
}

impl MessageTarget for RecordingTarget {
    fn set_text(&self, text: &str) {
        text.clone_into(&mut self.state.borrow_mut().0);
    }

    fn set_class(&self, class_name: &str) {
        class_name.clone_into(&mut self.state.borrow_mut().1);
    }
}
