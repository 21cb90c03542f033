//! Transient status messages
//!
//! [`show_message`] writes a message and a class name into a container and
//! schedules both to be cleared. Earlier clears are never cancelled: if a
//! second message arrives before the first clear fires, that stale clear
//! still runs and can blank the newer message early. Existing pages rely on
//! the current timing, so the overlap is kept as-is.

use std::fmt;

use crate::config::DEFAULT_MESSAGE_KIND;
use crate::dom::{MessageTarget, Scheduler};

/// Class name applied to a message container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MessageKind(String);

impl MessageKind {
    pub fn new(class_name: impl Into<String>) -> Self {
        Self(class_name.into())
    }

    #[must_use]
    pub fn success() -> Self {
        Self::new(DEFAULT_MESSAGE_KIND)
    }

    #[must_use]
    pub fn error() -> Self {
        Self::new("error")
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageKind {
    fn default() -> Self {
        Self::success()
    }
}

impl From<&str> for MessageKind {
    fn from(class_name: &str) -> Self {
        Self::new(class_name)
    }
}

impl From<String> for MessageKind {
    fn from(class_name: String) -> Self {
        Self(class_name)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Show `message` in `container` for `duration_ms`, then clear it.
///
/// An absent container is a no-op.
pub fn show_message<T, S>(
    scheduler: &S,
    container: Option<&T>,
    message: &str,
    kind: &MessageKind,
    duration_ms: u32,
) where
    T: MessageTarget + Clone + 'static,
    S: Scheduler,
{
    let Some(container) = container else {
        return;
    };

    container.set_text(message);
    container.set_class(kind.as_str());

    let target = container.clone();
    scheduler.schedule_detached(
        duration_ms,
        Box::new(move || {
            target.set_text("");
            target.set_class("");
        }),
    );
}
