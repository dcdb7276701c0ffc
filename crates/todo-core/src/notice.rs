//! User-facing Notices
//!
//! Fixed error messages and the timer abstraction used to auto-clear them.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Fixed, operation-specific message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeMessage {
    LoadFailed,
    EmptyTitle,
    AddFailed,
    DeleteFailed,
    UpdateFailed,
}

impl NoticeMessage {
    pub fn text(&self) -> &'static str {
        match self {
            NoticeMessage::LoadFailed => "Unable to load todos",
            NoticeMessage::EmptyTitle => "Title should not be empty",
            NoticeMessage::AddFailed => "Unable to add a todo",
            NoticeMessage::DeleteFailed => "Unable to delete a todo",
            NoticeMessage::UpdateFailed => "Unable to update a todo",
        }
    }
}

impl fmt::Display for NoticeMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// The currently displayed notice
///
/// `seq` identifies this particular raise so a stale timer
/// never clears a newer message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notice {
    pub seq: u64,
    pub message: NoticeMessage,
}

/// Deferred work on the single UI thread
pub trait Scheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>);
}
