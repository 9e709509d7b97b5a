//! Transient failure notices surfaced to the user.

use crate::task::domain::TaskId;
use std::fmt;

/// Broad cause of a failed request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
    /// The request never got an answer from the server.
    Network,
    /// The server answered and refused the request.
    Rejected,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Network => f.write_str("network"),
            Self::Rejected => f.write_str("rejected"),
        }
    }
}

/// Which board request failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeOperation {
    /// Moving a task to another column.
    StatusUpdate,
    /// Deleting a task.
    Delete,
}

/// A failed board request, shown once and then discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardNotice {
    /// Task the request was about.
    pub task_id: TaskId,
    /// Failed operation.
    pub operation: NoticeOperation,
    /// Failure cause.
    pub kind: FailureKind,
    /// Human-readable detail.
    pub message: String,
}
