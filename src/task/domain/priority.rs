//! Task priority labels.

use super::ParsePriorityError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional urgency marker shown as a badge on the task card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskPriority {
    /// Must be handled immediately.
    Urgent,
    /// Important.
    High,
    /// Normal importance.
    Medium,
    /// Can wait.
    Low,
    /// Not yet scheduled.
    Backlog,
}

impl TaskPriority {
    /// Every priority, most urgent first.
    pub const ALL: [Self; 5] = [
        Self::Urgent,
        Self::High,
        Self::Medium,
        Self::Low,
        Self::Backlog,
    ];

    /// Returns the display label, which is also the storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Urgent => "Urgent",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Backlog => "Backlog",
        }
    }
}

impl TryFrom<&str> for TaskPriority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|priority| priority.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParsePriorityError(value.to_owned()))
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
