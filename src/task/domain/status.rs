//! Task status labels and the fixed board column order.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of a task. Each status is one board column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not started.
    #[default]
    #[serde(rename = "To Do")]
    ToDo,
    /// Work is underway.
    #[serde(rename = "Work In Progress")]
    WorkInProgress,
    /// Work is awaiting review.
    #[serde(rename = "Under Review")]
    UnderReview,
    /// Work is finished.
    #[serde(rename = "Completed")]
    Completed,
}

impl TaskStatus {
    /// All statuses in board column order.
    pub const ALL: [Self; 4] = [
        Self::ToDo,
        Self::WorkInProgress,
        Self::UnderReview,
        Self::Completed,
    ];

    /// Returns the display label, which is also the storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::WorkInProgress => "Work In Progress",
            Self::UnderReview => "Under Review",
            Self::Completed => "Completed",
        }
    }

    /// Returns the column accent colour as a hex string.
    #[must_use]
    pub const fn accent_color(self) -> &'static str {
        match self {
            Self::ToDo => "#2563EB",
            Self::WorkInProgress => "#059669",
            Self::UnderReview => "#D97706",
            Self::Completed => "#000000",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| ParseTaskStatusError(value.to_owned()))
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
