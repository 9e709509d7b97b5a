//! Query parameters for task collections.

use crate::project::domain::ProjectId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Selects the tasks shown on one board.
///
/// Filters double as query cache keys, so they are cheap to clone and hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskFilter {
    project_id: ProjectId,
}

impl TaskFilter {
    /// Selects every task of the given project.
    #[must_use]
    pub const fn for_project(project_id: ProjectId) -> Self {
        Self { project_id }
    }

    /// Returns the selected project.
    #[must_use]
    pub const fn project_id(self) -> ProjectId {
        self.project_id
    }

    /// Returns whether the task belongs to the selection.
    #[must_use]
    pub fn matches(self, task: &super::Task) -> bool {
        task.project_id() == self.project_id
    }
}

impl fmt::Display for TaskFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "project={}", self.project_id)
    }
}
