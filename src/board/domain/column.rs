//! Status columns derived from a task collection.

use crate::task::domain::{Task, TaskStatus};

/// Tasks sharing one status, in collection order.
///
/// Columns have no identity of their own; they are recomputed from the
/// collection whenever it changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    status: TaskStatus,
    tasks: Vec<Task>,
}

impl Column {
    /// Returns the status this column collects.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the column's tasks in collection order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns how many tasks the column holds.
    #[must_use]
    pub fn count(&self) -> usize {
        self.tasks.len()
    }
}

/// Splits `tasks` into one column per status in [`TaskStatus::ALL`] order.
///
/// Every task lands in exactly the column matching its status and keeps its
/// relative order.
#[must_use]
pub fn partition(tasks: &[Task]) -> Vec<Column> {
    TaskStatus::ALL
        .into_iter()
        .map(|status| Column {
            status,
            tasks: tasks
                .iter()
                .filter(|task| task.status() == status)
                .cloned()
                .collect(),
        })
        .collect()
}
