//! Task data-layer capabilities used by the board.

use crate::board::domain::FailureKind;
use crate::task::domain::{Task, TaskFilter, TaskId, TaskStatus};
use async_trait::async_trait;
use thiserror::Error;

/// Result type for gateway requests.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Fetch, status update and delete requests against the task data layer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskGateway: Send + Sync {
    /// Fetches the tasks selected by `filter` in collection order.
    async fn fetch_tasks(&self, filter: TaskFilter) -> GatewayResult<Vec<Task>>;

    /// Moves one task to `status` and returns the acknowledged task.
    async fn update_status(&self, task_id: TaskId, status: TaskStatus) -> GatewayResult<Task>;

    /// Deletes one task.
    async fn delete_task(&self, task_id: TaskId) -> GatewayResult<()>;
}

/// Errors returned by gateway requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The data layer could not be reached.
    #[error("network failure: {0}")]
    Network(String),

    /// The data layer refused the request.
    #[error("request rejected: {0}")]
    Rejected(String),
}

impl GatewayError {
    /// Returns the failure kind reported to the user.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Network(_) => FailureKind::Network,
            Self::Rejected(_) => FailureKind::Rejected,
        }
    }
}
