//! Gateway backed directly by the task lifecycle service.

use crate::board::ports::{GatewayError, GatewayResult, TaskGateway};
use crate::project::ports::{ProjectRepository, ProjectRepositoryError};
use crate::task::{
    domain::{Task, TaskFilter, TaskId, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
    services::{TaskLifecycleError, TaskLifecycleService, UpdateTaskStatusRequest},
};
use async_trait::async_trait;
use mockable::Clock;

/// In-process gateway for boards hosted next to the task service.
///
/// Storage failures surface as [`GatewayError::Network`]; validation and
/// missing-task errors surface as [`GatewayError::Rejected`].
pub struct LocalTaskGateway<R, P, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    service: TaskLifecycleService<R, P, C>,
}

impl<R, P, C> LocalTaskGateway<R, P, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Wraps a task lifecycle service.
    #[must_use]
    pub const fn new(service: TaskLifecycleService<R, P, C>) -> Self {
        Self { service }
    }
}

fn to_gateway_error(err: TaskLifecycleError) -> GatewayError {
    match err {
        TaskLifecycleError::Repository(TaskRepositoryError::Persistence(cause))
        | TaskLifecycleError::Projects(ProjectRepositoryError::Persistence(cause)) => {
            GatewayError::Network(cause.to_string())
        }
        other => GatewayError::Rejected(other.to_string()),
    }
}

#[async_trait]
impl<R, P, C> TaskGateway for LocalTaskGateway<R, P, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    async fn fetch_tasks(&self, filter: TaskFilter) -> GatewayResult<Vec<Task>> {
        self.service
            .list_tasks(filter)
            .await
            .map_err(to_gateway_error)
    }

    async fn update_status(&self, task_id: TaskId, status: TaskStatus) -> GatewayResult<Task> {
        self.service
            .update_status(UpdateTaskStatusRequest::new(task_id, status.as_str()))
            .await
            .map_err(to_gateway_error)
    }

    async fn delete_task(&self, task_id: TaskId) -> GatewayResult<()> {
        self.service
            .delete_task(task_id)
            .await
            .map_err(to_gateway_error)
    }
}
