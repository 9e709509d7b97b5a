//! Service layer for task creation, status changes, and removal.

use crate::project::{
    domain::ProjectId,
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::{
    domain::{
        ParseTaskStatusError, Task, TaskDomainError, TaskDraft, TaskFilter, TaskId, TaskPriority,
        TaskStatus, UserId,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    project_id: ProjectId,
    title: String,
    author_user_id: i64,
    description: Option<String>,
    status: Option<TaskStatus>,
    priority: Option<TaskPriority>,
    tags: Option<String>,
    start_date: Option<DateTime<Utc>>,
    due_date: Option<DateTime<Utc>>,
    points: Option<i32>,
    assigned_user_id: Option<i64>,
}

impl CreateTaskRequest {
    /// Creates a request with the required task fields.
    #[must_use]
    pub fn new(project_id: ProjectId, title: impl Into<String>, author_user_id: i64) -> Self {
        Self {
            project_id,
            title: title.into(),
            author_user_id,
            description: None,
            status: None,
            priority: None,
            tags: None,
            start_date: None,
            due_date: None,
            points: None,
            assigned_user_id: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the initial status. Defaults to "To Do".
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Sets the raw comma-separated tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Sets the start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Sets the point estimate.
    #[must_use]
    pub const fn with_points(mut self, points: i32) -> Self {
        self.points = Some(points);
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assigned_user_id: i64) -> Self {
        self.assigned_user_id = Some(assigned_user_id);
        self
    }

    fn into_draft(self) -> Result<TaskDraft, TaskDomainError> {
        let author_id = UserId::new(self.author_user_id)?;
        let mut draft = TaskDraft::new(self.project_id, self.title, author_id)?;
        if let Some(description) = self.description {
            draft = draft.with_description(description);
        }
        if let Some(status) = self.status {
            draft = draft.with_status(status);
        }
        if let Some(priority) = self.priority {
            draft = draft.with_priority(priority);
        }
        if let Some(tags) = self.tags {
            draft = draft.with_tags(tags);
        }
        if let Some(start_date) = self.start_date {
            draft = draft.with_start_date(start_date);
        }
        if let Some(due_date) = self.due_date {
            draft = draft.with_due_date(due_date);
        }
        if let Some(points) = self.points {
            draft = draft.with_points(points)?;
        }
        if let Some(assigned_user_id) = self.assigned_user_id {
            draft = draft.with_assignee(UserId::new(assigned_user_id)?);
        }
        Ok(draft)
    }
}

/// Request payload for moving a task to another status column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTaskStatusRequest {
    task_id: TaskId,
    status: String,
}

impl UpdateTaskStatusRequest {
    /// Creates a request from a task identifier and a status label.
    #[must_use]
    pub fn new(task_id: TaskId, status: impl Into<String>) -> Self {
        Self {
            task_id,
            status: status.into(),
        }
    }

    /// Returns the targeted task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        self.task_id
    }

    /// Returns the requested status label.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The requested status label is unknown.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),
    /// The owning project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(TaskRepositoryError),
    /// Project lookup failed.
    #[error(transparent)]
    Projects(ProjectRepositoryError),
}

impl From<TaskRepositoryError> for TaskLifecycleError {
    fn from(err: TaskRepositoryError) -> Self {
        match err {
            TaskRepositoryError::NotFound(task_id) => Self::NotFound(task_id),
            TaskRepositoryError::ProjectNotFound(project_id) => Self::ProjectNotFound(project_id),
            other => Self::Repository(other),
        }
    }
}

impl From<ProjectRepositoryError> for TaskLifecycleError {
    fn from(err: ProjectRepositoryError) -> Self {
        match err {
            ProjectRepositoryError::NotFound(project_id) => Self::ProjectNotFound(project_id),
            other => Self::Projects(other),
        }
    }
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task lifecycle orchestration service.
///
/// Tasks are only created inside projects known to the project repository.
pub struct TaskLifecycleService<R, P, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    projects: Arc<P>,
    clock: Arc<C>,
}

impl<R, P, C> Clone for TaskLifecycleService<R, P, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            projects: Arc::clone(&self.projects),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<R, P, C> TaskLifecycleService<R, P, C>
where
    R: TaskRepository,
    P: ProjectRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, projects: Arc<P>, clock: Arc<C>) -> Self {
        Self {
            repository,
            projects,
            clock,
        }
    }

    /// Creates and persists a new task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::ProjectNotFound`] when the owning
    /// project does not exist, [`TaskLifecycleError::Domain`] when input
    /// validation fails, or a repository error when persistence fails.
    pub async fn create_task(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let draft = request.into_draft()?;
        let project_id = draft.project_id();
        if self.projects.find_by_id(project_id).await?.is_none() {
            return Err(TaskLifecycleError::ProjectNotFound(project_id));
        }
        let task = Task::new(draft, &*self.clock);
        self.repository.store(&task).await?;
        info!(task_id = %task.id(), project_id = %task.project_id(), "task created");
        Ok(task)
    }

    /// Lists the tasks selected by `filter` in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn list_tasks(&self, filter: TaskFilter) -> TaskLifecycleResult<Vec<Task>> {
        Ok(self.repository.list(filter).await?)
    }

    /// Retrieves a task by identifier.
    ///
    /// Returns `Ok(None)` when the task does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the lookup fails.
    pub async fn find_by_id(&self, task_id: TaskId) -> TaskLifecycleResult<Option<Task>> {
        Ok(self.repository.find_by_id(task_id).await?)
    }

    /// Moves a task to the requested status.
    ///
    /// Requesting the status the task already has succeeds without writing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] for an unknown label,
    /// [`TaskLifecycleError::NotFound`] when the task does not exist, or
    /// [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn update_status(
        &self,
        request: UpdateTaskStatusRequest,
    ) -> TaskLifecycleResult<Task> {
        let status = TaskStatus::try_from(request.status())?;
        let task_id = request.task_id();
        let mut task = self
            .repository
            .find_by_id(task_id)
            .await?
            .ok_or(TaskLifecycleError::NotFound(task_id))?;

        let previous = task.status();
        if !task.change_status(status, &*self.clock) {
            debug!(%task_id, %status, "status unchanged, skipping write");
            return Ok(task);
        }

        self.repository.update(&task).await?;
        info!(%task_id, from = %previous, to = %status, "task status updated");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::NotFound`] when the task does not exist
    /// or [`TaskLifecycleError::Repository`] when persistence fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskLifecycleResult<()> {
        self.repository.delete(task_id).await?;
        info!(%task_id, "task deleted");
        Ok(())
    }
}
