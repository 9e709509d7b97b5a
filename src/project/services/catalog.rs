//! Service layer for creating, listing, and deleting projects.

use crate::project::{
    domain::{Project, ProjectDomainError, ProjectDraft, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError},
};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Request payload for creating a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateProjectRequest {
    name: String,
    description: Option<String>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl CreateProjectRequest {
    /// Creates a request with the required project name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            start_date: None,
            end_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the planned start date.
    #[must_use]
    pub const fn with_start_date(mut self, start_date: DateTime<Utc>) -> Self {
        self.start_date = Some(start_date);
        self
    }

    /// Sets the planned end date.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: DateTime<Utc>) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Service-level errors for project operations.
#[derive(Debug, Error)]
pub enum ProjectServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Project repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// Removing the project's tasks failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
}

/// Result type for project service operations.
pub type ProjectServiceResult<T> = Result<T, ProjectServiceError>;

/// Project orchestration service.
pub struct ProjectService<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    projects: Arc<P>,
    tasks: Arc<T>,
    clock: Arc<C>,
}

impl<P, T, C> Clone for ProjectService<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            projects: Arc::clone(&self.projects),
            tasks: Arc::clone(&self.tasks),
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<P, T, C> ProjectService<P, T, C>
where
    P: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new project service.
    #[must_use]
    pub const fn new(projects: Arc<P>, tasks: Arc<T>, clock: Arc<C>) -> Self {
        Self {
            projects,
            tasks,
            clock,
        }
    }

    /// Creates and persists a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Domain`] for a blank name or
    /// [`ProjectServiceError::Repository`] when persistence fails.
    pub async fn create_project(
        &self,
        request: CreateProjectRequest,
    ) -> ProjectServiceResult<Project> {
        let mut draft = ProjectDraft::new(request.name)?;
        if let Some(description) = request.description {
            draft = draft.with_description(description);
        }
        if let Some(start_date) = request.start_date {
            draft = draft.with_start_date(start_date);
        }
        if let Some(end_date) = request.end_date {
            draft = draft.with_end_date(end_date);
        }

        let project = Project::new(draft, &*self.clock);
        self.projects.store(&project).await?;
        info!(project_id = %project.id(), name = project.name(), "project created");
        Ok(project)
    }

    /// Lists every project in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] when the lookup fails.
    pub async fn list_projects(&self) -> ProjectServiceResult<Vec<Project>> {
        Ok(self.projects.list().await?)
    }

    /// Deletes a project after removing all of its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectServiceError::Repository`] wrapping
    /// [`ProjectRepositoryError::NotFound`] when the project does not exist;
    /// no tasks are touched in that case.
    pub async fn delete_project(&self, project_id: ProjectId) -> ProjectServiceResult<Project> {
        if self.projects.find_by_id(project_id).await?.is_none() {
            return Err(ProjectRepositoryError::NotFound(project_id).into());
        }

        let removed_tasks = self.tasks.delete_by_project(project_id).await?;
        let project = self.projects.delete(project_id).await?;
        info!(%project_id, removed_tasks, "project deleted");
        Ok(project)
    }
}
