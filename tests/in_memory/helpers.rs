//! Shared fixtures for in-memory integration tests.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    board::{
        adapters::{InMemoryUserDirectory, LocalTaskGateway},
        services::{BoardService, QueryCache},
    },
    config::BoardConfig,
    project::{
        adapters::memory::InMemoryProjectRepository,
        domain::{Project, ProjectId},
        services::{CreateProjectRequest, ProjectService},
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{Task, TaskFilter, TaskStatus, UserId},
        services::{CreateTaskRequest, TaskLifecycleService},
    },
};

/// Board type wired over the in-memory stack.
pub type MemoryBoard = BoardService<
    LocalTaskGateway<InMemoryTaskRepository, InMemoryProjectRepository, DefaultClock>,
    InMemoryUserDirectory,
>;

/// Project, task, and user services sharing one in-memory store.
pub struct Stack {
    pub projects: ProjectService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>,
    pub tasks:
        TaskLifecycleService<InMemoryTaskRepository, InMemoryProjectRepository, DefaultClock>,
    pub users: Arc<InMemoryUserDirectory>,
}

impl Stack {
    /// Creates a project with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error when the project cannot be stored.
    pub async fn project(&self, name: &str) -> Result<Project, eyre::Report> {
        Ok(self
            .projects
            .create_project(CreateProjectRequest::new(name))
            .await?)
    }

    /// Creates a task authored by user 1.
    ///
    /// # Errors
    ///
    /// Returns an error when the task cannot be stored.
    pub async fn task(
        &self,
        project_id: ProjectId,
        title: &str,
        status: TaskStatus,
    ) -> Result<Task, eyre::Report> {
        let request = CreateTaskRequest::new(project_id, title, 1).with_status(status);
        Ok(self.tasks.create_task(request).await?)
    }

    /// Builds a board over one project.
    #[must_use]
    pub fn board(&self, project_id: ProjectId, config: BoardConfig) -> MemoryBoard {
        let gateway = LocalTaskGateway::new(self.tasks.clone());
        BoardService::new(
            TaskFilter::for_project(project_id),
            Arc::new(QueryCache::new(Arc::new(gateway))),
            Arc::clone(&self.users),
            config,
        )
    }
}

/// Provides a fresh in-memory stack with two known users.
///
/// # Panics
///
/// Panics if the hard-coded user identifiers are invalid.
#[fixture]
pub fn stack() -> Stack {
    let task_repository = Arc::new(InMemoryTaskRepository::new());
    let project_repository = Arc::new(InMemoryProjectRepository::new());
    let clock = Arc::new(DefaultClock);
    let users = InMemoryUserDirectory::new();
    users.insert(UserId::new(1).expect("valid user id"), "ada");
    users.insert(UserId::new(2).expect("valid user id"), "grace");
    Stack {
        projects: ProjectService::new(
            Arc::clone(&project_repository),
            Arc::clone(&task_repository),
            Arc::clone(&clock),
        ),
        tasks: TaskLifecycleService::new(task_repository, project_repository, clock),
        users: Arc::new(users),
    }
}
