//! In-memory project repository.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::project::{
    domain::{Project, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult},
};

/// Thread-safe in-memory project repository keeping creation order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectRepository {
    projects: Arc<RwLock<Vec<Project>>>,
}

impl InMemoryProjectRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl std::fmt::Display) -> ProjectRepositoryError {
    ProjectRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ProjectRepository for InMemoryProjectRepository {
    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut projects = self.projects.write().map_err(poisoned)?;
        if projects.iter().any(|existing| existing.id() == project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        projects.push(project.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let projects = self.projects.read().map_err(poisoned)?;
        Ok(projects.iter().find(|project| project.id() == id).cloned())
    }

    async fn list(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let projects = self.projects.read().map_err(poisoned)?;
        Ok(projects.clone())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<Project> {
        let mut projects = self.projects.write().map_err(poisoned)?;
        let position = projects
            .iter()
            .position(|project| project.id() == id)
            .ok_or(ProjectRepositoryError::NotFound(id))?;
        Ok(projects.remove(position))
    }
}
