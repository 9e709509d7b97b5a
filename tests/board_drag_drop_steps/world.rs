//! Shared world state for board BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::{
    board::{
        adapters::{InMemoryUserDirectory, LocalTaskGateway},
        domain::BoardView,
        services::{BoardService, DeleteOutcome, DropOutcome, QueryCache},
    },
    config::BoardConfig,
    project::{
        adapters::memory::InMemoryProjectRepository, domain::Project, services::ProjectService,
    },
    task::{
        adapters::memory::InMemoryTaskRepository,
        domain::{TaskFilter, TaskId, TaskStatus},
        services::TaskLifecycleService,
    },
};

/// Task service type used by the BDD world.
pub type TestTaskService =
    TaskLifecycleService<InMemoryTaskRepository, InMemoryProjectRepository, DefaultClock>;

/// Board type used by the BDD world.
pub type TestBoard = BoardService<
    LocalTaskGateway<InMemoryTaskRepository, InMemoryProjectRepository, DefaultClock>,
    InMemoryUserDirectory,
>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub projects: ProjectService<InMemoryProjectRepository, InMemoryTaskRepository, DefaultClock>,
    pub tasks: TestTaskService,
    pub project: Option<Project>,
    pub board: Option<TestBoard>,
    pub task_ids: HashMap<String, TaskId>,
    pub last_view: Option<BoardView>,
    pub last_drop: Option<DropOutcome>,
    pub last_delete: Option<DeleteOutcome>,
}

impl BoardWorld {
    /// Creates a world over empty in-memory stores.
    #[must_use]
    pub fn new() -> Self {
        let task_repository = Arc::new(InMemoryTaskRepository::new());
        let project_repository = Arc::new(InMemoryProjectRepository::new());
        let clock = Arc::new(DefaultClock);
        Self {
            projects: ProjectService::new(
                Arc::clone(&project_repository),
                Arc::clone(&task_repository),
                Arc::clone(&clock),
            ),
            tasks: TaskLifecycleService::new(task_repository, project_repository, clock),
            project: None,
            board: None,
            task_ids: HashMap::new(),
            last_view: None,
            last_drop: None,
            last_delete: None,
        }
    }

    /// Returns the scenario project.
    pub fn project(&self) -> Result<&Project, eyre::Report> {
        self.project
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing project in scenario world"))
    }

    /// Builds a board over the scenario project.
    pub fn build_board(&mut self) -> Result<&TestBoard, eyre::Report> {
        let filter = TaskFilter::for_project(self.project()?.id());
        let gateway = LocalTaskGateway::new(self.tasks.clone());
        let board = BoardService::new(
            filter,
            Arc::new(QueryCache::new(Arc::new(gateway))),
            Arc::new(InMemoryUserDirectory::new()),
            BoardConfig::default(),
        );
        Ok(&*self.board.insert(board))
    }

    /// Returns the scenario board.
    pub fn board(&self) -> Result<&TestBoard, eyre::Report> {
        self.board
            .as_ref()
            .ok_or_else(|| eyre::eyre!("board has not been loaded"))
    }

    /// Looks up a task created earlier in the scenario by title.
    pub fn task_id(&self, title: &str) -> Result<TaskId, eyre::Report> {
        self.task_ids
            .get(title)
            .copied()
            .ok_or_else(|| eyre::eyre!("no task titled {title:?} in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Parses a status label used in a feature file.
pub fn parse_status(label: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(label).map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
