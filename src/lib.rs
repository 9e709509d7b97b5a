//! Taskboard: project task tracking with a Kanban board.
//!
//! Tasks belong to projects and move through four statuses. The board
//! partitions a project's tasks into status columns and turns drag-and-drop
//! gestures into status updates against the task store.
//!
//! # Architecture
//!
//! Taskboard follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (database, in-memory)
//!
//! # Modules
//!
//! - [`project`]: Project records and cascading removal
//! - [`task`]: Task records and status lifecycle
//! - [`board`]: Status columns, task cards, drag-and-drop, and the query cache
//! - [`config`]: Layered configuration
//! - [`database`]: `PostgreSQL` connection pooling

pub mod board;
pub mod config;
pub mod database;
pub mod project;
pub mod task;
