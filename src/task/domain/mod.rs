//! Domain model for task lifecycle management.
//!
//! Tasks carry a single status that places them in exactly one board column.
//! Infrastructure concerns stay outside of the domain boundary.

mod error;
mod filter;
mod ids;
mod priority;
mod status;
mod task;

pub use error::{ParsePriorityError, ParseTaskStatusError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::{TaskId, UserId};
pub use priority::TaskPriority;
pub use status::TaskStatus;
pub use task::{PersistedTaskData, Task, TaskDraft, parse_tags};
