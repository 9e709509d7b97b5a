//! Query cache and board orchestration.

mod board;
mod cache;

pub use board::{BoardService, DeleteOutcome, DropOutcome, EventOutcome};
pub use cache::{QueryCache, QueryState, SubscriptionId};
