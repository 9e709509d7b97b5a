//! Port contracts consumed by the board.

pub mod gateway;
pub mod users;

pub use gateway::{GatewayError, GatewayResult, TaskGateway};
pub use users::UserDirectory;

#[cfg(test)]
pub use gateway::MockTaskGateway;
