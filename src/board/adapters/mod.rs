//! Adapter implementations for board ports.

mod local;
mod users;

pub use local::LocalTaskGateway;
pub use users::InMemoryUserDirectory;
