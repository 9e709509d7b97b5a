//! Task lifecycle management for the board.
//!
//! This module owns the server side of the board: creating tasks, listing a
//! project's tasks in creation order, moving a task between status columns,
//! and deleting tasks. It follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
