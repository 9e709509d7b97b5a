//! Kanban board over a project's tasks.
//!
//! The board partitions the authoritative task collection into one column
//! per status, renders cards, and turns drag-and-drop gestures into status
//! updates. Column membership only ever reflects the collection held by the
//! query cache; a move or delete shows up after the request is acknowledged
//! and the collection has been refreshed.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The query cache and board service in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
