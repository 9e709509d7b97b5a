//! Project management.
//!
//! Projects group the tasks shown on one board. Deleting a project removes
//! its tasks first, then the project itself.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
