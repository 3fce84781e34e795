//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs.

mod compare;

pub use compare::run_compare;

pub use crate::config::CompareConfig;
