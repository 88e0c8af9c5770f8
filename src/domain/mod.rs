//! Domain layer - Core business logic
//!
//! Contains the history sequence and its invariants.
//! This layer has no dependencies on external systems.

pub mod history;

// Re-export common types
pub use history::{History, HISTORY_CAPACITY};
