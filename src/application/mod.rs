//! Application layer - Use cases and port interfaces
//!
//! Contains the shared history cache, the clipboard poller,
//! and trait definitions for external system interactions.

pub mod history_cache;
pub mod poller;
pub mod ports;

// Re-export use cases
pub use history_cache::HistoryCache;
pub use poller::{Poller, POLL_INTERVAL};
