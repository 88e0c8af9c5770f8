//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;

// Re-export common types
pub use clipboard::{Clipboard, ClipboardError};
