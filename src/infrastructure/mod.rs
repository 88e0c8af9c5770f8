//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces and the
//! HTTP surface, integrating with the OS clipboard and warp.

pub mod clipboard;
pub mod web;

// Re-export adapters
pub use clipboard::{create_clipboard, ArboardClipboard};
