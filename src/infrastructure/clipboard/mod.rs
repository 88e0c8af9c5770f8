//! Clipboard infrastructure module
//!
//! Provides cross-platform clipboard support using arboard.

mod arboard;

pub use arboard::ArboardClipboard;

use std::sync::Arc;

use crate::application::ports::Clipboard;

/// Create the default clipboard adapter for the current platform
pub fn create_clipboard() -> Arc<dyn Clipboard> {
    Arc::new(ArboardClipboard::new())
}
