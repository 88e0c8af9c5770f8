//! Clipboard port interface

use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
#[derive(Debug, Clone, Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Failed to write clipboard: {0}")]
    WriteFailed(String),
}

/// Port for system clipboard access
#[async_trait]
pub trait Clipboard: Send + Sync {
    /// Read the current clipboard text.
    ///
    /// # Returns
    /// The clipboard contents on success, error otherwise
    async fn read(&self) -> Result<String, ClipboardError>;

    /// Replace the clipboard contents with `text`.
    ///
    /// # Arguments
    /// * `text` - The text to place on the clipboard
    ///
    /// # Returns
    /// Ok(()) on success, error otherwise
    async fn write(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Blanket implementation for shared clipboard handles
#[async_trait]
impl Clipboard for Arc<dyn Clipboard> {
    async fn read(&self) -> Result<String, ClipboardError> {
        self.as_ref().read().await
    }

    async fn write(&self, text: &str) -> Result<(), ClipboardError> {
        self.as_ref().write(text).await
    }
}
