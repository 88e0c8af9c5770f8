//! CLI layer - Command-line interface
//!
//! Contains argument parsing, tracing setup, signal handling,
//! and the server runner.

pub mod app;
pub mod args;
pub mod signals;

// Re-export commonly used types
pub use app::{init_tracing, run_server, EXIT_ERROR, EXIT_SUCCESS};
pub use args::Cli;
pub use signals::ShutdownSignal;
