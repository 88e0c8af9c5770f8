//! Clipserve - share the local clipboard over HTTP
//!
//! This crate samples the OS clipboard on a fixed cadence into a small,
//! bounded in-memory history and exposes that history through a minimal
//! HTTP API, so other processes or devices can read the current or recent
//! clipboard value and push a new value remotely.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: The bounded, deduplicating history sequence and its invariants
//! - **Application**: The shared cache handle, the poller, and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (arboard clipboard, warp HTTP routes)
//! - **CLI**: Command-line interface, tracing setup, signal handling, and the server runner

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
