//! HTTP surface exposing the clipboard history
//!
//! Routes are warp filters; each receives the cache handle and the
//! clipboard adapter injected at construction time.

pub mod routes;

pub use routes::api;
