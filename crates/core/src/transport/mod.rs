//! Network transport abstraction.
//!
//! This module provides a `Transport` trait for the small HTTP surface the
//! mapping client consumes, plus the reqwest-backed implementation used by
//! the CLI. Non-success statuses are returned as responses, not errors;
//! what a failure means is decided by the caller per endpoint.

mod http;
mod types;

pub use http::HttpTransport;
pub use types::*;
