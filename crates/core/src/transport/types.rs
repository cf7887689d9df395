//! Types for network transport operations.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while performing a network call.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Outcome of a completed HTTP exchange.
///
/// Carries the status and raw body regardless of success; use
/// [`ApiResponse::is_success`] to branch.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text (may be empty).
    pub body: String,
}

impl ApiResponse {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for HTTP transport backends.
///
/// Implementations add base URL, auth headers, and timeouts; callers pass
/// service-relative paths like `api/metadata/stats`.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Backend name for logging.
    fn name(&self) -> &str;

    /// Perform a GET request.
    async fn get(&self, path: &str) -> Result<ApiResponse, TransportError>;

    /// Perform a POST request with a JSON body.
    async fn post_json(&self, path: &str, body: &str) -> Result<ApiResponse, TransportError>;

    /// Perform a DELETE request.
    async fn delete(&self, path: &str) -> Result<ApiResponse, TransportError>;
}
