//! reqwest-backed transport implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use tracing::debug;

use crate::config::RemoteConfig;

use super::{ApiResponse, Transport, TransportError};

/// HTTP transport over reqwest.
///
/// Joins service-relative paths onto the configured base URL and attaches
/// the `X-Api-Key` header when one is configured.
pub struct HttpTransport {
    client: Client,
    config: RemoteConfig,
}

impl HttpTransport {
    /// Create a new transport from the remote service configuration.
    pub fn new(config: RemoteConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs as u64))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }

    /// Get the base URL without trailing slash.
    fn base_url(&self) -> &str {
        self.config.url.trim_end_matches('/')
    }

    /// Build the absolute URL for a service-relative path.
    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.base_url(), path.trim_start_matches('/'))
    }

    /// Attach common headers.
    fn decorate(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_key {
            Some(key) => builder.header("X-Api-Key", key),
            None => builder,
        }
    }

    async fn execute(
        &self,
        method: &str,
        builder: RequestBuilder,
    ) -> Result<ApiResponse, TransportError> {
        let response = self.decorate(builder).send().await.map_err(|e| {
            if e.is_timeout() {
                TransportError::Timeout
            } else if e.is_connect() {
                TransportError::ConnectionFailed(e.to_string())
            } else {
                TransportError::Internal(e.to_string())
            }
        })?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Internal(e.to_string()))?;

        debug!(method = method, status = status, "Request complete");

        Ok(ApiResponse { status, body })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    fn name(&self) -> &str {
        "http"
    }

    async fn get(&self, path: &str) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(path);
        self.execute("GET", self.client.get(&url)).await
    }

    async fn post_json(&self, path: &str, body: &str) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(path);
        let builder = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .body(body.to_string());
        self.execute("POST", builder).await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, TransportError> {
        let url = self.url_for(path);
        self.execute("DELETE", self.client.delete(&url)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transport(url: &str) -> HttpTransport {
        HttpTransport::new(RemoteConfig {
            url: url.to_string(),
            api_key: None,
            timeout_secs: 30,
        })
    }

    #[test]
    fn test_url_for_joins_paths() {
        let t = transport("http://localhost:8282");
        assert_eq!(
            t.url_for("api/metadata/stats"),
            "http://localhost:8282/api/metadata/stats"
        );
    }

    #[test]
    fn test_url_for_trims_trailing_slash() {
        let t = transport("http://localhost:8282/");
        assert_eq!(
            t.url_for("api/metadata/list"),
            "http://localhost:8282/api/metadata/list"
        );
    }

    #[test]
    fn test_url_for_trims_leading_slash() {
        let t = transport("http://localhost:8282");
        assert_eq!(
            t.url_for("/api/metadata/list"),
            "http://localhost:8282/api/metadata/list"
        );
    }
}
