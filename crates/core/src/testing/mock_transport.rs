//! Mock transport for testing.

use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::transport::{ApiResponse, Transport, TransportError};

/// A recorded HTTP exchange for test assertions.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    /// Request body, for POSTs.
    pub body: Option<String>,
}

type RouteResult = Result<ApiResponse, TransportError>;

#[derive(Debug, Default)]
struct Route {
    /// One-shot results, consumed before the sticky one.
    queue: VecDeque<RouteResult>,
    /// Result returned once the queue is drained.
    sticky: Option<RouteResult>,
}

/// Mock implementation of the `Transport` trait.
///
/// Responses are configured per method + path. A sticky response answers
/// every call; queued responses are consumed first, which lets a test make
/// an endpoint fail once and then recover. Unconfigured routes answer 404.
#[derive(Debug, Default)]
pub struct MockTransport {
    routes: RwLock<HashMap<String, Route>>,
    requests: RwLock<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(method: &str, path: &str) -> String {
        format!("{} {}", method, path)
    }

    /// Answer every call on this route with the given response.
    pub async fn set_response(&self, method: &str, path: &str, response: ApiResponse) {
        let mut routes = self.routes.write().await;
        routes.entry(Self::key(method, path)).or_default().sticky = Some(Ok(response));
    }

    /// Answer every call on this route with the given transport error.
    pub async fn set_error(&self, method: &str, path: &str, error: TransportError) {
        let mut routes = self.routes.write().await;
        routes.entry(Self::key(method, path)).or_default().sticky = Some(Err(error));
    }

    /// Queue a one-shot response, consumed before the sticky one.
    pub async fn push_response(&self, method: &str, path: &str, response: ApiResponse) {
        let mut routes = self.routes.write().await;
        routes
            .entry(Self::key(method, path))
            .or_default()
            .queue
            .push_back(Ok(response));
    }

    /// Queue a one-shot transport error, consumed before the sticky response.
    pub async fn push_error(&self, method: &str, path: &str, error: TransportError) {
        let mut routes = self.routes.write().await;
        routes
            .entry(Self::key(method, path))
            .or_default()
            .queue
            .push_back(Err(error));
    }

    /// Get all recorded requests.
    pub async fn recorded(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    /// Count recorded requests on one route.
    pub async fn request_count(&self, method: &str, path: &str) -> usize {
        self.requests
            .read()
            .await
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    /// Clear recorded requests.
    pub async fn clear_recorded(&self) {
        self.requests.write().await.clear();
    }

    async fn dispatch(&self, method: &str, path: &str, body: Option<String>) -> RouteResult {
        self.requests.write().await.push(RecordedRequest {
            method: method.to_string(),
            path: path.to_string(),
            body,
        });

        let mut routes = self.routes.write().await;
        let configured = routes
            .get_mut(&Self::key(method, path))
            .and_then(|route| route.queue.pop_front().or_else(|| route.sticky.clone()));

        configured.unwrap_or(Ok(ApiResponse {
            status: 404,
            body: String::new(),
        }))
    }
}

#[async_trait]
impl Transport for MockTransport {
    fn name(&self) -> &str {
        "mock"
    }

    async fn get(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.dispatch("GET", path, None).await
    }

    async fn post_json(&self, path: &str, body: &str) -> Result<ApiResponse, TransportError> {
        self.dispatch("POST", path, Some(body.to_string())).await
    }

    async fn delete(&self, path: &str) -> Result<ApiResponse, TransportError> {
        self.dispatch("DELETE", path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_route_answers_not_found() {
        let transport = MockTransport::new();
        let response = transport.get("api/unknown").await.unwrap();
        assert_eq!(response.status, 404);
    }

    #[tokio::test]
    async fn test_sticky_response_repeats() {
        let transport = MockTransport::new();
        transport
            .set_response(
                "GET",
                "api/metadata/list",
                ApiResponse {
                    status: 200,
                    body: "[]".to_string(),
                },
            )
            .await;

        for _ in 0..3 {
            let response = transport.get("api/metadata/list").await.unwrap();
            assert_eq!(response.status, 200);
        }
        assert_eq!(transport.request_count("GET", "api/metadata/list").await, 3);
    }

    #[tokio::test]
    async fn test_queued_response_consumed_before_sticky() {
        let transport = MockTransport::new();
        transport
            .set_response(
                "GET",
                "api/metadata/list",
                ApiResponse {
                    status: 200,
                    body: "[]".to_string(),
                },
            )
            .await;
        transport
            .push_response(
                "GET",
                "api/metadata/list",
                ApiResponse {
                    status: 500,
                    body: String::new(),
                },
            )
            .await;

        assert_eq!(transport.get("api/metadata/list").await.unwrap().status, 500);
        assert_eq!(transport.get("api/metadata/list").await.unwrap().status, 200);
    }

    #[tokio::test]
    async fn test_error_injection() {
        let transport = MockTransport::new();
        transport
            .push_error(
                "GET",
                "api/metadata/stats",
                TransportError::ConnectionFailed("refused".to_string()),
            )
            .await;

        assert!(transport.get("api/metadata/stats").await.is_err());
        // Queue drained, no sticky configured: back to 404.
        assert_eq!(transport.get("api/metadata/stats").await.unwrap().status, 404);
    }

    #[tokio::test]
    async fn test_records_post_body() {
        let transport = MockTransport::new();
        transport
            .post_json("api/metadata/set", r#"{"infohash":"abc"}"#)
            .await
            .unwrap();

        let recorded = transport.recorded().await;
        assert_eq!(recorded.len(), 1);
        assert_eq!(recorded[0].method, "POST");
        assert_eq!(recorded[0].body.as_deref(), Some(r#"{"infohash":"abc"}"#));
    }
}
