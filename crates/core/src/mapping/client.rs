//! Client for the remote mapping service HTTP surface.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::transport::Transport;

use super::{Mapping, MappingError, MappingStats, UpsertRequest};

const STATS_PATH: &str = "api/metadata/stats";
const LIST_PATH: &str = "api/metadata/list";
const SET_PATH: &str = "api/metadata/set";

/// Typed client for the four mapping endpoints.
pub struct MappingClient {
    transport: Arc<dyn Transport>,
}

impl MappingClient {
    /// Create a client over the given transport.
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Fetch aggregate counts from the service.
    pub async fn fetch_stats(&self) -> Result<MappingStats, MappingError> {
        let response = self.transport.get(STATS_PATH).await?;
        if !response.is_success() {
            warn!(status = response.status, "Stats fetch rejected");
            return Err(MappingError::StatsUnavailable {
                status: response.status,
            });
        }

        serde_json::from_str(&response.body).map_err(|e| MappingError::Decode(e.to_string()))
    }

    /// Fetch the full mapping list from the service.
    pub async fn fetch_list(&self) -> Result<Vec<Mapping>, MappingError> {
        let response = self.transport.get(LIST_PATH).await?;
        if !response.is_success() {
            warn!(status = response.status, "List fetch rejected");
            return Err(MappingError::ListUnavailable {
                status: response.status,
            });
        }

        let mappings: Vec<Mapping> = serde_json::from_str(&response.body)
            .map_err(|e| MappingError::Decode(e.to_string()))?;
        debug!(count = mappings.len(), "Loaded mappings");
        Ok(mappings)
    }

    /// Create or update a mapping.
    pub async fn upsert(&self, request: &UpsertRequest) -> Result<(), MappingError> {
        let body =
            serde_json::to_string(request).map_err(|e| MappingError::Decode(e.to_string()))?;

        let response = self.transport.post_json(SET_PATH, &body).await?;
        if !response.is_success() {
            warn!(
                status = response.status,
                infohash = %request.infohash,
                "Upsert rejected"
            );
            return Err(MappingError::Rejected(body_or_default(
                &response.body,
                "Failed to update mapping",
            )));
        }

        debug!(infohash = %request.infohash, arr_name = %request.arr_name, "Mapping upserted");
        Ok(())
    }

    /// Delete a mapping by infohash.
    pub async fn delete(&self, infohash: &str) -> Result<(), MappingError> {
        let path = format!("api/metadata/{}", urlencoding::encode(infohash));
        let response = self.transport.delete(&path).await?;
        if !response.is_success() {
            warn!(status = response.status, infohash = infohash, "Delete rejected");
            return Err(MappingError::Rejected(body_or_default(
                &response.body,
                "Failed to delete mapping",
            )));
        }

        debug!(infohash = infohash, "Mapping deleted");
        Ok(())
    }
}

/// The trimmed response body, or the default when the body is blank.
fn body_or_default(body: &str, default: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
