//! Types for mapping records and the remote mapping service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur while talking to the remote mapping service.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The stats endpoint returned a non-success status.
    #[error("Failed to load stats")]
    StatsUnavailable { status: u16 },

    /// The list endpoint returned a non-success status.
    #[error("Failed to load mappings")]
    ListUnavailable { status: u16 },

    /// The service refused a mutation; the message is the response body,
    /// or an operation-specific default when the body was blank.
    #[error("{0}")]
    Rejected(String),

    /// The response body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// The underlying network call failed.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// A mapping record linking a torrent to the arr instance managing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Mapping {
    /// Infohash of the torrent; unique key of the record.
    pub infohash: String,
    /// Identifier of the originating item; opaque, carried through edits.
    #[serde(default)]
    pub torrent_id: String,
    /// Human-readable torrent name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub torrent_name: Option<String>,
    /// Name of the arr application the torrent belongs to.
    #[serde(default)]
    pub arr_name: String,
    /// Last server-side change, as sent by the service. Display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Aggregate counts over the mapping store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingStats {
    /// Total number of mappings.
    pub total: u64,
    /// Mapping counts grouped by arr name, iterated in sorted name order.
    #[serde(default)]
    pub by_arr: BTreeMap<String, u64>,
}

/// Payload for creating or updating a mapping.
///
/// Identity fields are carried from the existing record unchanged; only
/// `arr_name` is client-authored. `updated_at` is never sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertRequest {
    pub infohash: String,
    pub torrent_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub torrent_name: Option<String>,
    pub arr_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_decodes_with_missing_optionals() {
        let mapping: Mapping =
            serde_json::from_str(r#"{"infohash": "abc123", "arr_name": "Sonarr"}"#).unwrap();
        assert_eq!(mapping.infohash, "abc123");
        assert_eq!(mapping.torrent_id, "");
        assert_eq!(mapping.torrent_name, None);
        assert_eq!(mapping.arr_name, "Sonarr");
        assert_eq!(mapping.updated_at, None);
    }

    #[test]
    fn test_stats_by_arr_iterates_sorted() {
        let stats: MappingStats = serde_json::from_str(
            r#"{"total": 5, "by_arr": {"sonarr": 3, "lidarr": 1, "radarr": 1}}"#,
        )
        .unwrap();
        let names: Vec<&str> = stats.by_arr.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["lidarr", "radarr", "sonarr"]);
        assert_eq!(stats.total, 5);
    }

    #[test]
    fn test_upsert_request_omits_missing_torrent_name() {
        let request = UpsertRequest {
            infohash: "abc".to_string(),
            torrent_id: "42".to_string(),
            torrent_name: None,
            arr_name: "Radarr".to_string(),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("torrent_name"));
        assert!(json.contains("\"arr_name\":\"Radarr\""));
    }

    #[test]
    fn test_error_display() {
        let err = MappingError::StatsUnavailable { status: 500 };
        assert_eq!(err.to_string(), "Failed to load stats");

        let err = MappingError::ListUnavailable { status: 502 };
        assert_eq!(err.to_string(), "Failed to load mappings");

        let err = MappingError::Rejected("locked".to_string());
        assert_eq!(err.to_string(), "locked");
    }
}
