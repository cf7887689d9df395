//! In-memory snapshots of the remote store.

use crate::mapping::{Mapping, MappingStats};

/// The most recently fetched stats and mapping list.
///
/// Each snapshot is replaced wholesale by its own successful fetch; the two
/// are committed independently, so one can be fresh while the other is
/// stale or absent.
#[derive(Debug, Default)]
pub struct DataStore {
    stats: Option<MappingStats>,
    mappings: Vec<Mapping>,
}

impl DataStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the stats snapshot.
    pub fn commit_stats(&mut self, stats: MappingStats) {
        self.stats = Some(stats);
    }

    /// Replace the mapping list snapshot.
    pub fn commit_mappings(&mut self, mappings: Vec<Mapping>) {
        self.mappings = mappings;
    }

    pub fn stats(&self) -> Option<&MappingStats> {
        self.stats.as_ref()
    }

    pub fn mappings(&self) -> &[Mapping] {
        &self.mappings
    }

    /// Resolve a mapping in the current snapshot by its infohash.
    pub fn find(&self, infohash: &str) -> Option<&Mapping> {
        self.mappings.iter().find(|m| m.infohash == infohash)
    }
}
