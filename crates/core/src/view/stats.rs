//! Header strip summary of the stats snapshot.

use crate::mapping::MappingStats;

/// Display projection of the stats snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsSummary {
    /// Total number of mappings.
    pub total: u64,
    /// Number of distinct arr names.
    pub arr_count: usize,
    /// Arr names in sorted order.
    pub arr_names: Vec<String>,
}

impl StatsSummary {
    pub fn new(stats: &MappingStats) -> Self {
        Self {
            total: stats.total,
            arr_count: stats.by_arr.len(),
            // BTreeMap keys are already sorted.
            arr_names: stats.by_arr.keys().cloned().collect(),
        }
    }

    /// Comma-separated arr names, or "-" when there are none.
    pub fn arr_list(&self) -> String {
        if self.arr_names.is_empty() {
            "-".to_string()
        } else {
            self.arr_names.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_summary_sorts_names() {
        let mut by_arr = BTreeMap::new();
        by_arr.insert("sonarr".to_string(), 3);
        by_arr.insert("lidarr".to_string(), 1);
        let stats = MappingStats { total: 4, by_arr };

        let summary = StatsSummary::new(&stats);
        assert_eq!(summary.total, 4);
        assert_eq!(summary.arr_count, 2);
        assert_eq!(summary.arr_list(), "lidarr, sonarr");
    }

    #[test]
    fn test_summary_empty() {
        let summary = StatsSummary::new(&MappingStats::default());
        assert_eq!(summary.total, 0);
        assert_eq!(summary.arr_count, 0);
        assert_eq!(summary.arr_list(), "-");
    }
}
