//! Table renderer: search filter and row projection.

use chrono::{DateTime, Utc};

use crate::mapping::Mapping;

/// Placeholder text for cells with no value.
const EMPTY_CELL: &str = "-";

/// A rendered table row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// One surviving mapping.
    Entry(MappingRow),
    /// Single placeholder row shown when nothing matches.
    NoResults,
}

/// Display projection of one mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingRow {
    pub infohash: String,
    pub torrent_name: String,
    pub arr_name: String,
    pub updated_at: String,
}

impl MappingRow {
    fn from_mapping(mapping: &Mapping) -> Self {
        Self {
            infohash: cell(&mapping.infohash),
            torrent_name: mapping
                .torrent_name
                .as_deref()
                .map(cell)
                .unwrap_or_else(|| EMPTY_CELL.to_string()),
            arr_name: cell(&mapping.arr_name),
            updated_at: format_timestamp(mapping.updated_at.as_deref()),
        }
    }
}

fn cell(value: &str) -> String {
    if value.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        value.to_string()
    }
}

/// Format a server-authored timestamp for display.
///
/// RFC 3339 values render as `YYYY-MM-DD HH:MM:SS` UTC; unparseable values
/// are shown verbatim, absent ones as "-".
pub fn format_timestamp(value: Option<&str>) -> String {
    let Some(raw) = value else {
        return EMPTY_CELL.to_string();
    };
    if raw.is_empty() {
        return EMPTY_CELL.to_string();
    }

    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed
            .with_timezone(&Utc)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Keep the mappings matching the search text, in snapshot order.
///
/// The query is trimmed and case-folded; a mapping survives when its
/// infohash, torrent name, or arr name (case-folded, missing treated as
/// empty) contains the query as a substring. An empty query keeps all.
pub fn filter_mappings<'a>(mappings: &'a [Mapping], query: &str) -> Vec<&'a Mapping> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return mappings.iter().collect();
    }

    mappings
        .iter()
        .filter(|m| {
            m.infohash.to_lowercase().contains(&query)
                || m.torrent_name
                    .as_deref()
                    .unwrap_or_default()
                    .to_lowercase()
                    .contains(&query)
                || m.arr_name.to_lowercase().contains(&query)
        })
        .collect()
}

/// Project the current snapshot, filtered by the search text, into rows.
pub fn render_table(mappings: &[Mapping], query: &str) -> Vec<TableRow> {
    let filtered = filter_mappings(mappings, query);
    if filtered.is_empty() {
        return vec![TableRow::NoResults];
    }

    filtered
        .into_iter()
        .map(|m| TableRow::Entry(MappingRow::from_mapping(m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(infohash: &str, name: Option<&str>, arr: &str) -> Mapping {
        Mapping {
            infohash: infohash.to_string(),
            torrent_id: String::new(),
            torrent_name: name.map(str::to_string),
            arr_name: arr.to_string(),
            updated_at: None,
        }
    }

    #[test]
    fn test_empty_query_keeps_all_in_order() {
        let mappings = vec![
            mapping("bbb", Some("Second"), "Radarr"),
            mapping("aaa", Some("First"), "Sonarr"),
        ];
        let filtered = filter_mappings(&mappings, "");
        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].infohash, "bbb");
        assert_eq!(filtered[1].infohash, "aaa");
    }

    #[test]
    fn test_filter_is_case_insensitive_across_fields() {
        let mappings = vec![
            mapping("abc123", Some("Foo Show"), "Sonarr"),
            mapping("def456", Some("Bar Movie"), "Radarr"),
        ];
        assert_eq!(filter_mappings(&mappings, "FOO").len(), 1);
        assert_eq!(filter_mappings(&mappings, "ABC").len(), 1);
        assert_eq!(filter_mappings(&mappings, "radarr").len(), 1);
        assert_eq!(filter_mappings(&mappings, "zzz").len(), 0);
    }

    #[test]
    fn test_filter_trims_query() {
        let mappings = vec![mapping("abc", Some("Foo"), "Sonarr")];
        assert_eq!(filter_mappings(&mappings, "  foo  ").len(), 1);
        // Whitespace-only behaves like no filter.
        assert_eq!(filter_mappings(&mappings, "   ").len(), 1);
    }

    #[test]
    fn test_filter_treats_missing_name_as_empty() {
        let mappings = vec![mapping("abc", None, "Sonarr")];
        assert_eq!(filter_mappings(&mappings, "foo").len(), 0);
        assert_eq!(filter_mappings(&mappings, "sonarr").len(), 1);
    }

    #[test]
    fn test_render_matching_query() {
        let mappings = vec![mapping("abc", Some("Foo"), "Sonarr")];
        let rows = render_table(&mappings, "foo");
        assert_eq!(rows.len(), 1);
        match &rows[0] {
            TableRow::Entry(row) => {
                assert_eq!(row.infohash, "abc");
                assert_eq!(row.torrent_name, "Foo");
                assert_eq!(row.arr_name, "Sonarr");
                assert_eq!(row.updated_at, "-");
            }
            TableRow::NoResults => panic!("Expected an entry row"),
        }
    }

    #[test]
    fn test_render_no_matches_yields_single_placeholder() {
        let mappings = vec![mapping("abc", Some("Foo"), "Sonarr")];
        let rows = render_table(&mappings, "zzz");
        assert_eq!(rows, vec![TableRow::NoResults]);
    }

    #[test]
    fn test_render_empty_snapshot_yields_placeholder() {
        let rows = render_table(&[], "");
        assert_eq!(rows, vec![TableRow::NoResults]);
    }

    #[test]
    fn test_row_uses_placeholders_for_missing_fields() {
        let mut m = mapping("abc", None, "");
        m.updated_at = None;
        let rows = render_table(&[m], "");
        match &rows[0] {
            TableRow::Entry(row) => {
                assert_eq!(row.torrent_name, "-");
                assert_eq!(row.arr_name, "-");
                assert_eq!(row.updated_at, "-");
            }
            TableRow::NoResults => panic!("Expected an entry row"),
        }
    }

    #[test]
    fn test_format_timestamp_rfc3339() {
        assert_eq!(
            format_timestamp(Some("2024-06-15T10:30:00Z")),
            "2024-06-15 10:30:00"
        );
        assert_eq!(
            format_timestamp(Some("2024-06-15T10:30:00+02:00")),
            "2024-06-15 08:30:00"
        );
    }

    #[test]
    fn test_format_timestamp_unparseable_shows_raw() {
        assert_eq!(format_timestamp(Some("yesterday")), "yesterday");
    }

    #[test]
    fn test_format_timestamp_absent() {
        assert_eq!(format_timestamp(None), "-");
        assert_eq!(format_timestamp(Some("")), "-");
    }
}
