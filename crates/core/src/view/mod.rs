//! Pure projections of the data store for display.
//!
//! No I/O here: the table renderer and stats summary take the current
//! snapshot and produce row/summary values for whatever surface embeds the
//! controller.

mod stats;
mod table;

pub use stats::StatsSummary;
pub use table::{filter_mappings, format_timestamp, render_table, MappingRow, TableRow};
