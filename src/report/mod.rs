//! Result presentation and data export.

pub mod exporter_csv;
pub mod summary;

pub use exporter_csv::{export_csv_to_file, export_series_csv, ExportError};
pub use summary::{format_marker, marker_lines, DEFAULT_DECIMALS};
