//! CSV table parser for test data import.
//!
//! Reads the column-named tables produced by spreadsheet tools: a header
//! row naming `Lactate`, `Heart Rate` and `Power` (and optionally `Stage`),
//! then one row per test stage. Column order is free and header matching is
//! case-insensitive, so unit-suffixed variants like `lactate_mmol_per_l`
//! are accepted.

use crate::analysis::{AnalysisError, RawRow, SampleSeries};
use thiserror::Error;

/// Errors during table parsing.
#[derive(Debug, Error)]
pub enum TableParseError {
    /// Required column missing from the header row
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    /// A cell failed to parse as the required numeric type
    #[error("Invalid value for {column} in row {row}: {value:?}")]
    InvalidValue {
        column: &'static str,
        row: usize,
        value: String,
    },

    /// No data rows under the header
    #[error("Table has no data rows")]
    EmptyTable,

    /// A parsed row failed series validation
    #[error("Rejected row: {0}")]
    InvalidRow(#[from] AnalysisError),

    /// IO error reading file
    #[error("IO error: {0}")]
    IoError(String),
}

/// Header positions of the recognized columns.
#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    stage: Option<usize>,
    lactate: usize,
    heart_rate: usize,
    power: usize,
}

/// Parse a CSV table into a sample series.
pub fn parse_table(content: &str) -> Result<SampleSeries, TableParseError> {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());

    let header = lines.next().ok_or(TableParseError::EmptyTable)?;
    let columns = map_columns(header)?;

    let mut rows = Vec::new();
    for (i, line) in lines.enumerate() {
        rows.push(parse_row(line, &columns, i + 1)?);
    }

    if rows.is_empty() {
        return Err(TableParseError::EmptyTable);
    }

    Ok(SampleSeries::from_rows(&rows)?)
}

/// Parse a CSV table file from disk.
pub fn parse_table_file(path: &std::path::Path) -> Result<SampleSeries, TableParseError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| TableParseError::IoError(e.to_string()))?;
    parse_table(&content)
}

/// Locate the recognized columns in the header row.
fn map_columns(header: &str) -> Result<ColumnMap, TableParseError> {
    let names: Vec<String> = header.split(',').map(normalize_header).collect();
    let find = |prefix: &str| names.iter().position(|name| name.starts_with(prefix));

    Ok(ColumnMap {
        stage: find("stage"),
        lactate: find("lactate").ok_or(TableParseError::MissingColumn("Lactate"))?,
        heart_rate: find("heart rate").ok_or(TableParseError::MissingColumn("Heart Rate"))?,
        power: find("power").ok_or(TableParseError::MissingColumn("Power"))?,
    })
}

/// Lowercase a header cell and fold underscores so `Heart_Rate (bpm)` and
/// `heart rate` compare equal.
fn normalize_header(cell: &str) -> String {
    cell.trim().to_lowercase().replace('_', " ")
}

/// Parse one data row into a raw row.
fn parse_row(line: &str, columns: &ColumnMap, row: usize) -> Result<RawRow, TableParseError> {
    let cells: Vec<&str> = line.split(',').map(str::trim).collect();

    let cell = |index: usize| cells.get(index).copied().unwrap_or("");

    let stage = match columns.stage {
        Some(index) if !cell(index).is_empty() => {
            Some(parse_cell(cell(index), "Stage", row)?)
        }
        _ => None,
    };

    Ok(RawRow {
        stage,
        lactate_mmol: parse_cell(cell(columns.lactate), "Lactate", row)?,
        heart_rate_bpm: parse_cell(cell(columns.heart_rate), "Heart Rate", row)?,
        power_watts: parse_cell(cell(columns.power), "Power", row)?,
    })
}

/// Parse one cell, reporting the column and row on failure.
fn parse_cell<T: std::str::FromStr>(
    value: &str,
    column: &'static str,
    row: usize,
) -> Result<T, TableParseError> {
    value.parse().map_err(|_| TableParseError::InvalidValue {
        column,
        row,
        value: value.to_string(),
    })
}
