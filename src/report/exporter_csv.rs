//! CSV export of a sample series.

use crate::analysis::SampleSeries;
use std::io::Write;
use thiserror::Error;

/// Errors during export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export
    #[error("No data to export")]
    NoData,

    /// Formatting into the output buffer failed
    #[error("Write failed: {0}")]
    WriteFailed(String),

    /// IO error writing the file
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Export a sample series to CSV text.
///
/// The column layout round-trips through
/// [`parse_table`](crate::import::parse_table).
pub fn export_series_csv(series: &SampleSeries) -> Result<String, ExportError> {
    if series.is_empty() {
        return Err(ExportError::NoData);
    }

    let mut output = Vec::new();

    writeln!(output, "stage,lactate_mmol_per_l,heart_rate_bpm,power_watts")
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    for sample in series.samples() {
        writeln!(
            output,
            "{},{},{},{}",
            sample.stage, sample.lactate_mmol, sample.heart_rate_bpm, sample.power_watts,
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Export a sample series to a CSV file.
pub fn export_csv_to_file(
    series: &SampleSeries,
    path: &std::path::Path,
) -> Result<(), ExportError> {
    let content = export_series_csv(series)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Generate a timestamped default filename for a table export.
pub fn generate_csv_filename() -> String {
    let timestamp = chrono::Utc::now().format("%Y%m%d_%H%M%S");
    format!("LactateTest_{}.csv", timestamp)
}
