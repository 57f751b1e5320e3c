//! Human-readable marker summaries.
//!
//! Rounding happens here, at the presentation edge; the analyzer hands over
//! unrounded floats.

use crate::analysis::ThresholdResult;

/// Default number of decimals in formatted watt values.
pub const DEFAULT_DECIMALS: u8 = 2;

/// Format one marker line, e.g. `FTP: 285.00 W` or `FTP: Not Calculated`.
pub fn format_marker(name: &str, watts: Option<f64>, decimals: u8) -> String {
    match watts {
        Some(value) => format!("{}: {:.prec$} W", name, value, prec = decimals as usize),
        None => format!("{}: Not Calculated", name),
    }
}

/// The four marker lines of a result, in display order.
pub fn marker_lines(result: &ThresholdResult, decimals: u8) -> Vec<String> {
    vec![
        format_marker("FTP", result.ftp_watts, decimals),
        format_marker("LT1", result.lt1_watts, decimals),
        format_marker("LT2", result.lt2_watts, decimals),
        format_marker("FATmax", result.fatmax_watts, decimals),
    ]
}
