//! LactateLab - Lactate Threshold Analysis Toolkit
//!
//! Derives LT1, LT2, FTP and FATmax markers from incremental exercise test
//! data (per-stage lactate, heart rate and power readings), with CSV table
//! import/export and report-ready marker summaries. The analysis core is a
//! pure function of a sample series and a named detection policy.

pub mod analysis;
pub mod config;
pub mod import;
pub mod report;

// Re-export commonly used types
pub use analysis::policy::ThresholdPolicy;
pub use analysis::series::{RawRow, Sample, SampleSeries};
pub use analysis::thresholds::{ThresholdAnalyzer, ThresholdResult};
