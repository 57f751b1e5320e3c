//! Lactate curve analysis module.
//!
//! This module provides the threshold-detection core:
//! - Ordered per-stage sample series
//! - Named detection policies (crossing rules + marker formulas)
//! - Threshold analyzer producing LT1, LT2, FTP and FATmax

pub mod error;
pub mod policy;
pub mod series;
pub mod thresholds;

// Re-exports for convenience
pub use error::{AnalysisError, AnalysisResult};
pub use policy::ThresholdPolicy;
pub use series::{RawRow, Sample, SampleSeries};
pub use thresholds::{ThresholdAnalyzer, ThresholdResult, MIN_STAGES};
