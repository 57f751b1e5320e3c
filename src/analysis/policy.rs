//! Threshold policy selection.
//!
//! Three detection variants are in field use; they differ in crossing rule
//! and derived-marker arithmetic and are kept as a closed set so callers and
//! tests can target each exactly.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::AnalysisError;

/// Crossing rule and derived-marker formula variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// LT1 at the first rise above baseline + 0.5 mmol/L, LT2 at the fixed
    /// 4.0 mmol/L mark, FTP at 95% of LT2 power.
    #[default]
    BaselineDelta,
    /// LT1 inside the 1.5-2.0 mmol/L aerobic band, LT2 inside the
    /// 3.0-6.0 mmol/L band strictly after LT1, FTP at 107.5% of LT2 power.
    RangeBandConservative,
    /// Band-based LT1 with the fixed 4.0 mmol/L LT2; FTP is LT2 power as-is.
    RangeBandSimple,
}

impl ThresholdPolicy {
    /// All selectable policies, in documentation order.
    pub const ALL: [ThresholdPolicy; 3] = [
        ThresholdPolicy::BaselineDelta,
        ThresholdPolicy::RangeBandConservative,
        ThresholdPolicy::RangeBandSimple,
    ];

    /// Stable identifier, matching the serialized form.
    pub fn name(&self) -> &'static str {
        match self {
            ThresholdPolicy::BaselineDelta => "baseline_delta",
            ThresholdPolicy::RangeBandConservative => "range_band_conservative",
            ThresholdPolicy::RangeBandSimple => "range_band_simple",
        }
    }
}

impl std::fmt::Display for ThresholdPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThresholdPolicy::BaselineDelta => write!(f, "Baseline Delta"),
            ThresholdPolicy::RangeBandConservative => write!(f, "Range Band (conservative)"),
            ThresholdPolicy::RangeBandSimple => write!(f, "Range Band (simple)"),
        }
    }
}

impl FromStr for ThresholdPolicy {
    type Err = AnalysisError;

    /// Accepts the stable identifiers plus short aliases (`baseline`,
    /// `conservative`, `simple`); hyphens are treated as underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "baseline_delta" | "baseline" => Ok(ThresholdPolicy::BaselineDelta),
            "range_band_conservative" | "conservative" => {
                Ok(ThresholdPolicy::RangeBandConservative)
            }
            "range_band_simple" | "simple" => Ok(ThresholdPolicy::RangeBandSimple),
            other => Err(AnalysisError::InvalidInput(format!(
                "unknown threshold policy: {}",
                other
            ))),
        }
    }
}
