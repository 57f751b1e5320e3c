//! Lactate threshold detection.
//!
//! Scans the lactate curve of an incremental test for the first and second
//! lactate thresholds and derives FTP and FATmax from the crossing points.
//! All marker arithmetic is plain floating point; rounding is left to the
//! presentation layer.

use serde::{Deserialize, Serialize};

use super::policy::ThresholdPolicy;
use super::series::SampleSeries;

/// Minimum number of stages required before any marker is derived.
pub const MIN_STAGES: usize = 4;

/// Lactate rise over the baseline stage that marks LT1 (mmol/L).
pub const LT1_BASELINE_DELTA: f64 = 0.5;

/// Fixed lactate concentration that marks LT2 (mmol/L).
pub const LT2_FIXED_MMOL: f64 = 4.0;

/// Aerobic band the range policies place LT1 in (mmol/L).
pub const LT1_BAND_MMOL: (f64, f64) = (1.5, 2.0);

/// Anaerobic band the conservative range policy places LT2 in (mmol/L).
pub const LT2_BAND_MMOL: (f64, f64) = (3.0, 6.0);

/// FTP as a fraction of LT2 power under [`ThresholdPolicy::BaselineDelta`].
pub const FTP_FACTOR_BASELINE_DELTA: f64 = 0.95;

/// FTP as a fraction of LT2 power under
/// [`ThresholdPolicy::RangeBandConservative`].
pub const FTP_FACTOR_RANGE_CONSERVATIVE: f64 = 1.075;

/// FATmax as a fraction of LT1 power under
/// [`ThresholdPolicy::RangeBandConservative`].
pub const FATMAX_FACTOR_FROM_LT1: f64 = 0.95;

/// Threshold markers derived from one analysis pass.
///
/// Any marker may be absent: a curve that never satisfies a crossing rule
/// is a valid outcome, not an error. FTP is the exception — whenever the
/// series is long enough it falls back to the final stage's power when LT2
/// is undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdResult {
    /// Policy that produced this result
    pub policy: ThresholdPolicy,
    /// Functional Threshold Power in watts
    pub ftp_watts: Option<f64>,
    /// First lactate threshold power in watts
    pub lt1_watts: Option<f64>,
    /// Second lactate threshold power in watts
    pub lt2_watts: Option<f64>,
    /// Power of maximal fat oxidation in watts
    pub fatmax_watts: Option<f64>,
    /// Stage index (0-based) where LT1 was found
    pub lt1_index: Option<usize>,
    /// Stage index (0-based) where LT2 was found
    pub lt2_index: Option<usize>,
    /// True when the series had fewer than [`MIN_STAGES`] stages
    pub insufficient_data: bool,
}

impl ThresholdResult {
    /// All-null result for a series too short to analyze.
    fn insufficient(policy: ThresholdPolicy) -> Self {
        Self {
            policy,
            ftp_watts: None,
            lt1_watts: None,
            lt2_watts: None,
            fatmax_watts: None,
            lt1_index: None,
            lt2_index: None,
            insufficient_data: true,
        }
    }
}

/// Threshold analyzer.
///
/// Stateless: every call recomputes all four markers from the series
/// snapshot, so repeated calls on an unchanged series return identical
/// results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdAnalyzer {
    policy: ThresholdPolicy,
}

impl ThresholdAnalyzer {
    /// Create an analyzer for the given policy.
    pub fn new(policy: ThresholdPolicy) -> Self {
        Self { policy }
    }

    /// The active policy.
    pub fn policy(&self) -> ThresholdPolicy {
        self.policy
    }

    /// Derive LT1, LT2, FTP and FATmax from the series.
    ///
    /// A series with fewer than [`MIN_STAGES`] stages yields an all-null
    /// result flagged `insufficient_data` — a reportable condition for the
    /// caller, not a failure.
    pub fn analyze(&self, series: &SampleSeries) -> ThresholdResult {
        if series.len() < MIN_STAGES {
            tracing::warn!(
                "threshold analysis skipped: {} of {} required stages",
                series.len(),
                MIN_STAGES
            );
            return ThresholdResult::insufficient(self.policy);
        }

        let lactate = series.lactate_vector();
        let power = series.power_vector();

        let lt1_index = self.find_lt1(&lactate);
        let lt2_index = self.find_lt2(&lactate, lt1_index);

        let lt1_watts = lt1_index.map(|i| f64::from(power[i]));
        let lt2_watts = lt2_index.map(|i| f64::from(power[i]));
        let ftp_watts = Some(self.derive_ftp(lt2_watts, &power));
        let fatmax_watts = self.derive_fatmax(lt1_index, lt1_watts, &power);

        tracing::debug!(
            "thresholds under {}: lt1 at {:?}, lt2 at {:?}",
            self.policy,
            lt1_index,
            lt2_index
        );

        ThresholdResult {
            policy: self.policy,
            ftp_watts,
            lt1_watts,
            lt2_watts,
            fatmax_watts,
            lt1_index,
            lt2_index,
            insufficient_data: false,
        }
    }

    /// First stage satisfying the policy's LT1 rule.
    fn find_lt1(&self, lactate: &[f64]) -> Option<usize> {
        match self.policy {
            ThresholdPolicy::BaselineDelta => {
                let baseline = lactate[0];
                first_crossing(lactate, |l| l > baseline + LT1_BASELINE_DELTA)
            }
            ThresholdPolicy::RangeBandConservative | ThresholdPolicy::RangeBandSimple => {
                first_crossing(lactate, |l| {
                    (LT1_BAND_MMOL.0..=LT1_BAND_MMOL.1).contains(&l)
                })
            }
        }
    }

    /// First stage satisfying the policy's LT2 rule.
    ///
    /// The conservative policy searches strictly after LT1 and leaves LT2
    /// undefined when LT1 is; the other two scan the whole curve
    /// independently.
    fn find_lt2(&self, lactate: &[f64], lt1_index: Option<usize>) -> Option<usize> {
        match self.policy {
            ThresholdPolicy::BaselineDelta | ThresholdPolicy::RangeBandSimple => {
                first_crossing(lactate, |l| l >= LT2_FIXED_MMOL)
            }
            ThresholdPolicy::RangeBandConservative => {
                let lt1 = lt1_index?;
                lactate
                    .iter()
                    .enumerate()
                    .skip(lt1 + 1)
                    .find(|(_, &l)| (LT2_BAND_MMOL.0..=LT2_BAND_MMOL.1).contains(&l))
                    .map(|(i, _)| i)
            }
        }
    }

    /// FTP from LT2 power, falling back to the final stage when LT2 is
    /// undefined.
    fn derive_ftp(&self, lt2_watts: Option<f64>, power: &[u16]) -> f64 {
        let last_stage = f64::from(power[power.len() - 1]);
        match (self.policy, lt2_watts) {
            (_, None) => last_stage,
            (ThresholdPolicy::BaselineDelta, Some(watts)) => watts * FTP_FACTOR_BASELINE_DELTA,
            (ThresholdPolicy::RangeBandConservative, Some(watts)) => {
                watts * FTP_FACTOR_RANGE_CONSERVATIVE
            }
            (ThresholdPolicy::RangeBandSimple, Some(watts)) => watts,
        }
    }

    /// FATmax from sub-LT1 data; undefined whenever LT1 is.
    fn derive_fatmax(
        &self,
        lt1_index: Option<usize>,
        lt1_watts: Option<f64>,
        power: &[u16],
    ) -> Option<f64> {
        match self.policy {
            ThresholdPolicy::BaselineDelta | ThresholdPolicy::RangeBandSimple => {
                let lt1 = lt1_index?;
                power[..lt1].iter().copied().max().map(f64::from)
            }
            ThresholdPolicy::RangeBandConservative => {
                lt1_watts.map(|watts| watts * FATMAX_FACTOR_FROM_LT1)
            }
        }
    }
}

/// First index whose lactate satisfies `pred`, scanning from stage 0.
///
/// A hit at stage 0 counts as no crossing: the baseline stage cannot be a
/// threshold.
fn first_crossing<F>(lactate: &[f64], pred: F) -> Option<usize>
where
    F: Fn(f64) -> bool,
{
    match lactate.iter().position(|&l| pred(l)) {
        Some(0) | None => None,
        found => found,
    }
}
