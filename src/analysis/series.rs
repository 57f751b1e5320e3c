//! Test stage samples and the ordered series container.

use serde::{Deserialize, Serialize};

use super::error::{AnalysisError, AnalysisResult};

/// One stage of an incremental exercise test.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Stage number (1-based, acquisition order)
    pub stage: u32,
    /// Blood lactate concentration in mmol/L
    pub lactate_mmol: f64,
    /// Heart rate in bpm
    pub heart_rate_bpm: u16,
    /// Power output in watts
    pub power_watts: u16,
}

impl Sample {
    /// Create a sample for the given stage.
    pub fn new(stage: u32, lactate_mmol: f64, heart_rate_bpm: u16, power_watts: u16) -> Self {
        Self {
            stage,
            lactate_mmol,
            heart_rate_bpm,
            power_watts,
        }
    }
}

/// A raw table row before stage numbers are assigned.
///
/// Rows come from manual entry or a tabular file; the stage column is
/// optional in both sources.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawRow {
    /// Stage number from the source, if it carried one
    pub stage: Option<u32>,
    /// Blood lactate concentration in mmol/L
    pub lactate_mmol: f64,
    /// Heart rate in bpm
    pub heart_rate_bpm: u16,
    /// Power output in watts
    pub power_watts: u16,
}

/// Ordered sequence of test stages.
///
/// Samples stay in acquisition order; the analyzer never re-sorts them.
/// Power or lactate reversals across stages are allowed — real tests are
/// noisy.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a series from raw rows, rejecting rows that fail validation.
    ///
    /// Stage numbers are synthesized as 1..N for rows whose source had no
    /// stage column.
    pub fn from_rows(rows: &[RawRow]) -> AnalysisResult<Self> {
        let mut series = Self::new();

        for (i, row) in rows.iter().enumerate() {
            if !row.lactate_mmol.is_finite() || row.lactate_mmol <= 0.0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "row {}: lactate must be a positive number, got {}",
                    i + 1,
                    row.lactate_mmol
                )));
            }
            if row.heart_rate_bpm == 0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "row {}: heart rate must be positive",
                    i + 1
                )));
            }
            if row.power_watts == 0 {
                return Err(AnalysisError::InvalidInput(format!(
                    "row {}: power must be positive",
                    i + 1
                )));
            }

            let stage = row.stage.unwrap_or(i as u32 + 1);
            series.append(Sample::new(
                stage,
                row.lactate_mmol,
                row.heart_rate_bpm,
                row.power_watts,
            ));
        }

        Ok(series)
    }

    /// Append a sample to the end of the series.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Replace the sample at `index` (in-place table edits).
    pub fn replace_at(&mut self, index: usize, sample: Sample) -> AnalysisResult<()> {
        if index >= self.samples.len() {
            return Err(AnalysisError::IndexOutOfRange {
                index,
                len: self.samples.len(),
            });
        }
        self.samples[index] = sample;
        Ok(())
    }

    /// Remove all samples.
    pub fn clear(&mut self) {
        self.samples.clear();
    }

    /// Number of stages in the series.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether the series has no stages.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// All samples in stage order.
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    /// The sample at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Lactate values in stage order.
    ///
    /// Index-aligned with [`power_vector`](Self::power_vector) and
    /// [`heart_rate_vector`](Self::heart_rate_vector): position `i` of all
    /// three vectors comes from the same sample.
    pub fn lactate_vector(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.lactate_mmol).collect()
    }

    /// Heart rate values in stage order.
    pub fn heart_rate_vector(&self) -> Vec<u16> {
        self.samples.iter().map(|s| s.heart_rate_bpm).collect()
    }

    /// Power values in stage order.
    pub fn power_vector(&self) -> Vec<u16> {
        self.samples.iter().map(|s| s.power_watts).collect()
    }
}
