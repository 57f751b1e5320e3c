//! Integration tests for threshold detection across all policies.

use lactatelab::{Sample, SampleSeries, ThresholdAnalyzer, ThresholdPolicy};

fn series_from(lactate: &[f64], power: &[u16]) -> SampleSeries {
    assert_eq!(lactate.len(), power.len());
    let mut series = SampleSeries::new();
    for (i, (&l, &p)) in lactate.iter().zip(power.iter()).enumerate() {
        series.append(Sample::new(i as u32 + 1, l, 115 + 12 * i as u16, p));
    }
    series
}

/// The six-stage ramp used throughout: baseline 1.0 mmol/L, aerobic band
/// entered at stage 3, 4.0 mmol/L crossed at stage 5.
fn ramp() -> SampleSeries {
    series_from(
        &[1.0, 1.2, 1.8, 2.5, 4.5, 6.0],
        &[100, 150, 200, 250, 300, 350],
    )
}

#[test]
fn baseline_delta_derives_all_markers_on_ramp() {
    let result = ThresholdAnalyzer::new(ThresholdPolicy::BaselineDelta).analyze(&ramp());

    // LT1: first lactate above 1.0 + 0.5 is 1.8 at index 2 -> 200 W.
    assert_eq!(result.lt1_index, Some(2));
    assert_eq!(result.lt1_watts, Some(200.0));
    // LT2: first lactate at or above 4.0 is 4.5 at index 4 -> 300 W.
    assert_eq!(result.lt2_index, Some(4));
    assert_eq!(result.lt2_watts, Some(300.0));
    // FTP: 300 * 0.95; FATmax: max power of stages before LT1.
    assert_eq!(result.ftp_watts, Some(285.0));
    assert_eq!(result.fatmax_watts, Some(150.0));
    assert!(!result.insufficient_data);
}

#[test]
fn range_band_conservative_derives_all_markers_on_ramp() {
    let result = ThresholdAnalyzer::new(ThresholdPolicy::RangeBandConservative).analyze(&ramp());

    assert_eq!(result.lt1_watts, Some(200.0)); // 1.8 in [1.5, 2.0]
    assert_eq!(result.lt2_watts, Some(300.0)); // 4.5 in [3.0, 6.0] after LT1
    assert_eq!(result.ftp_watts, Some(322.5)); // 300 * 1.075
    assert_eq!(result.fatmax_watts, Some(190.0)); // 200 * 0.95
}

#[test]
fn range_band_simple_derives_all_markers_on_ramp() {
    let result = ThresholdAnalyzer::new(ThresholdPolicy::RangeBandSimple).analyze(&ramp());

    assert_eq!(result.lt1_watts, Some(200.0));
    assert_eq!(result.lt2_watts, Some(300.0));
    assert_eq!(result.ftp_watts, Some(300.0)); // LT2 power unchanged
    assert_eq!(result.fatmax_watts, Some(150.0)); // max(100, 150)
}

#[test]
fn three_stages_are_insufficient_for_every_policy() {
    let short = series_from(&[2.0, 2.1, 2.3], &[100, 150, 200]);

    for policy in ThresholdPolicy::ALL {
        let result = ThresholdAnalyzer::new(policy).analyze(&short);
        assert!(result.insufficient_data, "policy {policy}");
        assert_eq!(result.ftp_watts, None);
        assert_eq!(result.lt1_watts, None);
        assert_eq!(result.lt2_watts, None);
        assert_eq!(result.fatmax_watts, None);
        assert_eq!(result.lt1_index, None);
        assert_eq!(result.lt2_index, None);
    }
}

#[test]
fn ftp_follows_lt2_or_falls_back_to_final_stage() {
    for policy in ThresholdPolicy::ALL {
        let result = ThresholdAnalyzer::new(policy).analyze(&ramp());
        // LT2 found: FTP must be derived from LT2 power, never null.
        assert!(result.lt2_watts.is_some());
        assert!(result.ftp_watts.is_some());
    }

    // A curve that never leaves the low range has no LT2 anywhere; FTP is
    // the final stage's power for every policy.
    let flat = series_from(&[1.0, 1.1, 1.2, 1.3], &[100, 150, 200, 250]);
    for policy in ThresholdPolicy::ALL {
        let result = ThresholdAnalyzer::new(policy).analyze(&flat);
        assert_eq!(result.lt2_watts, None, "policy {policy}");
        assert_eq!(result.ftp_watts, Some(250.0), "policy {policy}");
    }
}

#[test]
fn flat_curve_leaves_lt1_and_fatmax_undefined() {
    let flat = series_from(&[1.0, 1.1, 1.2, 1.3], &[100, 150, 200, 250]);
    let result = ThresholdAnalyzer::new(ThresholdPolicy::BaselineDelta).analyze(&flat);

    assert_eq!(result.lt1_watts, None);
    assert_eq!(result.fatmax_watts, None);
}

#[test]
fn fatmax_requires_lt1_past_the_first_stage() {
    // LT1 lands on index 1, so exactly one stage precedes it.
    let early = series_from(&[1.0, 1.7, 2.6, 4.2], &[120, 170, 220, 270]);

    for policy in [ThresholdPolicy::BaselineDelta, ThresholdPolicy::RangeBandSimple] {
        let result = ThresholdAnalyzer::new(policy).analyze(&early);
        assert_eq!(result.lt1_index, Some(1), "policy {policy}");
        assert_eq!(result.fatmax_watts, Some(120.0), "policy {policy}");
    }
}

#[test]
fn conservative_band_overshoot_pins_open_question() {
    // Lactate skips the 3.0-6.0 band entirely (2.9 -> 7.0). Implemented
    // literally: no LT2, FTP falls back to the final stage.
    let jump = series_from(&[1.0, 1.6, 2.9, 7.0, 8.0], &[100, 150, 200, 250, 300]);
    let result = ThresholdAnalyzer::new(ThresholdPolicy::RangeBandConservative).analyze(&jump);

    assert_eq!(result.lt1_index, Some(1));
    assert_eq!(result.lt2_watts, None);
    assert_eq!(result.ftp_watts, Some(300.0));
}

#[test]
fn heart_rate_never_moves_the_markers() {
    let lactate = [1.0, 1.2, 1.8, 2.5, 4.5, 6.0];
    let power = [100, 150, 200, 250, 300, 350];

    let mut calm = SampleSeries::new();
    let mut racing = SampleSeries::new();
    for (i, (&l, &p)) in lactate.iter().zip(power.iter()).enumerate() {
        calm.append(Sample::new(i as u32 + 1, l, 90, p));
        racing.append(Sample::new(i as u32 + 1, l, 190, p));
    }

    for policy in ThresholdPolicy::ALL {
        let analyzer = ThresholdAnalyzer::new(policy);
        assert_eq!(analyzer.analyze(&calm), analyzer.analyze(&racing));
    }
}

#[test]
fn analyze_is_idempotent_and_side_effect_free() {
    let series = ramp();
    let before = series.clone();

    for policy in ThresholdPolicy::ALL {
        let analyzer = ThresholdAnalyzer::new(policy);
        let first = analyzer.analyze(&series);
        let second = analyzer.analyze(&series);
        assert_eq!(first, second);
    }

    assert_eq!(series, before);
}

#[test]
fn replace_at_feeds_the_next_analysis() {
    let mut series = ramp();
    let analyzer = ThresholdAnalyzer::new(ThresholdPolicy::BaselineDelta);

    assert_eq!(analyzer.analyze(&series).lt1_index, Some(2));

    // An edit that drops stage 3 below the crossing moves LT1 one stage out.
    let edited = Sample::new(3, 1.4, 140, 200);
    series.replace_at(2, edited).unwrap();

    assert_eq!(analyzer.analyze(&series).lt1_index, Some(3));
}
