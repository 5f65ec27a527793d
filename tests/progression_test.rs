// ABOUTME: Integration tests for per-metric trend classification across a clip
// ABOUTME: Covers thirds-based change, slope over clip duration, consistency and sparse series
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use swing_analyzer::{Landmark, PoseFrame, TrackedMetric, TrendDirection};
use swing_intelligence::{biomechanics, JointAngles, ProgressionAnalyzer, TrendConfig};

fn elbow_frame(n: u64, t: f64, wrist: (f64, f64)) -> PoseFrame {
    PoseFrame::builder(n, t)
        .landmark(Landmark::LeftShoulder, 0.4, 0.3, 0.9)
        .landmark(Landmark::LeftElbow, 0.4, 0.5, 0.9)
        .landmark(Landmark::LeftWrist, wrist.0, wrist.1, 0.9)
        .build()
}

#[test]
fn test_increasing_series() {
    let analyzer = ProgressionAnalyzer::default();
    let series = vec![10.0, 12.0, 14.0, 20.0, 22.0, 24.0, 30.0, 32.0, 34.0];
    let result = analyzer.analyze_series(TrackedMetric::LeftKneeAngle, series, 2.0);

    assert_eq!(result.trend, TrendDirection::Increasing);
    assert!((result.change_amount - 20.0).abs() < 1e-9);
    assert!((result.slope - 10.0).abs() < 1e-9);
    assert_eq!(result.metric, TrackedMetric::LeftKneeAngle);
    assert_eq!(result.series.len(), 9);
}

#[test]
fn test_decreasing_series() {
    let analyzer = ProgressionAnalyzer::default();
    let result = analyzer.analyze_series(
        TrackedMetric::SpineAngle,
        vec![40.0, 38.0, 30.0, 28.0, 20.0, 18.0],
        1.0,
    );
    assert_eq!(result.trend, TrendDirection::Decreasing);
    assert!((result.change_amount + 20.0).abs() < 1e-9);
    assert!(result.slope < 0.0);
}

#[test]
fn test_flat_series_is_stable() {
    let analyzer = ProgressionAnalyzer::default();
    let result = analyzer.analyze_series(TrackedMetric::SpineAngle, vec![12.0; 8], 1.0);
    assert_eq!(result.trend, TrendDirection::Stable);
    assert!(result.change_amount.abs() < f64::EPSILON);
    assert!((result.confidence - 1.0).abs() < 1e-12);
}

#[test]
fn test_small_change_is_stable() {
    let analyzer = ProgressionAnalyzer::default();
    let result = analyzer.analyze_series(
        TrackedMetric::HipAngle,
        vec![10.0, 11.0, 12.0, 13.0, 14.0, 14.5],
        1.0,
    );
    assert_eq!(result.trend, TrendDirection::Stable);
    assert!(result.confidence > 0.8);
}

#[test]
fn test_stable_threshold_is_configurable() {
    let analyzer = ProgressionAnalyzer::new(TrendConfig {
        stable_change_threshold: 1.0,
        ..TrendConfig::default()
    });
    let result = analyzer.analyze_series(
        TrackedMetric::HipAngle,
        vec![10.0, 11.0, 12.0, 13.0, 14.0, 14.5],
        1.0,
    );
    assert_eq!(result.trend, TrendDirection::Increasing);
}

#[test]
fn test_too_few_points_is_insufficient() {
    let analyzer = ProgressionAnalyzer::default();
    let result = analyzer.analyze_series(TrackedMetric::HipAngle, vec![1.0, 50.0], 1.0);
    assert_eq!(result.trend, TrendDirection::InsufficientData);
    assert!(result.slope.abs() < f64::EPSILON);
    assert!(result.confidence.abs() < f64::EPSILON);
}

#[test]
fn test_zero_duration_has_zero_slope() {
    let analyzer = ProgressionAnalyzer::default();
    let result = analyzer.analyze_series(
        TrackedMetric::HipAngle,
        vec![0.0, 0.0, 0.0, 30.0, 30.0, 30.0],
        0.0,
    );
    assert_eq!(result.trend, TrendDirection::Increasing);
    assert!(result.slope.abs() < f64::EPSILON);
}

/// Lead wrist swings from under the elbow out to the side: flexion 0 -> 90
fn elbow_extension_clip() -> Vec<PoseFrame> {
    (0..12_u32)
        .map(|i| {
            let angle = (f64::from(i) * 90.0 / 11.0).to_radians();
            elbow_frame(
                u64::from(i),
                f64::from(i) / 30.0,
                (0.2f64.mul_add(angle.sin(), 0.4), 0.2f64.mul_add(-angle.cos(), 0.5)),
            )
        })
        .collect()
}

#[test]
fn test_clip_trend_follows_elbow_extension() {
    let frames = elbow_extension_clip();

    let report = ProgressionAnalyzer::default().analyze_clip(&frames);
    let elbow = report.trend(TrackedMetric::LeftElbowAngle).unwrap();
    assert_eq!(elbow.trend, TrendDirection::Increasing);
    assert_eq!(elbow.series.len(), 12);
    assert!((report.clip_duration - 11.0 / 30.0).abs() < 1e-9);

    let knee = report.trend(TrackedMetric::LeftKneeAngle).unwrap();
    assert_eq!(knee.trend, TrendDirection::InsufficientData);
    assert!(knee.series.is_empty());
}

#[test]
fn test_empty_clip_report() {
    let report = ProgressionAnalyzer::default().analyze_clip(&[]);
    assert!(report.clip_duration.abs() < f64::EPSILON);
    assert!(report
        .trends
        .values()
        .all(|t| t.trend == TrendDirection::InsufficientData));
}

#[test]
fn test_shared_angle_measurements_match_per_metric_analysis() {
    let frames = elbow_extension_clip();
    let analyzer = ProgressionAnalyzer::default();
    let angles = JointAngles::measure_clip(&frames);
    assert_eq!(angles.len(), frames.len());

    let report = analyzer.analyze_angles(&angles, ProgressionAnalyzer::clip_duration(&frames));
    assert_eq!(report, analyzer.analyze_clip(&frames));
    for metric in TrackedMetric::ALL {
        assert_eq!(
            report.trend(metric).unwrap(),
            &analyzer.analyze_metric(&frames, metric)
        );
    }

    assert_eq!(
        biomechanics::summarize_angles(&angles),
        biomechanics::summarize(&frames)
    );
}
