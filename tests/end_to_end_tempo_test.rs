// ABOUTME: End-to-end test of a scripted 30 fps swing through a session
// ABOUTME: Verifies phase sequence, 3:1 tempo, balance, swing path and clip summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::synthetic_swing_clip;
use swing_analyzer::{
    FrameOutcome, SwingPhase, SwingSession, TrackedMetric, TrendDirection,
};

fn analyzed_session() -> (SwingSession, Vec<SwingPhase>) {
    common::init_test_logging();
    let mut session = SwingSession::new(common::unsmoothed_config());
    let mut entered = Vec::new();
    for frame in synthetic_swing_clip() {
        match session.ingest_frame(&frame) {
            FrameOutcome::Processed {
                transition: Some(transition),
                ..
            } => entered.push(transition.to),
            FrameOutcome::Processed { .. } => {}
            FrameOutcome::Dropped(reason) => panic!("frame dropped: {reason}"),
        }
    }
    (session, entered)
}

#[test]
fn test_scripted_swing_phase_sequence() {
    let (session, entered) = analyzed_session();
    assert_eq!(
        entered,
        vec![
            SwingPhase::Address,
            SwingPhase::Backswing,
            SwingPhase::Downswing,
            SwingPhase::Impact,
            SwingPhase::FollowThrough,
        ]
    );
    assert_eq!(session.current_phase(), SwingPhase::FollowThrough);
}

#[test]
fn test_scripted_swing_tempo_is_three_to_one() {
    let (session, _) = analyzed_session();
    let timing = session.phase_timing();
    assert!((timing.duration(SwingPhase::Backswing).unwrap() - 0.6).abs() < 1e-6);
    assert!((timing.duration(SwingPhase::Downswing).unwrap() - 0.2).abs() < 1e-6);

    let metrics = session.metrics();
    assert!(!metrics.degraded);
    assert!((metrics.tempo - 3.0).abs() < 0.1, "tempo {}", metrics.tempo);
}

#[test]
fn test_scripted_swing_balance_and_path() {
    let (session, _) = analyzed_session();

    // Frames 21 to 27 move the wrist faster than the impact threshold
    let window = session.impact_window();
    assert_eq!(window.len(), 7);
    assert_eq!(window[0].frame_number(), 21);

    let metrics = session.metrics();
    assert!((metrics.balance - 1.0).abs() < 1e-9);
    // Wrist travels (0.19, 0.35) against a (0, 1) target line
    let expected = -(0.19f64.atan2(0.35).to_degrees());
    assert!(
        (metrics.swing_path_deviation - expected).abs() < 1e-6,
        "deviation {}",
        metrics.swing_path_deviation
    );
    assert!(metrics.overall_score > 0.0 && metrics.overall_score <= 100.0);
}

#[test]
fn test_scripted_swing_clip_analysis() {
    let (session, _) = analyzed_session();
    let analysis = session.finish();

    assert_eq!(analysis.frames_processed, 30);
    assert_eq!(analysis.frames_dropped, 0);
    assert_eq!(analysis.final_phase, SwingPhase::FollowThrough);
    assert!(!analysis.degraded);

    assert_eq!(analysis.biomechanics.frame_count, 30);
    let shoulders = analysis
        .biomechanics
        .joint(TrackedMetric::ShoulderAngle)
        .unwrap();
    assert_eq!(shoulders.series.len(), 30);
    assert!(shoulders.average.abs() < 1e-9);
    assert!((shoulders.consistency - 0.0).abs() < 1e-9);

    // The lead elbow angle follows the wrist, everything else holds still
    let hips = analysis.progression.trend(TrackedMetric::HipAngle).unwrap();
    assert_eq!(hips.trend, TrendDirection::Stable);
    assert!((analysis.progression.clip_duration - 29.0 / 30.0).abs() < 1e-9);
    assert_eq!(analysis.progression.trends.len(), TrackedMetric::ALL.len());
}

#[test]
fn test_analysis_serializes() {
    let (session, _) = analyzed_session();
    let analysis = session.finish();
    let json = serde_json::to_value(&analysis).unwrap();

    assert_eq!(json["final_phase"], "follow_through");
    assert_eq!(json["frames_processed"], 30);
    assert!(json["metrics"]["tempo"].as_f64().is_some());
}
