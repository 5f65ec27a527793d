// ABOUTME: Integration tests for swing-phase classification across a full swing
// ABOUTME: Covers phase order, timing bookkeeping, the swing timer and return to address
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use common::swing_frame;
use swing_analyzer::{EngineConfig, FrameOutcome, PhaseTransition, SwingPhase, SwingSession};
use swing_intelligence::{PhaseClassifier, PhaseThresholds, PoseHistory};

/// Timestamps and wrist offsets for a slow, fully-phased swing
const SLOW_SWING: [(f64, (f64, f64)); 9] = [
    (0.0, (0.0, 0.05)),
    (1.0, (-0.15, 0.0)),
    (2.0, (-0.3, -0.25)),
    (3.0, (-0.3, -0.25)),
    (3.1, (-0.15, 0.0)),
    (3.2, (0.0, 0.3)),
    (3.3, (0.15, 0.1)),
    (4.3, (0.3, -0.1)),
    (5.3, (0.3, -0.1)),
];

fn session() -> SwingSession {
    common::init_test_logging();
    SwingSession::new(common::unsmoothed_config())
}

fn run(session: &mut SwingSession, script: &[(f64, (f64, f64))]) -> Vec<PhaseTransition> {
    let start = session.clip().len() as u64;
    script
        .iter()
        .enumerate()
        .filter_map(|(i, &(t, offset))| {
            match session.ingest_frame(&swing_frame(start + i as u64, t, offset)) {
                FrameOutcome::Processed { transition, .. } => transition,
                FrameOutcome::Dropped(reason) => panic!("frame {i} dropped: {reason}"),
            }
        })
        .collect()
}

#[test]
fn test_full_swing_phase_order() {
    let mut session = session();
    let transitions = run(&mut session, &SLOW_SWING);

    let phases: Vec<SwingPhase> = transitions.iter().map(|t| t.to).collect();
    assert_eq!(
        phases,
        vec![
            SwingPhase::Address,
            SwingPhase::Takeaway,
            SwingPhase::Backswing,
            SwingPhase::Downswing,
            SwingPhase::Impact,
            SwingPhase::FollowThrough,
            SwingPhase::Finish,
        ]
    );
    assert_eq!(transitions[0].from, SwingPhase::Unknown);
    assert!(!transitions
        .iter()
        .any(|t| t.from == SwingPhase::Finish && t.to == SwingPhase::Backswing));
    assert_eq!(session.current_phase(), SwingPhase::Finish);
}

#[test]
fn test_phase_timing_uses_frame_timestamps() {
    let mut session = session();
    run(&mut session, &SLOW_SWING);

    let timing = session.phase_timing();
    assert!((timing.duration(SwingPhase::Takeaway).unwrap() - 1.0).abs() < 1e-9);
    assert!((timing.duration(SwingPhase::Backswing).unwrap() - 1.1).abs() < 1e-9);
    assert!((timing.duration(SwingPhase::Downswing).unwrap() - 0.1).abs() < 1e-9);
    assert!((timing.duration(SwingPhase::Impact).unwrap() - 0.1).abs() < 1e-9);
    assert!((timing.duration(SwingPhase::FollowThrough).unwrap() - 1.0).abs() < 1e-9);
    assert!(timing.duration(SwingPhase::Finish).is_none());
    assert!(timing.duration(SwingPhase::Unknown).is_none());
}

#[test]
fn test_takeaway_starts_swing_timer() {
    let mut session = session();
    run(&mut session, &SLOW_SWING[..1]);
    assert_eq!(session.current_phase(), SwingPhase::Address);
    assert!(session.swing_started_at().is_none());

    run(&mut session, &SLOW_SWING[1..2]);
    assert_eq!(session.current_phase(), SwingPhase::Takeaway);
    assert_eq!(session.swing_started_at(), Some(1.0));
}

#[test]
fn test_return_to_address_starts_new_swing() {
    let mut session = session();
    run(&mut session, &SLOW_SWING);
    let transitions = run(&mut session, &[(6.3, (0.0, 0.05))]);

    assert_eq!(transitions.len(), 1);
    assert_eq!(transitions[0].from, SwingPhase::Finish);
    assert_eq!(transitions[0].to, SwingPhase::Address);
    assert!((transitions[0].elapsed_in_previous - 2.0).abs() < 1e-9);
    assert!(session.phase_timing().is_empty());
    assert!(session.swing_started_at().is_none());
    assert!((session.address_frame().unwrap().timestamp() - 6.3).abs() < 1e-9);
}

#[test]
fn test_transition_reports_elapsed_time() {
    let mut session = session();
    let transitions = run(&mut session, &SLOW_SWING);
    let downswing = transitions
        .iter()
        .find(|t| t.to == SwingPhase::Downswing)
        .unwrap();
    assert_eq!(downswing.from, SwingPhase::Backswing);
    assert_eq!(downswing.frame_number, 4);
    assert!((downswing.timestamp - 3.1).abs() < 1e-9);
    assert!((downswing.elapsed_in_previous - 1.1).abs() < 1e-9);
}

#[test]
fn test_unmatched_frame_holds_phase() {
    let mut session = session();
    run(&mut session, &SLOW_SWING[..3]);
    assert_eq!(session.current_phase(), SwingPhase::Backswing);

    // Wrist far behind and dropping fast while still moving back
    let transitions = run(&mut session, &[(2.1, (-0.35, -0.05))]);
    assert!(transitions.is_empty());
    assert_eq!(session.current_phase(), SwingPhase::Backswing);
}

#[test]
fn test_custom_thresholds_change_classification() {
    let thresholds = PhaseThresholds {
        address_tolerance: 0.02,
        ..PhaseThresholds::default()
    };
    let mut classifier = PhaseClassifier::new(thresholds);
    let mut history = PoseHistory::new(EngineConfig::default().history.capacity);
    history.push(swing_frame(0, 0.0, (0.0, 0.05)));

    assert!(classifier.update(&history).is_none());
    assert_eq!(classifier.current_phase(), SwingPhase::Unknown);
}

#[test]
fn test_reset_returns_to_unknown() {
    let mut session = session();
    run(&mut session, &SLOW_SWING);
    session.reset();

    assert_eq!(session.current_phase(), SwingPhase::Unknown);
    assert!(session.phase_timing().is_empty());
    assert!(session.address_frame().is_none());
    assert!(session.clip().is_empty());
}
