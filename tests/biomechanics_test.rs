// ABOUTME: Integration tests for per-frame joint geometry and clip biomechanics summaries
// ABOUTME: Covers joint angles, spine lean, weight distribution and per-joint statistics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use swing_analyzer::{
    JointAngles, Landmark, Point2, PoseFrame, TrackedMetric, WeightDistribution,
};
use swing_intelligence::{geometry, summarize};

fn bent_arm_frame() -> PoseFrame {
    PoseFrame::builder(0, 0.0)
        .landmark(Landmark::LeftShoulder, 0.4, 0.3, 0.9)
        .landmark(Landmark::LeftElbow, 0.4, 0.5, 0.9)
        .landmark(Landmark::LeftWrist, 0.6, 0.5, 0.9)
        .landmark(Landmark::LeftHip, 0.45, 0.6, 0.9)
        .landmark(Landmark::LeftKnee, 0.45, 0.75, 0.9)
        .landmark(Landmark::LeftAnkle, 0.45, 0.9, 0.9)
        .build()
}

#[test]
fn test_elbow_right_angle_and_straight_knee() {
    let angles = JointAngles::from_frame(&bent_arm_frame());
    assert!((angles.left_elbow.unwrap() - 90.0).abs() < 1e-9);
    assert!((angles.left_knee.unwrap() - 180.0).abs() < 1e-9);
    assert!(angles.right_elbow.is_none());
    assert!(angles.right_knee.is_none());
    assert!(angles.hip.is_none());
}

#[test]
fn test_joint_angle_with_coincident_points_is_zero() {
    let p = Point2::new(0.5, 0.5);
    assert!(geometry::joint_angle(p, p, Point2::new(0.7, 0.5)).abs() < f64::EPSILON);
}

#[test]
fn test_spine_lean_from_vertical() {
    let upright = common::swing_frame(0, 0.0, (0.0, 0.05));
    assert!(geometry::spine_angle(&upright).unwrap().abs() < 1e-9);

    let leaning = PoseFrame::builder(0, 0.0)
        .landmark(Landmark::Nose, 0.6, 0.1, 0.9)
        .landmark(Landmark::LeftHip, 0.45, 0.6, 0.9)
        .landmark(Landmark::RightHip, 0.55, 0.6, 0.9)
        .build();
    let expected = 0.1f64.atan2(0.5).to_degrees();
    assert!((geometry::spine_angle(&leaning).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_tilted_shoulders_produce_separation() {
    let frame = PoseFrame::builder(0, 0.0)
        .landmark(Landmark::LeftShoulder, 0.4, 0.3, 0.9)
        .landmark(Landmark::RightShoulder, 0.6, 0.2, 0.9)
        .landmark(Landmark::LeftHip, 0.45, 0.6, 0.9)
        .landmark(Landmark::RightHip, 0.55, 0.6, 0.9)
        .build();
    let shoulder = geometry::shoulder_line_angle(&frame).unwrap();
    let expected = 0.1f64.atan2(0.2).to_degrees();
    assert!((shoulder - expected).abs() < 1e-9);
    assert!((geometry::hip_shoulder_separation(&frame).unwrap() - expected).abs() < 1e-9);
}

#[test]
fn test_weight_distribution_centered_and_shifted() {
    let centered = common::swing_frame(0, 0.0, (0.0, 0.05));
    let weight = WeightDistribution::from_frame(&centered);
    assert!((weight.front - 50.0).abs() < 1e-9);
    assert!((weight.back - 50.0).abs() < 1e-9);

    let shifted = PoseFrame::builder(0, 0.0)
        .landmark(Landmark::LeftHip, 0.4, 0.6, 0.9)
        .landmark(Landmark::RightHip, 0.5, 0.6, 0.9)
        .landmark(Landmark::LeftAnkle, 0.4, 0.9, 0.9)
        .landmark(Landmark::RightAnkle, 0.6, 0.9, 0.9)
        .build();
    let weight = WeightDistribution::from_frame(&shifted);
    assert!((weight.front - 25.0).abs() < 1e-9);
    assert!((weight.front + weight.back - 100.0).abs() < 1e-9);
}

#[test]
fn test_weight_distribution_defaults_without_ankles() {
    let weight = WeightDistribution::from_frame(&bent_arm_frame());
    assert_eq!(weight, WeightDistribution::default());
}

#[test]
fn test_summary_statistics_per_joint() {
    let frames: Vec<PoseFrame> = [0.0, 0.1, 0.2]
        .iter()
        .enumerate()
        .map(|(i, rise)| {
            PoseFrame::builder(i as u64, i as f64 / 30.0)
                .landmark(Landmark::LeftShoulder, 0.4, 0.3, 0.9)
                .landmark(Landmark::RightShoulder, 0.6, 0.3 - rise, 0.9)
                .build()
        })
        .collect();

    let summary = summarize(&frames);
    assert_eq!(summary.frame_count, 3);
    assert!(summary.joint(TrackedMetric::LeftElbowAngle).is_none());

    let shoulders = summary.joint(TrackedMetric::ShoulderAngle).unwrap();
    assert_eq!(shoulders.series.len(), 3);
    assert!((shoulders.peak - 45.0).abs() < 1e-9);
    let mean = shoulders.series.iter().sum::<f64>() / 3.0;
    assert!((shoulders.average - mean).abs() < 1e-9);
    assert!(shoulders.consistency > 0.0 && shoulders.consistency < 1.0);
}

#[test]
fn test_empty_clip_summary() {
    let summary = summarize(&[]);
    assert_eq!(summary.frame_count, 0);
    assert!(summary.joints.is_empty());
}

#[test]
fn test_joint_angle_extremes() {
    let vertex = Point2::new(0.5, 0.5);
    let straight = geometry::joint_angle(Point2::new(0.3, 0.5), vertex, Point2::new(0.7, 0.5));
    assert!((straight - 180.0).abs() < 1e-9);

    let folded = geometry::joint_angle(Point2::new(0.7, 0.5), vertex, Point2::new(0.9, 0.5));
    assert!(folded.abs() < 1e-6);
}

#[test]
fn test_sentinel_landmarks_are_unavailable() {
    let frame = PoseFrame::builder(0, 0.0).build();
    let angles = JointAngles::from_frame(&frame);
    for metric in TrackedMetric::ALL {
        assert!(angles.get(metric).is_none(), "{metric} available");
    }
    assert!(geometry::shoulder_center(&frame).is_none());
    assert!(geometry::spine_angle(&frame).is_none());
}
