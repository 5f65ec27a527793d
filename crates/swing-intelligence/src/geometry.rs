// ABOUTME: Biomechanical geometry over pose frames: line, spine and three-point joint angles
// ABOUTME: Also body centers, weight distribution and a per-frame joint-angle snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Biomechanical Angle Calculator
//!
//! Pure functions over one frame. Every function returns `None` when a
//! required landmark is the sentinel and never returns NaN. Angles are in
//! degrees. Image coordinates are used as-is (y grows downward) except for
//! the spine angle, which measures lean from image vertical.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use swing_core::{Landmark, Point2, PoseFrame, TrackedMetric};

/// Below this length a vector is treated as zero
const MIN_VECTOR_LENGTH: f64 = 1e-9;

/// Absolute angle of the line from `from` to `to`, in `[0, 180]`
#[must_use]
pub fn line_angle(from: Point2, to: Point2) -> f64 {
    let delta = to - from;
    delta.y.atan2(delta.x).to_degrees().abs()
}

/// Angle of the left-hip to right-hip line
#[must_use]
pub fn hip_line_angle(frame: &PoseFrame) -> Option<f64> {
    let left = frame.position(Landmark::LeftHip)?;
    let right = frame.position(Landmark::RightHip)?;
    Some(line_angle(left, right))
}

/// Angle of the left-shoulder to right-shoulder line
#[must_use]
pub fn shoulder_line_angle(frame: &PoseFrame) -> Option<f64> {
    let left = frame.position(Landmark::LeftShoulder)?;
    let right = frame.position(Landmark::RightShoulder)?;
    Some(line_angle(left, right))
}

/// Lean of the mid-hip to nose line from vertical; 0 when upright
#[must_use]
pub fn spine_angle(frame: &PoseFrame) -> Option<f64> {
    let nose = frame.position(Landmark::Nose)?;
    let mid_hip = hip_center(frame)?;
    let dx = nose.x - mid_hip.x;
    let dy = mid_hip.y - nose.y;
    Some(dx.atan2(dy).to_degrees().abs())
}

/// Angle at `vertex` between the rays to `a` and `c`, in `[0, 180]`
///
/// A zero-length ray yields `0.0`.
#[must_use]
pub fn joint_angle(a: Point2, vertex: Point2, c: Point2) -> f64 {
    let v1 = a - vertex;
    let v2 = c - vertex;
    let magnitudes = v1.length() * v2.length();
    if magnitudes < MIN_VECTOR_LENGTH {
        return 0.0;
    }
    let cos_angle = (v1.dot(v2) / magnitudes).clamp(-1.0, 1.0);
    cos_angle.acos().to_degrees()
}

fn frame_joint_angle(
    frame: &PoseFrame,
    a: Landmark,
    vertex: Landmark,
    c: Landmark,
) -> Option<f64> {
    Some(joint_angle(
        frame.position(a)?,
        frame.position(vertex)?,
        frame.position(c)?,
    ))
}

/// Left elbow flexion (shoulder, elbow, wrist)
#[must_use]
pub fn left_elbow_angle(frame: &PoseFrame) -> Option<f64> {
    frame_joint_angle(
        frame,
        Landmark::LeftShoulder,
        Landmark::LeftElbow,
        Landmark::LeftWrist,
    )
}

/// Right elbow flexion (shoulder, elbow, wrist)
#[must_use]
pub fn right_elbow_angle(frame: &PoseFrame) -> Option<f64> {
    frame_joint_angle(
        frame,
        Landmark::RightShoulder,
        Landmark::RightElbow,
        Landmark::RightWrist,
    )
}

/// Left knee flexion (hip, knee, ankle)
#[must_use]
pub fn left_knee_angle(frame: &PoseFrame) -> Option<f64> {
    frame_joint_angle(frame, Landmark::LeftHip, Landmark::LeftKnee, Landmark::LeftAnkle)
}

/// Right knee flexion (hip, knee, ankle)
#[must_use]
pub fn right_knee_angle(frame: &PoseFrame) -> Option<f64> {
    frame_joint_angle(
        frame,
        Landmark::RightHip,
        Landmark::RightKnee,
        Landmark::RightAnkle,
    )
}

/// Rotational separation between the shoulder and hip lines
#[must_use]
pub fn hip_shoulder_separation(frame: &PoseFrame) -> Option<f64> {
    Some((shoulder_line_angle(frame)? - hip_line_angle(frame)?).abs())
}

fn center(frame: &PoseFrame, left: Landmark, right: Landmark) -> Option<Point2> {
    Some(frame.position(left)?.midpoint(frame.position(right)?))
}

/// Midpoint of the shoulders
#[must_use]
pub fn shoulder_center(frame: &PoseFrame) -> Option<Point2> {
    center(frame, Landmark::LeftShoulder, Landmark::RightShoulder)
}

/// Midpoint of the hips
#[must_use]
pub fn hip_center(frame: &PoseFrame) -> Option<Point2> {
    center(frame, Landmark::LeftHip, Landmark::RightHip)
}

/// Midpoint of the ankles
#[must_use]
pub fn foot_center(frame: &PoseFrame) -> Option<Point2> {
    center(frame, Landmark::LeftAnkle, Landmark::RightAnkle)
}

/// Lead/trail weight split in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightDistribution {
    /// Percentage on the lead (left) foot
    pub front: f64,
    /// Percentage on the trail (right) foot
    pub back: f64,
}

impl Default for WeightDistribution {
    fn default() -> Self {
        Self {
            front: 50.0,
            back: 50.0,
        }
    }
}

impl WeightDistribution {
    /// Estimate from hip-center position between the ankles
    ///
    /// Falls back to an even split when hips or ankles are unavailable or
    /// the ankles are horizontally coincident.
    #[must_use]
    pub fn from_frame(frame: &PoseFrame) -> Self {
        let (Some(hips), Some(left_ankle), Some(right_ankle)) = (
            hip_center(frame),
            frame.position(Landmark::LeftAnkle),
            frame.position(Landmark::RightAnkle),
        ) else {
            return Self::default();
        };

        let span = (right_ankle.x - left_ankle.x).abs();
        if span < MIN_VECTOR_LENGTH {
            return Self::default();
        }

        let front = ((hips.x - left_ankle.x).abs() / span * 100.0).clamp(0.0, 100.0);
        Self {
            front,
            back: 100.0 - front,
        }
    }
}

/// Every tracked angle measured on one frame
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct JointAngles {
    /// Hip line angle
    pub hip: Option<f64>,
    /// Shoulder line angle
    pub shoulder: Option<f64>,
    /// Spine lean from vertical
    pub spine: Option<f64>,
    /// Left elbow flexion
    pub left_elbow: Option<f64>,
    /// Right elbow flexion
    pub right_elbow: Option<f64>,
    /// Left knee flexion
    pub left_knee: Option<f64>,
    /// Right knee flexion
    pub right_knee: Option<f64>,
    /// Hip/shoulder separation
    pub hip_shoulder_separation: Option<f64>,
}

impl JointAngles {
    /// Measure every tracked angle on a frame
    #[must_use]
    pub fn from_frame(frame: &PoseFrame) -> Self {
        Self {
            hip: hip_line_angle(frame),
            shoulder: shoulder_line_angle(frame),
            spine: spine_angle(frame),
            left_elbow: left_elbow_angle(frame),
            right_elbow: right_elbow_angle(frame),
            left_knee: left_knee_angle(frame),
            right_knee: right_knee_angle(frame),
            hip_shoulder_separation: hip_shoulder_separation(frame),
        }
    }

    /// Value for one tracked metric
    #[must_use]
    pub const fn get(&self, metric: TrackedMetric) -> Option<f64> {
        match metric {
            TrackedMetric::HipAngle => self.hip,
            TrackedMetric::ShoulderAngle => self.shoulder,
            TrackedMetric::SpineAngle => self.spine,
            TrackedMetric::LeftElbowAngle => self.left_elbow,
            TrackedMetric::RightElbowAngle => self.right_elbow,
            TrackedMetric::LeftKneeAngle => self.left_knee,
            TrackedMetric::RightKneeAngle => self.right_knee,
            TrackedMetric::HipShoulderSeparation => self.hip_shoulder_separation,
        }
    }

    /// Measure every frame of a clip once, in parallel, keeping frame order
    #[must_use]
    pub fn measure_clip(frames: &[PoseFrame]) -> Vec<Self> {
        frames.par_iter().map(Self::from_frame).collect()
    }

    /// Valid values of one metric across measured frames, in frame order
    #[must_use]
    pub fn series(angles: &[Self], metric: TrackedMetric) -> Vec<f64> {
        angles.iter().filter_map(|a| a.get(metric)).collect()
    }
}
