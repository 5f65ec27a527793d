// ABOUTME: Output records consumed by reporting and prompt-building layers
// ABOUTME: Swing metrics, per-joint biomechanics summaries and per-metric trend results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Plain data records produced by the engine.
//!
//! Every "confidence" and "consistency" figure in this module is a heuristic
//! signal-quality proxy, not a calibrated probability or a statistical
//! confidence interval.

use crate::constants::metrics::{IDEAL_TEMPO_RATIO, NEUTRAL_BALANCE};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Headline swing metrics
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwingMetrics {
    /// Backswing duration divided by downswing duration
    pub tempo: f64,
    /// Lateral stability in `[0,1]`, 1 meaning hips centered over feet
    pub balance: f64,
    /// Signed club-path angle against the target line in degrees.
    /// Negative is inside-out, positive is outside-in.
    pub swing_path_deviation: f64,
    /// Mean of the tempo, balance and path sub-scores in `[0,100]`
    pub overall_score: f64,
    /// True when too few usable frames existed and neutral values were substituted
    pub degraded: bool,
}

impl SwingMetrics {
    /// Neutral values reported when a clip has too few usable frames
    #[must_use]
    pub const fn degraded() -> Self {
        Self {
            tempo: IDEAL_TEMPO_RATIO,
            balance: NEUTRAL_BALANCE,
            swing_path_deviation: 0.0,
            overall_score: 0.0,
            degraded: true,
        }
    }
}

/// Per-frame quantities tracked across a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackedMetric {
    /// Hip line angle against horizontal
    HipAngle,
    /// Shoulder line angle against horizontal
    ShoulderAngle,
    /// Spine tilt from vertical
    SpineAngle,
    /// Left shoulder-elbow-wrist angle
    LeftElbowAngle,
    /// Right shoulder-elbow-wrist angle
    RightElbowAngle,
    /// Left hip-knee-ankle angle
    LeftKneeAngle,
    /// Right hip-knee-ankle angle
    RightKneeAngle,
    /// Difference between shoulder and hip line angles
    HipShoulderSeparation,
}

impl TrackedMetric {
    /// Every tracked metric
    pub const ALL: [Self; 8] = [
        Self::HipAngle,
        Self::ShoulderAngle,
        Self::SpineAngle,
        Self::LeftElbowAngle,
        Self::RightElbowAngle,
        Self::LeftKneeAngle,
        Self::RightKneeAngle,
        Self::HipShoulderSeparation,
    ];

    /// Stable snake-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HipAngle => "hip_angle",
            Self::ShoulderAngle => "shoulder_angle",
            Self::SpineAngle => "spine_angle",
            Self::LeftElbowAngle => "left_elbow_angle",
            Self::RightElbowAngle => "right_elbow_angle",
            Self::LeftKneeAngle => "left_knee_angle",
            Self::RightKneeAngle => "right_knee_angle",
            Self::HipShoulderSeparation => "hip_shoulder_separation",
        }
    }
}

impl fmt::Display for TrackedMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregate of one joint metric over a frame set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JointSummary {
    /// Valid per-frame values in frame order
    pub series: Vec<f64>,
    /// Mean of the series
    pub average: f64,
    /// Largest value of the series
    pub peak: f64,
    /// `1 - stddev/max`, clamped to `[0,1]`
    pub consistency: f64,
}

/// Per-joint summaries over a full frame set
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BiomechanicsSummary {
    /// Frames the summary was computed from
    pub frame_count: usize,
    /// One summary per tracked metric
    pub joints: BTreeMap<TrackedMetric, JointSummary>,
}

impl BiomechanicsSummary {
    /// Summary for one metric
    #[must_use]
    pub fn joint(&self, metric: TrackedMetric) -> Option<&JointSummary> {
        self.joints.get(&metric)
    }
}

/// Direction of a metric across a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// First and last thirds differ by less than the stability threshold
    Stable,
    /// Last third is higher
    Increasing,
    /// Last third is lower
    Decreasing,
    /// Fewer valid values than required
    InsufficientData,
}

/// Trend of one metric across a clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendResult {
    /// Metric this trend describes
    pub metric: TrackedMetric,
    /// Classified direction
    pub trend: TrendDirection,
    /// Change per second of clip time
    pub slope: f64,
    /// Consistency proxy in `[0,1]`
    pub confidence: f64,
    /// Last-third average minus first-third average
    pub change_amount: f64,
    /// Valid per-frame values in frame order
    pub series: Vec<f64>,
}
