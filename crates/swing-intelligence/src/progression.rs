// ABOUTME: Frame-progression trend analysis for tracked joint angles over a clip
// ABOUTME: Compares first-third and last-third averages and scores series consistency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Progression / Trend Analyzer
//!
//! For each tracked metric the valid values across the clip form a series.
//! The trend compares the average of its first third with the average of
//! its last third; the slope spreads that change over the clip duration.
//! `confidence` is the consistency heuristic from [`crate::statistics`].

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use swing_core::{PoseFrame, TrackedMetric, TrendDirection, TrendResult};
use tracing::debug;

use crate::config::engine::TrendConfig;
use crate::geometry::JointAngles;
use crate::statistics;

/// Trend results for every tracked metric of one clip
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProgressionReport {
    /// Seconds between the first and last frame
    pub clip_duration: f64,
    /// One result per tracked metric
    pub trends: BTreeMap<TrackedMetric, TrendResult>,
}

impl ProgressionReport {
    /// Result for one metric
    #[must_use]
    pub fn trend(&self, metric: TrackedMetric) -> Option<&TrendResult> {
        self.trends.get(&metric)
    }
}

/// Classifies per-metric trends across a clip
#[derive(Debug, Clone, Default)]
pub struct ProgressionAnalyzer {
    config: TrendConfig,
}

impl ProgressionAnalyzer {
    /// Create an analyzer with the given settings
    #[must_use]
    pub const fn new(config: TrendConfig) -> Self {
        Self { config }
    }

    /// Valid values of one metric across the frames, in frame order
    #[must_use]
    pub fn extract_series(frames: &[PoseFrame], metric: TrackedMetric) -> Vec<f64> {
        frames
            .iter()
            .filter_map(|frame| JointAngles::from_frame(frame).get(metric))
            .collect()
    }

    /// Seconds between the first and last frame; zero for fewer than two frames
    #[must_use]
    pub fn clip_duration(frames: &[PoseFrame]) -> f64 {
        match (frames.first(), frames.last()) {
            (Some(first), Some(last)) => (last.timestamp() - first.timestamp()).max(0.0),
            _ => 0.0,
        }
    }

    /// Classify a prepared series
    #[must_use]
    pub fn analyze_series(
        &self,
        metric: TrackedMetric,
        series: Vec<f64>,
        clip_duration: f64,
    ) -> TrendResult {
        let n = series.len();
        if n < self.config.min_data_points {
            return TrendResult {
                metric,
                trend: TrendDirection::InsufficientData,
                slope: 0.0,
                confidence: 0.0,
                change_amount: 0.0,
                series,
            };
        }

        let third = (n / 3).max(1);
        let first_average = statistics::mean(&series[..third]);
        let last_average = statistics::mean(&series[n - third..]);
        let change_amount = last_average - first_average;

        let trend = if change_amount.abs() < self.config.stable_change_threshold {
            TrendDirection::Stable
        } else if change_amount > 0.0 {
            TrendDirection::Increasing
        } else {
            TrendDirection::Decreasing
        };

        let slope = if clip_duration > 0.0 {
            change_amount / clip_duration
        } else {
            0.0
        };

        TrendResult {
            metric,
            trend,
            slope,
            confidence: statistics::consistency(&series),
            change_amount,
            series,
        }
    }

    /// Trend of one metric across a clip
    #[must_use]
    pub fn analyze_metric(&self, frames: &[PoseFrame], metric: TrackedMetric) -> TrendResult {
        self.analyze_series(
            metric,
            Self::extract_series(frames, metric),
            Self::clip_duration(frames),
        )
    }

    /// Trends for every tracked metric, computed in parallel
    #[must_use]
    pub fn analyze_clip(&self, frames: &[PoseFrame]) -> ProgressionReport {
        self.analyze_angles(
            &JointAngles::measure_clip(frames),
            Self::clip_duration(frames),
        )
    }

    /// Trends over angles already measured with [`JointAngles::measure_clip`]
    #[must_use]
    pub fn analyze_angles(
        &self,
        angles: &[JointAngles],
        clip_duration: f64,
    ) -> ProgressionReport {
        let trends: BTreeMap<TrackedMetric, TrendResult> = TrackedMetric::ALL
            .par_iter()
            .map(|&metric| {
                let series = JointAngles::series(angles, metric);
                (metric, self.analyze_series(metric, series, clip_duration))
            })
            .collect();

        debug!(
            frames = angles.len(),
            clip_duration,
            "Progression analysis complete"
        );

        ProgressionReport {
            clip_duration,
            trends,
        }
    }
}
