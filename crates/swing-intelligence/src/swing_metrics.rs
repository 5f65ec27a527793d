// ABOUTME: Swing metrics aggregation: tempo, balance, swing-path deviation and overall score
// ABOUTME: Falls back to neutral degraded metrics when too few usable frames were seen
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Swing Metrics Aggregator
//!
//! - Tempo is backswing time over downswing time from [`PhaseTiming`].
//! - Balance compares the hip center with the foot center on the latest
//!   frame that shows both.
//! - Swing-path deviation is the signed angle between the lead-wrist path
//!   through the impact window and the target line, which runs
//!   perpendicular to the shoulder line at address.
//! - The overall score averages the three component scores.

use swing_core::constants::metrics::NEUTRAL_BALANCE;
use swing_core::{Landmark, PhaseTiming, Point2, PoseFrame, SwingMetrics, SwingPhase};
use tracing::debug;

use crate::config::engine::SwingMetricsConfig;
use crate::geometry;

/// Below this length a path or target vector is treated as zero
const MIN_PATH_LENGTH: f64 = 1e-9;

/// Forward direction used when no address frame was recorded
const DEFAULT_TARGET_LINE: Point2 = Point2::new(1.0, 0.0);

/// Computes [`SwingMetrics`] from phase timing and recorded frames
#[derive(Debug, Clone, Default)]
pub struct SwingMetricsAggregator {
    config: SwingMetricsConfig,
}

impl SwingMetricsAggregator {
    /// Create an aggregator with the given settings
    #[must_use]
    pub const fn new(config: SwingMetricsConfig) -> Self {
        Self { config }
    }

    /// Settings in use
    #[must_use]
    pub const fn config(&self) -> &SwingMetricsConfig {
        &self.config
    }

    /// Backswing / downswing duration ratio
    ///
    /// Returns the ideal tempo when the downswing time is zero or unknown.
    #[must_use]
    pub fn tempo(&self, timing: &PhaseTiming) -> f64 {
        let backswing = timing.duration(SwingPhase::Backswing).unwrap_or(0.0);
        match timing.duration(SwingPhase::Downswing) {
            Some(downswing) if downswing > 0.0 => {
                let ratio = backswing / downswing;
                if ratio.is_finite() {
                    ratio
                } else {
                    self.config.ideal_tempo
                }
            }
            _ => self.config.ideal_tempo,
        }
    }

    /// Lateral balance in `[0, 1]` from the latest frame with hips and ankles
    ///
    /// Neutral (`0.5`) when no such frame exists.
    #[must_use]
    pub fn balance<'a, I>(&self, frames: I) -> f64
    where
        I: IntoIterator<Item = &'a PoseFrame>,
        I::IntoIter: DoubleEndedIterator,
    {
        frames
            .into_iter()
            .rev()
            .find_map(|frame| Some((geometry::hip_center(frame)?, geometry::foot_center(frame)?)))
            .map_or(NEUTRAL_BALANCE, |(hips, feet)| {
                let sway = (hips.x - feet.x).abs();
                (1.0 - self.config.balance_sway_penalty * sway).clamp(0.0, 1.0)
            })
    }

    /// Signed swing-path deviation in degrees
    ///
    /// Zero when the impact window is shorter than the configured minimum or
    /// the lead wrist does not move through it.
    #[must_use]
    pub fn swing_path_deviation(
        &self,
        impact_window: &[&PoseFrame],
        address_frame: Option<&PoseFrame>,
    ) -> f64 {
        if impact_window.len() < self.config.min_impact_frames {
            debug!(
                window = impact_window.len(),
                required = self.config.min_impact_frames,
                "Impact window too short for swing path"
            );
            return 0.0;
        }

        let mut wrist_positions = impact_window
            .iter()
            .filter_map(|frame| frame.position(Landmark::LEAD_WRIST));
        let (Some(first), Some(last)) = (wrist_positions.next(), wrist_positions.last()) else {
            return 0.0;
        };

        signed_deviation(target_line(address_frame), last - first)
    }

    /// Mean of tempo, balance and path scores, each clamped to `[0, 100]`
    #[must_use]
    pub fn overall_score(&self, tempo: f64, balance: f64, deviation: f64) -> f64 {
        let tempo_score = self
            .config
            .tempo_score_penalty
            .mul_add(-(tempo - self.config.ideal_tempo).abs(), 100.0)
            .clamp(0.0, 100.0);
        let balance_score = (balance * 100.0).clamp(0.0, 100.0);
        let path_score = self
            .config
            .path_score_penalty
            .mul_add(-deviation.abs(), 100.0)
            .clamp(0.0, 100.0);
        (tempo_score + balance_score + path_score) / 3.0
    }

    /// Compute every metric for a clip
    ///
    /// `frames` is the recorded clip, oldest first. Returns
    /// [`SwingMetrics::degraded`] when fewer than the configured minimum of
    /// usable frames were recorded.
    #[must_use]
    pub fn aggregate(
        &self,
        timing: &PhaseTiming,
        frames: &[PoseFrame],
        impact_window: &[&PoseFrame],
        address_frame: Option<&PoseFrame>,
    ) -> SwingMetrics {
        let usable = frames.iter().filter(|frame| frame.is_usable()).count();
        if usable < self.config.min_valid_frames {
            debug!(
                usable,
                required = self.config.min_valid_frames,
                "Not enough usable frames, returning degraded metrics"
            );
            return SwingMetrics::degraded();
        }

        let tempo = self.tempo(timing);
        let balance = self.balance(frames);
        let swing_path_deviation = self.swing_path_deviation(impact_window, address_frame);
        let overall_score = self.overall_score(tempo, balance, swing_path_deviation);

        SwingMetrics {
            tempo,
            balance,
            swing_path_deviation,
            overall_score,
            degraded: false,
        }
    }
}

/// Unit target line perpendicular to the shoulder line of the address frame
///
/// Defaults to forward `(1, 0)` when no address frame or shoulders are known.
#[must_use]
pub fn target_line(address_frame: Option<&PoseFrame>) -> Point2 {
    let shoulders = address_frame.and_then(|frame| {
        Some(frame.position(Landmark::RightShoulder)? - frame.position(Landmark::LeftShoulder)?)
    });
    let Some(shoulders) = shoulders else {
        return DEFAULT_TARGET_LINE;
    };

    let perpendicular = Point2::new(-shoulders.y, shoulders.x);
    let length = perpendicular.length();
    if length < MIN_PATH_LENGTH {
        return DEFAULT_TARGET_LINE;
    }
    perpendicular * (1.0 / length)
}

/// Angle from `target` to `path` in degrees, negative when `path` turns clockwise
#[must_use]
pub fn signed_deviation(target: Point2, path: Point2) -> f64 {
    let magnitudes = target.length() * path.length();
    if magnitudes < MIN_PATH_LENGTH {
        return 0.0;
    }
    let angle = (target.dot(path) / magnitudes)
        .clamp(-1.0, 1.0)
        .acos()
        .to_degrees();
    if target.cross(path) < 0.0 {
        -angle
    } else {
        angle
    }
}
