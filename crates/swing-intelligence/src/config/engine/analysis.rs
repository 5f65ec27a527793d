// ABOUTME: Analysis configuration for swing metrics aggregation and progression trends
// ABOUTME: Configures tempo/path scoring penalties, frame minimums and trend stability thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use serde::{Deserialize, Serialize};
use swing_core::constants::{metrics, trend};

/// Swing metrics aggregation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SwingMetricsConfig {
    /// Tempo ratio treated as ideal and used when downswing time is unknown
    pub ideal_tempo: f64,
    /// Usable frames required before metrics are computed
    pub min_valid_frames: usize,
    /// Impact-window frames required for a swing-path estimate
    pub min_impact_frames: usize,
    /// Balance lost per unit of hip/foot lateral offset
    pub balance_sway_penalty: f64,
    /// Tempo score points lost per unit of tempo error
    pub tempo_score_penalty: f64,
    /// Path score points lost per degree of deviation
    pub path_score_penalty: f64,
}

/// Progression trend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TrendConfig {
    /// Absolute first/last-third change below which a metric is stable
    pub stable_change_threshold: f64,
    /// Valid values required before a trend is classified
    pub min_data_points: usize,
}

impl Default for SwingMetricsConfig {
    fn default() -> Self {
        Self {
            ideal_tempo: metrics::IDEAL_TEMPO_RATIO,
            min_valid_frames: metrics::MIN_VALID_FRAMES,
            min_impact_frames: metrics::MIN_IMPACT_FRAMES,
            balance_sway_penalty: metrics::BALANCE_SWAY_PENALTY,
            tempo_score_penalty: metrics::TEMPO_SCORE_PENALTY,
            path_score_penalty: metrics::PATH_SCORE_PENALTY,
        }
    }
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            stable_change_threshold: trend::STABLE_CHANGE_THRESHOLD,
            min_data_points: trend::MIN_DATA_POINTS,
        }
    }
}
