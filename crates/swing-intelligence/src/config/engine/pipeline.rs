// ABOUTME: Frame-ingestion configuration for provider gating, smoothing, history and velocity
// ABOUTME: Defaults come from the swing-core constants and stay overridable
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Ingestion Configuration
//!
//! Settings for everything that happens before a frame reaches the phase
//! classifier: landmark acceptance, temporal smoothing, buffering and the
//! velocity threshold that delimits the impact window.

use serde::{Deserialize, Serialize};
use swing_core::constants::{history, provider, smoothing, velocity};

/// Pose-provider acceptance settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Minimum `(visibility + presence) / 2`
    pub min_combined_confidence: f64,
    /// Minimum visibility score
    pub min_visibility: f64,
    /// Minimum presence score
    pub min_presence: f64,
    /// Per-frame budget for one provider call in milliseconds
    pub frame_timeout_ms: u64,
}

/// Temporal smoothing filter settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Disable to pass accepted keypoints through unchanged
    pub enabled: bool,
    /// Raw samples kept per landmark
    pub max_samples: usize,
    /// Confidence above which a sample is treated as high quality
    pub high_confidence_threshold: f64,
    /// Blend factor toward history for high-confidence samples
    pub light_blend_factor: f64,
    /// Blend factor toward history for other samples
    pub heavy_blend_factor: f64,
    /// Weight multiplier for high-confidence historical samples
    pub high_confidence_weight_boost: f64,
}

/// Pose history settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Frames kept in the live history buffer
    pub capacity: usize,
    /// Frames kept for whole-clip analysis
    pub clip_capacity: usize,
}

/// Velocity estimation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VelocityConfig {
    /// Lead-wrist speed above which a frame is part of the impact window
    pub impact_speed_threshold: f64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            min_combined_confidence: provider::MIN_COMBINED_CONFIDENCE,
            min_visibility: provider::MIN_VISIBILITY,
            min_presence: provider::MIN_PRESENCE,
            frame_timeout_ms: provider::FRAME_TIMEOUT_MS,
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_samples: smoothing::MAX_SAMPLES,
            high_confidence_threshold: smoothing::HIGH_CONFIDENCE_THRESHOLD,
            light_blend_factor: smoothing::LIGHT_BLEND_FACTOR,
            heavy_blend_factor: smoothing::HEAVY_BLEND_FACTOR,
            high_confidence_weight_boost: smoothing::HIGH_CONFIDENCE_WEIGHT_BOOST,
        }
    }
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: history::DEFAULT_CAPACITY,
            clip_capacity: history::DEFAULT_CLIP_CAPACITY,
        }
    }
}

impl Default for VelocityConfig {
    fn default() -> Self {
        Self {
            impact_speed_threshold: velocity::IMPACT_SPEED_THRESHOLD,
        }
    }
}
