// ABOUTME: Engine configuration for the swing analysis pipeline
// ABOUTME: Orchestrates domain-specific configs and provides unified validation and loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Engine Configuration Module
//!
//! Type-safe configuration for every hand-tuned constant in the engine.
//!
//! # Module Structure
//!
//! - `pipeline` - provider gating, smoothing, history and velocity
//! - `phase` - swing-phase classifier thresholds
//! - `analysis` - swing metrics and progression trends
//! - `error` - validation and parsing errors
//!
//! Defaults reproduce the tuned values. `EngineConfig::load` applies
//! environment overrides on top and validates the result.
//!
//! # Environment Overrides
//!
//! Every field can be overridden. The variable name is `SWING_`, the section
//! name and the field name, upper-cased and joined with `_`:
//!
//! - `SWING_PROVIDER_FRAME_TIMEOUT_MS` sets `provider.frame_timeout_ms`
//! - `SWING_SMOOTHING_HIGH_CONFIDENCE_WEIGHT_BOOST` sets `smoothing.high_confidence_weight_boost`
//! - `SWING_PHASE_TAKEAWAY_MAX_RISE` sets `phase.takeaway_max_rise`
//! - `SWING_METRICS_PATH_SCORE_PENALTY` sets `metrics.path_score_penalty`

pub mod analysis;
pub mod error;
pub mod phase;
pub mod pipeline;

pub use analysis::{SwingMetricsConfig, TrendConfig};
pub use error::ConfigError;
pub use phase::PhaseThresholds;
pub use pipeline::{HistoryConfig, ProviderConfig, SmoothingConfig, VelocityConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ENGINE_CONFIG: OnceLock<EngineConfig> = OnceLock::new();

/// Main engine configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Pose-provider acceptance thresholds and per-frame timeout
    pub provider: ProviderConfig,
    /// Temporal smoothing filter
    pub smoothing: SmoothingConfig,
    /// Pose history and clip buffers
    pub history: HistoryConfig,
    /// Velocity estimation
    pub velocity: VelocityConfig,
    /// Swing-phase classifier thresholds
    pub phase: PhaseThresholds,
    /// Swing metrics aggregation
    pub metrics: SwingMetricsConfig,
    /// Progression trend analysis
    pub trend: TrendConfig,
}

impl EngineConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        ENGINE_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load engine config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting found
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_provider()?;
        self.validate_smoothing()?;
        self.validate_buffers()?;
        self.validate_phase()?;
        self.validate_analysis()
    }

    fn validate_provider(&self) -> Result<(), ConfigError> {
        Self::validate_unit_interval(
            self.provider.min_combined_confidence,
            "provider.min_combined_confidence must be within [0, 1]",
        )?;
        Self::validate_unit_interval(
            self.provider.min_visibility,
            "provider.min_visibility must be within [0, 1]",
        )?;
        Self::validate_unit_interval(
            self.provider.min_presence,
            "provider.min_presence must be within [0, 1]",
        )?;
        if self.provider.frame_timeout_ms == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "provider.frame_timeout_ms must be positive",
            ));
        }
        Ok(())
    }

    fn validate_smoothing(&self) -> Result<(), ConfigError> {
        let smoothing = &self.smoothing;
        if smoothing.max_samples == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "smoothing.max_samples must be at least 1",
            ));
        }
        Self::validate_unit_interval(
            smoothing.light_blend_factor,
            "smoothing.light_blend_factor must be within [0, 1]",
        )?;
        Self::validate_unit_interval(
            smoothing.heavy_blend_factor,
            "smoothing.heavy_blend_factor must be within [0, 1]",
        )?;
        Self::validate_unit_interval(
            smoothing.high_confidence_threshold,
            "smoothing.high_confidence_threshold must be within [0, 1]",
        )?;
        if smoothing.high_confidence_weight_boost <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "smoothing.high_confidence_weight_boost must be positive",
            ));
        }
        Ok(())
    }

    fn validate_buffers(&self) -> Result<(), ConfigError> {
        if self.history.capacity < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "history.capacity must hold at least 2 frames",
            ));
        }
        if self.history.clip_capacity < self.history.capacity {
            return Err(ConfigError::InvalidRange(
                "history.clip_capacity must be >= history.capacity",
            ));
        }
        if self.velocity.impact_speed_threshold <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "velocity.impact_speed_threshold must be positive",
            ));
        }
        Ok(())
    }

    fn validate_phase(&self) -> Result<(), ConfigError> {
        let phase = &self.phase;
        if phase
            .named_values()
            .iter()
            .any(|(_, value)| !value.is_finite() || *value <= 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(
                "phase thresholds must be positive and finite",
            ));
        }
        if phase.backswing_min_offset_x < phase.takeaway_min_offset_x {
            return Err(ConfigError::InvalidRange(
                "phase.takeaway_min_offset_x must be <= phase.backswing_min_offset_x",
            ));
        }
        if phase.finish_min_offset_x < phase.follow_through_min_offset_x {
            return Err(ConfigError::InvalidRange(
                "phase.follow_through_min_offset_x must be <= phase.finish_min_offset_x",
            ));
        }
        Ok(())
    }

    fn validate_analysis(&self) -> Result<(), ConfigError> {
        let metrics = &self.metrics;
        if metrics.ideal_tempo <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "metrics.ideal_tempo must be positive",
            ));
        }
        if metrics.min_impact_frames < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "metrics.min_impact_frames must be at least 2",
            ));
        }
        let penalties = [
            metrics.balance_sway_penalty,
            metrics.tempo_score_penalty,
            metrics.path_score_penalty,
        ];
        if penalties.iter().any(|penalty| *penalty < 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "metrics penalties must not be negative",
            ));
        }
        if self.trend.min_data_points < 2 {
            return Err(ConfigError::ValueOutOfRange(
                "trend.min_data_points must be at least 2",
            ));
        }
        if self.trend.stable_change_threshold < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend.stable_change_threshold must not be negative",
            ));
        }
        Ok(())
    }

    fn validate_unit_interval(value: f64, message: &'static str) -> Result<(), ConfigError> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::ValueOutOfRange(message))
        }
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        match env::var(env_var_name) {
            Ok(val) => {
                *target = val
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
                Ok(())
            }
            Err(env::VarError::NotPresent) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply environment variable overrides for every section
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        self.apply_pipeline_overrides()?;
        self.apply_phase_overrides()?;
        self.apply_analysis_overrides()?;
        Ok(self)
    }

    fn apply_pipeline_overrides(&mut self) -> Result<(), ConfigError> {
        let provider = &mut self.provider;
        Self::apply_env_var(
            "SWING_PROVIDER_MIN_COMBINED_CONFIDENCE",
            &mut provider.min_combined_confidence,
        )?;
        Self::apply_env_var("SWING_PROVIDER_MIN_VISIBILITY", &mut provider.min_visibility)?;
        Self::apply_env_var("SWING_PROVIDER_MIN_PRESENCE", &mut provider.min_presence)?;
        Self::apply_env_var(
            "SWING_PROVIDER_FRAME_TIMEOUT_MS",
            &mut provider.frame_timeout_ms,
        )?;

        let smoothing = &mut self.smoothing;
        Self::apply_env_var("SWING_SMOOTHING_ENABLED", &mut smoothing.enabled)?;
        Self::apply_env_var("SWING_SMOOTHING_MAX_SAMPLES", &mut smoothing.max_samples)?;
        Self::apply_env_var(
            "SWING_SMOOTHING_HIGH_CONFIDENCE_THRESHOLD",
            &mut smoothing.high_confidence_threshold,
        )?;
        Self::apply_env_var(
            "SWING_SMOOTHING_LIGHT_BLEND_FACTOR",
            &mut smoothing.light_blend_factor,
        )?;
        Self::apply_env_var(
            "SWING_SMOOTHING_HEAVY_BLEND_FACTOR",
            &mut smoothing.heavy_blend_factor,
        )?;
        Self::apply_env_var(
            "SWING_SMOOTHING_HIGH_CONFIDENCE_WEIGHT_BOOST",
            &mut smoothing.high_confidence_weight_boost,
        )?;

        Self::apply_env_var("SWING_HISTORY_CAPACITY", &mut self.history.capacity)?;
        Self::apply_env_var(
            "SWING_HISTORY_CLIP_CAPACITY",
            &mut self.history.clip_capacity,
        )?;
        Self::apply_env_var(
            "SWING_VELOCITY_IMPACT_SPEED_THRESHOLD",
            &mut self.velocity.impact_speed_threshold,
        )
    }

    fn apply_phase_overrides(&mut self) -> Result<(), ConfigError> {
        for (name, target) in self.phase.named_values_mut() {
            let env_var_name = format!("SWING_PHASE_{}", name.to_ascii_uppercase());
            Self::apply_env_var(&env_var_name, target)?;
        }
        Ok(())
    }

    fn apply_analysis_overrides(&mut self) -> Result<(), ConfigError> {
        let metrics = &mut self.metrics;
        Self::apply_env_var("SWING_METRICS_IDEAL_TEMPO", &mut metrics.ideal_tempo)?;
        Self::apply_env_var(
            "SWING_METRICS_MIN_VALID_FRAMES",
            &mut metrics.min_valid_frames,
        )?;
        Self::apply_env_var(
            "SWING_METRICS_MIN_IMPACT_FRAMES",
            &mut metrics.min_impact_frames,
        )?;
        Self::apply_env_var(
            "SWING_METRICS_BALANCE_SWAY_PENALTY",
            &mut metrics.balance_sway_penalty,
        )?;
        Self::apply_env_var(
            "SWING_METRICS_TEMPO_SCORE_PENALTY",
            &mut metrics.tempo_score_penalty,
        )?;
        Self::apply_env_var(
            "SWING_METRICS_PATH_SCORE_PENALTY",
            &mut metrics.path_score_penalty,
        )?;

        Self::apply_env_var(
            "SWING_TREND_STABLE_CHANGE_THRESHOLD",
            &mut self.trend.stable_change_threshold,
        )?;
        Self::apply_env_var(
            "SWING_TREND_MIN_DATA_POINTS",
            &mut self.trend.min_data_points,
        )
    }
}
