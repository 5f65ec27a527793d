// ABOUTME: Constants module with domain-separated organization for swing analysis
// ABOUTME: Hand-tuned thresholds and defaults used by the engine configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Constants module
//!
//! Defaults are grouped by the component that consumes them. The engine never
//! reads these directly at analysis time; they seed the `Default` impls of the
//! configuration tree so every value stays overridable.

/// Pose-provider acceptance limits
pub mod provider {
    /// Number of landmarks in the provider's full-body layout
    pub const PROVIDER_LANDMARK_COUNT: usize = 33;
    /// Minimum average of visibility and presence for a landmark to be kept
    pub const MIN_COMBINED_CONFIDENCE: f64 = 0.5;
    /// Minimum visibility score for a landmark to be kept
    pub const MIN_VISIBILITY: f64 = 0.4;
    /// Minimum presence score for a landmark to be kept
    pub const MIN_PRESENCE: f64 = 0.4;
    /// Per-frame budget for one provider call
    pub const FRAME_TIMEOUT_MS: u64 = 500;
}

/// Temporal smoothing filter
pub mod smoothing {
    /// Raw samples retained per landmark
    pub const MAX_SAMPLES: usize = 5;
    /// Confidence above which a sample counts as high quality
    pub const HIGH_CONFIDENCE_THRESHOLD: f64 = 0.9;
    /// Blend factor toward history for high-confidence samples
    pub const LIGHT_BLEND_FACTOR: f64 = 0.3;
    /// Blend factor toward history for everything else
    pub const HEAVY_BLEND_FACTOR: f64 = 0.6;
    /// Extra weight applied to high-confidence historical samples
    pub const HIGH_CONFIDENCE_WEIGHT_BOOST: f64 = 1.5;
}

/// Pose history buffer
pub mod history {
    /// Frames retained for live analysis (about one second at 30 fps)
    pub const DEFAULT_CAPACITY: usize = 30;
    /// Frames retained for whole-clip analysis (two minutes at 30 fps)
    pub const DEFAULT_CLIP_CAPACITY: usize = 3600;
}

/// Swing-phase classifier thresholds, in normalized image units
pub mod phase {
    /// Address: wrist within this box around the shoulder center
    pub const ADDRESS_TOLERANCE: f64 = 0.1;
    /// Takeaway: wrist at least this far behind the shoulder center
    pub const TAKEAWAY_MIN_OFFSET_X: f64 = 0.1;
    /// Takeaway: wrist has not risen more than this above the shoulders
    pub const TAKEAWAY_MAX_RISE: f64 = 0.2;
    /// Takeaway: wrist speed stays below this
    pub const TAKEAWAY_MAX_SPEED: f64 = 0.5;
    /// Backswing: wrist at least this far behind the shoulder center
    pub const BACKSWING_MIN_OFFSET_X: f64 = 0.2;
    /// Backswing: wrist at least this far above the shoulder center
    pub const BACKSWING_MIN_RISE: f64 = 0.1;
    /// Downswing: wrist still at least this far behind the shoulder center
    pub const DOWNSWING_MIN_OFFSET_X: f64 = 0.1;
    /// Downswing: wrist speed above this
    pub const DOWNSWING_MIN_SPEED: f64 = 1.0;
    /// Impact: wrist within this horizontal distance of the shoulder center
    pub const IMPACT_MAX_OFFSET_X: f64 = 0.15;
    /// Impact: wrist speed above this
    pub const IMPACT_MIN_SPEED: f64 = 2.0;
    /// Follow-through: wrist at least this far past the shoulder center
    pub const FOLLOW_THROUGH_MIN_OFFSET_X: f64 = 0.1;
    /// Finish: wrist at least this far past the shoulder center
    pub const FINISH_MIN_OFFSET_X: f64 = 0.2;
    /// Finish: wrist speed below this
    pub const FINISH_MAX_SPEED: f64 = 0.3;
}

/// Velocity estimation
pub mod velocity {
    /// Lead-wrist speed above which a frame belongs to the impact window
    pub const IMPACT_SPEED_THRESHOLD: f64 = 1.5;
}

/// Swing metrics aggregation
pub mod metrics {
    /// Backswing to downswing ratio treated as ideal, and used as placeholder
    pub const IDEAL_TEMPO_RATIO: f64 = 3.0;
    /// Usable frames required before metrics are computed
    pub const MIN_VALID_FRAMES: usize = 5;
    /// Impact-window frames required for a swing-path estimate
    pub const MIN_IMPACT_FRAMES: usize = 3;
    /// Balance lost per unit of hip/foot lateral offset
    pub const BALANCE_SWAY_PENALTY: f64 = 5.0;
    /// Tempo score points lost per unit of tempo error
    pub const TEMPO_SCORE_PENALTY: f64 = 20.0;
    /// Path score points lost per degree of deviation
    pub const PATH_SCORE_PENALTY: f64 = 2.0;
    /// Balance reported when no frame has hips and ankles
    pub const NEUTRAL_BALANCE: f64 = 0.5;
}

/// Progression trend analysis
pub mod trend {
    /// Change between first and last third below which a metric is stable
    pub const STABLE_CHANGE_THRESHOLD: f64 = 5.0;
    /// Valid samples required before a trend is reported
    pub const MIN_DATA_POINTS: usize = 3;
}
