// ABOUTME: Swing-phase classifier thresholds as a named, overridable configuration struct
// ABOUTME: Offsets are lead wrist minus shoulder center in normalized units, speeds in units per second
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Phase Classifier Configuration
//!
//! Every literal of the phase decision tree lives here so tuning never
//! touches control flow. Horizontal offsets are compared against their
//! negation where the rule looks behind the golfer (`Δx < -offset`), and
//! "rise" thresholds against the negated vertical offset (image y grows
//! downward, so a raised wrist has a negative `Δy`).

use serde::{Deserialize, Serialize};
use swing_core::constants::phase;

/// Thresholds for the seven phase rules
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhaseThresholds {
    /// Address when `|Δx|` and `|Δy|` are both below this
    pub address_tolerance: f64,
    /// Takeaway requires `Δx < -takeaway_min_offset_x`
    pub takeaway_min_offset_x: f64,
    /// Takeaway requires `Δy > -takeaway_max_rise`
    pub takeaway_max_rise: f64,
    /// Takeaway requires speed below this
    pub takeaway_max_speed: f64,
    /// Backswing requires `Δx < -backswing_min_offset_x`
    pub backswing_min_offset_x: f64,
    /// Backswing requires `Δy < -backswing_min_rise`
    pub backswing_min_rise: f64,
    /// Downswing requires `Δx < -downswing_min_offset_x`
    pub downswing_min_offset_x: f64,
    /// Downswing requires speed above this (and `vx > 0`)
    pub downswing_min_speed: f64,
    /// Impact requires `|Δx|` below this
    pub impact_max_offset_x: f64,
    /// Impact requires speed above this
    pub impact_min_speed: f64,
    /// Follow-through requires `Δx` above this (and `Δy > 0`)
    pub follow_through_min_offset_x: f64,
    /// Finish requires `Δx` above this
    pub finish_min_offset_x: f64,
    /// Finish requires speed below this
    pub finish_max_speed: f64,
}

impl Default for PhaseThresholds {
    fn default() -> Self {
        Self {
            address_tolerance: phase::ADDRESS_TOLERANCE,
            takeaway_min_offset_x: phase::TAKEAWAY_MIN_OFFSET_X,
            takeaway_max_rise: phase::TAKEAWAY_MAX_RISE,
            takeaway_max_speed: phase::TAKEAWAY_MAX_SPEED,
            backswing_min_offset_x: phase::BACKSWING_MIN_OFFSET_X,
            backswing_min_rise: phase::BACKSWING_MIN_RISE,
            downswing_min_offset_x: phase::DOWNSWING_MIN_OFFSET_X,
            downswing_min_speed: phase::DOWNSWING_MIN_SPEED,
            impact_max_offset_x: phase::IMPACT_MAX_OFFSET_X,
            impact_min_speed: phase::IMPACT_MIN_SPEED,
            follow_through_min_offset_x: phase::FOLLOW_THROUGH_MIN_OFFSET_X,
            finish_min_offset_x: phase::FINISH_MIN_OFFSET_X,
            finish_max_speed: phase::FINISH_MAX_SPEED,
        }
    }
}

impl PhaseThresholds {
    /// All thresholds as `(name, value)` pairs, used by validation
    #[must_use]
    pub fn named_values(&self) -> [(&'static str, f64); 13] {
        [
            ("address_tolerance", self.address_tolerance),
            ("takeaway_min_offset_x", self.takeaway_min_offset_x),
            ("takeaway_max_rise", self.takeaway_max_rise),
            ("takeaway_max_speed", self.takeaway_max_speed),
            ("backswing_min_offset_x", self.backswing_min_offset_x),
            ("backswing_min_rise", self.backswing_min_rise),
            ("downswing_min_offset_x", self.downswing_min_offset_x),
            ("downswing_min_speed", self.downswing_min_speed),
            ("impact_max_offset_x", self.impact_max_offset_x),
            ("impact_min_speed", self.impact_min_speed),
            ("follow_through_min_offset_x", self.follow_through_min_offset_x),
            ("finish_min_offset_x", self.finish_min_offset_x),
            ("finish_max_speed", self.finish_max_speed),
        ]
    }

    /// Mutable access to every threshold under the same names as [`Self::named_values`]
    pub fn named_values_mut(&mut self) -> [(&'static str, &mut f64); 13] {
        [
            ("address_tolerance", &mut self.address_tolerance),
            ("takeaway_min_offset_x", &mut self.takeaway_min_offset_x),
            ("takeaway_max_rise", &mut self.takeaway_max_rise),
            ("takeaway_max_speed", &mut self.takeaway_max_speed),
            ("backswing_min_offset_x", &mut self.backswing_min_offset_x),
            ("backswing_min_rise", &mut self.backswing_min_rise),
            ("downswing_min_offset_x", &mut self.downswing_min_offset_x),
            ("downswing_min_speed", &mut self.downswing_min_speed),
            ("impact_max_offset_x", &mut self.impact_max_offset_x),
            ("impact_min_speed", &mut self.impact_min_speed),
            ("follow_through_min_offset_x", &mut self.follow_through_min_offset_x),
            ("finish_min_offset_x", &mut self.finish_min_offset_x),
            ("finish_max_speed", &mut self.finish_max_speed),
        ]
    }
}
