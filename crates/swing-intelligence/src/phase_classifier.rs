// ABOUTME: Rule-based swing-phase state machine driven by lead-wrist position and velocity
// ABOUTME: Tracks per-phase elapsed time and the swing timer across transitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Swing-Phase Classifier
//!
//! The lead (left) wrist is located relative to the shoulder center and the
//! rules below are tried in strict priority order. The first match becomes
//! the candidate phase; no match holds the current phase.
//!
//! | # | Condition | Phase |
//! |---|-----------|-------|
//! | 1 | `\|Δx\| < 0.1 ∧ \|Δy\| < 0.1` | address |
//! | 2 | `Δx < -0.1 ∧ Δy > -0.2 ∧ \|v\| < 0.5` | takeaway |
//! | 3 | `Δx < -0.2 ∧ Δy < -0.1` | backswing |
//! | 4 | `Δx < -0.1 ∧ \|v\| > 1.0 ∧ vx > 0` | downswing |
//! | 5 | `\|Δx\| < 0.15 ∧ \|v\| > 2.0` | impact |
//! | 6 | `Δx > 0.1 ∧ Δy > 0` | follow-through |
//! | 7 | `Δx > 0.2 ∧ \|v\| < 0.3` | finish |
//!
//! Numbers shown are the defaults from [`PhaseThresholds`]. Elapsed time is
//! measured on frame timestamps so replays classify identically.

use swing_core::{Landmark, PhaseTiming, Point2, PoseFrame, SwingPhase};
use tracing::debug;

use crate::config::engine::PhaseThresholds;
use crate::geometry;
use crate::history::PoseHistory;
use crate::velocity;

/// A change of phase produced by [`PhaseClassifier::update`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTransition {
    /// Phase being left
    pub from: SwingPhase,
    /// Phase being entered
    pub to: SwingPhase,
    /// Timestamp of the frame that triggered the change
    pub timestamp: f64,
    /// Frame number of the frame that triggered the change
    pub frame_number: u64,
    /// Seconds spent in `from`
    pub elapsed_in_previous: f64,
}

/// Swing-phase state machine for one session
#[derive(Debug, Clone)]
pub struct PhaseClassifier {
    thresholds: PhaseThresholds,
    current: SwingPhase,
    phase_started_at: Option<f64>,
    timing: PhaseTiming,
    swing_started_at: Option<f64>,
    address_frame: Option<PoseFrame>,
}

impl PhaseClassifier {
    /// Create a classifier in the `Unknown` phase
    #[must_use]
    pub fn new(thresholds: PhaseThresholds) -> Self {
        Self {
            thresholds,
            current: SwingPhase::Unknown,
            phase_started_at: None,
            timing: PhaseTiming::default(),
            swing_started_at: None,
            address_frame: None,
        }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn thresholds(&self) -> &PhaseThresholds {
        &self.thresholds
    }

    /// Current phase
    #[must_use]
    pub const fn current_phase(&self) -> SwingPhase {
        self.current
    }

    /// Accumulated time per completed phase since the last return to address
    #[must_use]
    pub const fn timing(&self) -> &PhaseTiming {
        &self.timing
    }

    /// Timestamp at which takeaway started the current swing
    #[must_use]
    pub const fn swing_started_at(&self) -> Option<f64> {
        self.swing_started_at
    }

    /// Latest frame that matched the address rule
    #[must_use]
    pub const fn address_frame(&self) -> Option<&PoseFrame> {
        self.address_frame.as_ref()
    }

    /// Apply the phase rules to a wrist offset and velocity
    ///
    /// `offset` is lead wrist minus shoulder center. Returns `None` when no
    /// rule matches.
    #[must_use]
    pub fn evaluate(&self, offset: Point2, velocity: Point2) -> Option<SwingPhase> {
        let t = &self.thresholds;
        let (dx, dy) = (offset.x, offset.y);
        let speed = velocity.length();

        if dx.abs() < t.address_tolerance && dy.abs() < t.address_tolerance {
            Some(SwingPhase::Address)
        } else if dx < -t.takeaway_min_offset_x
            && dy > -t.takeaway_max_rise
            && speed < t.takeaway_max_speed
        {
            Some(SwingPhase::Takeaway)
        } else if dx < -t.backswing_min_offset_x && dy < -t.backswing_min_rise {
            Some(SwingPhase::Backswing)
        } else if dx < -t.downswing_min_offset_x
            && speed > t.downswing_min_speed
            && velocity.x > 0.0
        {
            Some(SwingPhase::Downswing)
        } else if dx.abs() < t.impact_max_offset_x && speed > t.impact_min_speed {
            Some(SwingPhase::Impact)
        } else if dx > t.follow_through_min_offset_x && dy > 0.0 {
            Some(SwingPhase::FollowThrough)
        } else if dx > t.finish_min_offset_x && speed < t.finish_max_speed {
            Some(SwingPhase::Finish)
        } else {
            None
        }
    }

    /// Classify the latest history frame and apply any resulting transition
    ///
    /// Holds the current phase when the lead wrist or either shoulder is
    /// unavailable or no rule matches.
    pub fn update(&mut self, history: &PoseHistory) -> Option<PhaseTransition> {
        let latest = history.latest()?;
        let wrist = latest.position(Landmark::LEAD_WRIST)?;
        let shoulders = geometry::shoulder_center(latest)?;
        let wrist_velocity = velocity::landmark_velocity(history, Landmark::LEAD_WRIST);

        let candidate = self.evaluate(wrist - shoulders, wrist_velocity)?;

        if candidate == SwingPhase::Address {
            self.address_frame = Some(latest.clone());
        }
        if self.phase_started_at.is_none() {
            self.phase_started_at = Some(latest.timestamp());
        }
        if candidate == self.current {
            return None;
        }

        Some(self.transition(candidate, latest))
    }

    fn transition(&mut self, to: SwingPhase, frame: &PoseFrame) -> PhaseTransition {
        let from = self.current;
        let timestamp = frame.timestamp();
        let elapsed = self
            .phase_started_at
            .map_or(0.0, |started| (timestamp - started).max(0.0));

        self.timing.record(from, elapsed);

        if to == SwingPhase::Address {
            self.timing.clear();
            self.swing_started_at = None;
        } else if to == SwingPhase::Takeaway && self.swing_started_at.is_none() {
            self.swing_started_at = Some(timestamp);
        }

        self.current = to;
        self.phase_started_at = Some(timestamp);

        debug!(
            from = %from,
            to = %to,
            frame_number = frame.frame_number(),
            timestamp,
            elapsed_in_previous = elapsed,
            "Swing phase transition"
        );

        PhaseTransition {
            from,
            to,
            timestamp,
            frame_number: frame.frame_number(),
            elapsed_in_previous: elapsed,
        }
    }

    /// Return to `Unknown` and forget timing, swing timer and address frame
    pub fn reset(&mut self) {
        self.current = SwingPhase::Unknown;
        self.phase_started_at = None;
        self.timing.clear();
        self.swing_started_at = None;
        self.address_frame = None;
    }
}

impl Default for PhaseClassifier {
    fn default() -> Self {
        Self::new(PhaseThresholds::default())
    }
}
