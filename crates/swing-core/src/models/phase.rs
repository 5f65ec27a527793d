// ABOUTME: Swing phase enumeration and per-phase timing bookkeeping
// ABOUTME: Phase timing only ever holds phases that were actually entered
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Phase of a golf swing as seen by the rule-based classifier.
///
/// Phases are not strictly monotonic: the classifier may hold a phase, and a
/// session reset returns to `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwingPhase {
    /// No phase detected yet
    #[default]
    Unknown,
    /// Set-up over the ball
    Address,
    /// Club starts moving away from the ball
    Takeaway,
    /// Club travels to the top
    Backswing,
    /// Club accelerates back toward the ball
    Downswing,
    /// Ball contact
    Impact,
    /// Club continues past the ball
    FollowThrough,
    /// Balanced end position
    Finish,
}

impl SwingPhase {
    /// Stable snake-case label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "unknown",
            Self::Address => "address",
            Self::Takeaway => "takeaway",
            Self::Backswing => "backswing",
            Self::Downswing => "downswing",
            Self::Impact => "impact",
            Self::FollowThrough => "follow_through",
            Self::Finish => "finish",
        }
    }
}

impl fmt::Display for SwingPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seconds spent in each phase during the current swing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhaseTiming {
    durations: HashMap<SwingPhase, f64>,
}

impl PhaseTiming {
    /// Create empty timing
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add time spent in a phase.
    ///
    /// `Unknown` is never recorded; negative or non-finite durations count as zero.
    pub fn record(&mut self, phase: SwingPhase, seconds: f64) {
        if phase == SwingPhase::Unknown {
            return;
        }
        let seconds = if seconds.is_finite() {
            seconds.max(0.0)
        } else {
            0.0
        };
        *self.durations.entry(phase).or_insert(0.0) += seconds;
    }

    /// Time spent in a phase, if it was entered and left
    #[must_use]
    pub fn duration(&self, phase: SwingPhase) -> Option<f64> {
        self.durations.get(&phase).copied()
    }

    /// Forget every phase
    pub fn clear(&mut self) {
        self.durations.clear();
    }

    /// No phase recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.durations.is_empty()
    }

    /// Number of recorded phases
    #[must_use]
    pub fn len(&self) -> usize {
        self.durations.len()
    }

    /// Recorded phases and their durations
    pub fn iter(&self) -> impl Iterator<Item = (SwingPhase, f64)> + '_ {
        self.durations.iter().map(|(phase, seconds)| (*phase, *seconds))
    }
}
