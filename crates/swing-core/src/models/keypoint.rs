// ABOUTME: Keypoint observations, raw provider landmarks and 2D point math
// ABOUTME: Missing landmarks are carried as a zero-confidence sentinel to keep fixed indexing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A point or vector in normalized image space (x right, y down)
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point2 {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate, growing downward
    pub y: f64,
}

impl Point2 {
    /// Origin, also the position of a sentinel keypoint
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a point
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Dot product
    #[must_use]
    pub fn dot(self, other: Self) -> f64 {
        self.x.mul_add(other.x, self.y * other.y)
    }

    /// Z component of the 3D cross product
    #[must_use]
    pub fn cross(self, other: Self) -> f64 {
        self.x.mul_add(other.y, -(self.y * other.x))
    }

    /// Euclidean length
    #[must_use]
    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Midpoint between two points
    #[must_use]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    /// Both coordinates are finite
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl Add for Point2 {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point2 {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

/// One landmark in one frame.
///
/// A rejected or missing landmark is `{position: (0,0), confidence: 0}`,
/// never an absent entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeypointObservation {
    /// Compact landmark index (see `Landmark`)
    pub landmark_index: usize,
    /// Normalized position in `[0,1]²`
    pub position: Point2,
    /// Heuristic signal-quality score in `[0,1]`, not a calibrated probability
    pub confidence: f64,
}

impl KeypointObservation {
    /// Create an observation
    #[must_use]
    pub const fn new(landmark_index: usize, position: Point2, confidence: f64) -> Self {
        Self {
            landmark_index,
            position,
            confidence,
        }
    }

    /// Zero-confidence placeholder for a missing landmark
    #[must_use]
    pub const fn sentinel(landmark_index: usize) -> Self {
        Self::new(landmark_index, Point2::ZERO, 0.0)
    }

    /// Whether this observation carries real data
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.confidence > 0.0 && self.position.is_finite()
    }

    /// Position when valid
    #[must_use]
    pub fn valid_position(&self) -> Option<Point2> {
        self.is_valid().then_some(self.position)
    }
}

/// A landmark exactly as the pose provider reports it
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RawLandmark {
    /// Normalized x inside the provider's letterboxed square
    pub x: f64,
    /// Normalized y inside the provider's letterboxed square
    pub y: f64,
    /// Likelihood the landmark is visible
    pub visibility: f64,
    /// Likelihood the landmark is present in the frame
    pub presence: f64,
}

impl RawLandmark {
    /// Create a raw landmark
    #[must_use]
    pub const fn new(x: f64, y: f64, visibility: f64, presence: f64) -> Self {
        Self {
            x,
            y,
            visibility,
            presence,
        }
    }

    /// Average of visibility and presence
    #[must_use]
    pub fn combined_confidence(&self) -> f64 {
        (self.visibility + self.presence) / 2.0
    }

    /// Position inside the letterboxed square
    #[must_use]
    pub const fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}
