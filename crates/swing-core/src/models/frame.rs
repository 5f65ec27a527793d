// ABOUTME: Immutable pose frames with a fixed-length keypoint list
// ABOUTME: Includes a builder used by ingestion code, tests and benchmarks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use super::keypoint::{KeypointObservation, Point2};
use super::landmark::{Landmark, LANDMARK_COUNT};
use serde::{Deserialize, Serialize};

/// One processed video or camera frame.
///
/// The keypoint list always holds exactly `LANDMARK_COUNT` entries in compact
/// index order; missing landmarks are sentinels. Fields are private so a frame
/// cannot change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoseFrame {
    frame_number: u64,
    timestamp: f64,
    keypoints: Vec<KeypointObservation>,
}

impl PoseFrame {
    /// Create a frame from any set of observations.
    ///
    /// Each observation lands at its own `landmark_index`; indices outside the
    /// convention are ignored and unfilled slots become sentinels.
    #[must_use]
    pub fn new(
        frame_number: u64,
        timestamp: f64,
        observations: impl IntoIterator<Item = KeypointObservation>,
    ) -> Self {
        let mut keypoints: Vec<KeypointObservation> =
            (0..LANDMARK_COUNT).map(KeypointObservation::sentinel).collect();
        for observation in observations {
            if let Some(slot) = keypoints.get_mut(observation.landmark_index) {
                *slot = observation;
            }
        }
        Self {
            frame_number,
            timestamp,
            keypoints,
        }
    }

    /// Start building a frame
    #[must_use]
    pub fn builder(frame_number: u64, timestamp: f64) -> PoseFrameBuilder {
        PoseFrameBuilder::new(frame_number, timestamp)
    }

    /// Monotonic frame counter
    #[must_use]
    pub const fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Capture time in seconds
    #[must_use]
    pub const fn timestamp(&self) -> f64 {
        self.timestamp
    }

    /// All keypoints in compact index order
    #[must_use]
    pub fn keypoints(&self) -> &[KeypointObservation] {
        &self.keypoints
    }

    /// Observation for one landmark
    #[must_use]
    pub fn keypoint(&self, landmark: Landmark) -> KeypointObservation {
        self.keypoints
            .get(landmark.index())
            .copied()
            .unwrap_or_else(|| KeypointObservation::sentinel(landmark.index()))
    }

    /// Position of a landmark, `None` when it is the sentinel
    #[must_use]
    pub fn position(&self, landmark: Landmark) -> Option<Point2> {
        self.keypoint(landmark).valid_position()
    }

    /// Position of a landmark looked up by role name (e.g. `leftWrist`)
    #[must_use]
    pub fn position_by_name(&self, name: &str) -> Option<Point2> {
        Landmark::from_name(name).and_then(|landmark| self.position(landmark))
    }

    /// Number of non-sentinel keypoints
    #[must_use]
    pub fn valid_landmark_count(&self) -> usize {
        self.keypoints.iter().filter(|k| k.is_valid()).count()
    }

    /// Whether the frame can drive phase detection: lead wrist and both shoulders present
    #[must_use]
    pub fn is_usable(&self) -> bool {
        [
            Landmark::LEAD_WRIST,
            Landmark::LeftShoulder,
            Landmark::RightShoulder,
        ]
        .into_iter()
        .all(|landmark| self.position(landmark).is_some())
    }
}

/// Builder for `PoseFrame`
#[derive(Debug, Clone)]
pub struct PoseFrameBuilder {
    frame_number: u64,
    timestamp: f64,
    observations: Vec<KeypointObservation>,
}

impl PoseFrameBuilder {
    /// Create a builder with every landmark missing
    #[must_use]
    pub const fn new(frame_number: u64, timestamp: f64) -> Self {
        Self {
            frame_number,
            timestamp,
            observations: Vec::new(),
        }
    }

    /// Set one landmark
    #[must_use]
    pub fn landmark(mut self, landmark: Landmark, x: f64, y: f64, confidence: f64) -> Self {
        self.observations.push(KeypointObservation::new(
            landmark.index(),
            Point2::new(x, y),
            confidence,
        ));
        self
    }

    /// Set one landmark from a point
    #[must_use]
    pub fn point(self, landmark: Landmark, position: Point2, confidence: f64) -> Self {
        self.landmark(landmark, position.x, position.y, confidence)
    }

    /// Finish the frame
    #[must_use]
    pub fn build(self) -> PoseFrame {
        PoseFrame::new(self.frame_number, self.timestamp, self.observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_always_has_full_keypoint_list() {
        let frame = PoseFrame::builder(7, 0.25)
            .landmark(Landmark::LeftWrist, 0.4, 0.5, 0.9)
            .build();

        assert_eq!(frame.keypoints().len(), LANDMARK_COUNT);
        assert_eq!(frame.valid_landmark_count(), 1);
        assert_eq!(frame.position(Landmark::LeftWrist), Some(Point2::new(0.4, 0.5)));
        assert_eq!(frame.position(Landmark::Nose), None);
        assert_eq!(
            frame.position_by_name("leftWrist"),
            Some(Point2::new(0.4, 0.5))
        );
    }

    #[test]
    fn test_out_of_range_observation_is_ignored() {
        let frame = PoseFrame::new(
            1,
            0.0,
            [KeypointObservation::new(99, Point2::new(0.5, 0.5), 1.0)],
        );
        assert_eq!(frame.keypoints().len(), LANDMARK_COUNT);
        assert_eq!(frame.valid_landmark_count(), 0);
    }
}
