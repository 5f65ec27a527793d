// ABOUTME: Compact landmark convention for swing analysis
// ABOUTME: Maps the 13 swing-relevant joints to fixed indices and to the provider's 33-point layout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of landmarks carried in every pose frame
pub const LANDMARK_COUNT: usize = 13;

/// Anatomical keypoints tracked by the engine.
///
/// The discriminant is the compact index used in every `PoseFrame`. Sides are
/// the golfer's own, not the image's.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Landmark {
    /// Nose
    Nose = 0,
    /// Left shoulder
    LeftShoulder = 1,
    /// Right shoulder
    RightShoulder = 2,
    /// Left elbow
    LeftElbow = 3,
    /// Right elbow
    RightElbow = 4,
    /// Left wrist
    LeftWrist = 5,
    /// Right wrist
    RightWrist = 6,
    /// Left hip
    LeftHip = 7,
    /// Right hip
    RightHip = 8,
    /// Left knee
    LeftKnee = 9,
    /// Right knee
    RightKnee = 10,
    /// Left ankle
    LeftAnkle = 11,
    /// Right ankle
    RightAnkle = 12,
}

impl Landmark {
    /// All landmarks in compact index order
    pub const ALL: [Self; LANDMARK_COUNT] = [
        Self::Nose,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::LeftElbow,
        Self::RightElbow,
        Self::LeftWrist,
        Self::RightWrist,
        Self::LeftHip,
        Self::RightHip,
        Self::LeftKnee,
        Self::RightKnee,
        Self::LeftAnkle,
        Self::RightAnkle,
    ];

    /// Lead wrist of a right-handed golfer, the landmark that drives phase detection
    pub const LEAD_WRIST: Self = Self::LeftWrist;

    /// Compact index of this landmark inside a pose frame
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Landmark stored at a compact index
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Index of this landmark in the provider's 33-point body layout
    #[must_use]
    pub const fn provider_index(self) -> usize {
        match self {
            Self::Nose => 0,
            Self::LeftShoulder => 11,
            Self::RightShoulder => 12,
            Self::LeftElbow => 13,
            Self::RightElbow => 14,
            Self::LeftWrist => 15,
            Self::RightWrist => 16,
            Self::LeftHip => 23,
            Self::RightHip => 24,
            Self::LeftKnee => 25,
            Self::RightKnee => 26,
            Self::LeftAnkle => 27,
            Self::RightAnkle => 28,
        }
    }

    /// Semantic role name, e.g. `left_wrist`
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Nose => "nose",
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftElbow => "left_elbow",
            Self::RightElbow => "right_elbow",
            Self::LeftWrist => "left_wrist",
            Self::RightWrist => "right_wrist",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }

    /// Resolve a semantic role name.
    ///
    /// Accepts `left_wrist`, `leftWrist` and `LeftWrist` spellings.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let folded: String = name
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        Self::ALL
            .into_iter()
            .find(|landmark| landmark.name().replace('_', "") == folded)
    }
}

impl fmt::Display for Landmark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compact_indices_match_order() {
        for (i, landmark) in Landmark::ALL.iter().enumerate() {
            assert_eq!(landmark.index(), i);
            assert_eq!(Landmark::from_index(i), Some(*landmark));
        }
        assert_eq!(Landmark::from_index(LANDMARK_COUNT), None);
    }

    #[test]
    fn test_name_lookup_accepts_camel_case() {
        assert_eq!(Landmark::from_name("leftWrist"), Some(Landmark::LeftWrist));
        assert_eq!(Landmark::from_name("left_wrist"), Some(Landmark::LeftWrist));
        assert_eq!(Landmark::from_name("RightAnkle"), Some(Landmark::RightAnkle));
        assert_eq!(Landmark::from_name("left_pinky"), None);
    }
}
