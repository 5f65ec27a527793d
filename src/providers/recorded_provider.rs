// ABOUTME: Replay pose provider serving pre-recorded landmark sets keyed by frame number
// ABOUTME: Supports injected no-pose frames, failures and delays for deterministic pipeline runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! # Recorded Pose Provider
//!
//! Serves landmark sets captured earlier (or built synthetically) without a
//! pose model. Useful for:
//!
//! - **Replays**: re-analyze a clip from stored landmarks
//! - **Testing**: script failures, missing poses and slow frames
//! - **Benchmarks**: measure the engine without inference cost

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use swing_core::constants::provider::PROVIDER_LANDMARK_COUNT;
use swing_core::{Landmark, PoseFrame, ProviderError, ProviderResult, RawLandmark};
use tokio::time;

use super::{PoseProvider, VideoFrame};

/// Scripted answer for one frame
#[derive(Debug, Clone)]
enum RecordedResponse {
    Pose(Vec<RawLandmark>),
    Failure(ProviderError),
}

/// Pose provider that replays recorded landmark sets
///
/// Frames without a recording answer "no pose".
#[derive(Debug, Clone, Default)]
pub struct RecordedPoseProvider {
    responses: HashMap<u64, RecordedResponse>,
    delays: HashMap<u64, Duration>,
}

impl RecordedPoseProvider {
    /// Create a provider with no recordings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the landmark set returned for a frame
    #[must_use]
    pub fn with_pose(mut self, frame_number: u64, landmarks: Vec<RawLandmark>) -> Self {
        self.responses
            .insert(frame_number, RecordedResponse::Pose(landmarks));
        self
    }

    /// Record a compact pose frame, expanded to the provider layout
    ///
    /// Each valid keypoint becomes a landmark whose visibility and presence
    /// equal its confidence; everything else is zeroed.
    #[must_use]
    pub fn with_pose_frame(self, frame: &PoseFrame) -> Self {
        let frame_number = frame.frame_number();
        self.with_pose(frame_number, expand_to_provider_layout(frame))
    }

    /// Make the provider fail for a frame
    #[must_use]
    pub fn with_failure(mut self, frame_number: u64, error: ProviderError) -> Self {
        self.responses
            .insert(frame_number, RecordedResponse::Failure(error));
        self
    }

    /// Delay the answer for a frame
    #[must_use]
    pub fn with_delay(mut self, frame_number: u64, delay: Duration) -> Self {
        self.delays.insert(frame_number, delay);
        self
    }

    /// Number of frames with a recorded answer
    #[must_use]
    pub fn len(&self) -> usize {
        self.responses.len()
    }

    /// True when nothing was recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.responses.is_empty()
    }
}

/// Expand a compact pose frame into the provider's 33-point layout
#[must_use]
pub fn expand_to_provider_layout(frame: &PoseFrame) -> Vec<RawLandmark> {
    let mut landmarks = vec![RawLandmark::default(); PROVIDER_LANDMARK_COUNT];
    for landmark in Landmark::ALL {
        let keypoint = frame.keypoint(landmark);
        if let (Some(position), Some(slot)) = (
            keypoint.valid_position(),
            landmarks.get_mut(landmark.provider_index()),
        ) {
            *slot = RawLandmark::new(
                position.x,
                position.y,
                keypoint.confidence,
                keypoint.confidence,
            );
        }
    }
    landmarks
}

#[async_trait]
impl PoseProvider for RecordedPoseProvider {
    fn name(&self) -> &'static str {
        "recorded"
    }

    async fn detect(&self, frame: &VideoFrame) -> ProviderResult<Option<Vec<RawLandmark>>> {
        if let Some(delay) = self.delays.get(&frame.frame_number) {
            time::sleep(*delay).await;
        }

        match self.responses.get(&frame.frame_number) {
            Some(RecordedResponse::Pose(landmarks)) => Ok(Some(landmarks.clone())),
            Some(RecordedResponse::Failure(error)) => Err(error.clone()),
            None => Ok(None),
        }
    }
}
