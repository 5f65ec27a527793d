// ABOUTME: Pose and swing data model re-exports
// ABOUTME: Landmarks, keypoints, frames, phases, metrics and trend records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

/// Pose frames and the frame builder
pub mod frame;
/// Keypoint observations, provider landmarks and 2D points
pub mod keypoint;
/// Compact landmark convention shared by every consumer
pub mod landmark;
/// Swing metrics, biomechanics summaries and trend results
pub mod metrics;
/// Swing phases and phase timing
pub mod phase;

pub use frame::{PoseFrame, PoseFrameBuilder};
pub use keypoint::{KeypointObservation, Point2, RawLandmark};
pub use landmark::{Landmark, LANDMARK_COUNT};
pub use metrics::{
    BiomechanicsSummary, JointSummary, SwingMetrics, TrackedMetric, TrendDirection, TrendResult,
};
pub use phase::{PhaseTiming, SwingPhase};
