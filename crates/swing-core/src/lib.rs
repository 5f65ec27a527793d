// ABOUTME: Core types and constants for the golf swing analysis engine
// ABOUTME: Foundation crate with the pose data model, landmark convention, and error types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

#![deny(unsafe_code)]

//! # Swing Core
//!
//! Foundation crate providing the shared data model for swing analysis. It is
//! designed to change infrequently so the algorithm crate and the pipeline can
//! compile against a stable set of records.
//!
//! ## Modules
//!
//! - **models**: keypoints, pose frames, swing phases, metrics and trend records
//! - **constants**: hand-tuned defaults organized by domain
//! - **errors**: errors raised at the pose-provider boundary

/// Hand-tuned defaults organized by domain
pub mod constants;

/// Errors raised at the pose-provider boundary
pub mod errors;

/// Pose and swing data model
pub mod models;

pub use errors::{ProviderError, ProviderResult};
pub use models::{
    BiomechanicsSummary, JointSummary, KeypointObservation, Landmark, PhaseTiming, Point2,
    PoseFrame, PoseFrameBuilder, RawLandmark, SwingMetrics, SwingPhase, TrackedMetric,
    TrendDirection, TrendResult, LANDMARK_COUNT,
};
