// ABOUTME: Main library entry point for the golf swing analysis engine
// ABOUTME: Wires pose providers into per-clip swing sessions and re-exports the engine API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

#![deny(unsafe_code)]

//! # Swing Analyzer
//!
//! Golf swing analysis from per-frame body keypoints. A pose provider turns
//! video frames into landmarks; the engine smooths them, classifies the
//! swing phase frame by frame and derives tempo, balance, swing path,
//! per-joint summaries and trends for the clip.
//!
//! ## Architecture
//!
//! - **`swing-core`**: data model, landmark convention, error types, constants
//! - **`swing-intelligence`**: all synchronous analysis and the engine configuration
//! - **Providers**: the async [`PoseProvider`] boundary to a pose-estimation model
//! - **Pipeline**: [`ClipAnalyzer`], which drives a provider with a per-frame
//!   timeout and feeds a [`SwingSession`]
//!
//! The engine assumes a right-handed golfer: the lead side is the left side.
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use swing_analyzer::providers::RecordedPoseProvider;
//! use swing_analyzer::{ClipAnalyzer, EngineConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let provider = Arc::new(RecordedPoseProvider::new());
//!     let analyzer = ClipAnalyzer::new(provider, EngineConfig::default());
//!     let analysis = analyzer.analyze(Vec::new()).await;
//!     println!("tempo {:.2}", analysis.metrics.tempo);
//! }
//! ```

/// Structured logging setup
pub mod logging;

/// Async clip driver with per-frame provider timeouts
pub mod pipeline;

/// Pose-estimation provider boundary
pub mod providers;

pub use pipeline::ClipAnalyzer;
pub use providers::{PoseProvider, VideoFrame};

pub use swing_core::{
    BiomechanicsSummary, JointSummary, KeypointObservation, Landmark, PhaseTiming, Point2,
    PoseFrame, ProviderError, ProviderResult, RawLandmark, SwingMetrics, SwingPhase,
    TrackedMetric, TrendDirection, TrendResult,
};
pub use swing_intelligence::{
    ClipAnalysis, ConfigError, DropReason, EngineConfig, FrameOutcome, JointAngles,
    PhaseTransition, ProgressionReport, SwingSession, WeightDistribution,
};
