// ABOUTME: Pose-biomechanics engine for golf swing analysis
// ABOUTME: Smoothing, history, geometry, phase classification, swing metrics and trend analysis
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

#![deny(unsafe_code)]

//! # Swing Intelligence
//!
//! Analysis engine extracted from the main crate for parallel compilation.
//! Everything here is synchronous and CPU-bound; the only asynchronous
//! boundary (the pose provider) lives in the root crate.
//!
//! Frames flow through the engine in a fixed order:
//!
//! 1. [`landmark_gate`] selects and gates provider landmarks, using
//!    [`normalizer`] to undo letterbox padding
//! 2. [`smoothing`] blends each landmark with its recent history
//! 3. [`history`] keeps the bounded window the classifier looks at
//! 4. [`phase_classifier`] assigns a [`SwingPhase`](swing_core::SwingPhase)
//!    from [`geometry`] and [`velocity`]
//! 5. [`swing_metrics`], [`biomechanics`] and [`progression`] run on demand
//!
//! [`session::SwingSession`] owns one instance of each stage per clip.

/// Full-clip per-joint summaries
pub mod biomechanics;
/// Engine configuration tree
pub mod config;
/// Angle and body-center geometry
pub mod geometry;
/// Bounded pose history
pub mod history;
/// Provider landmark selection and confidence gating
pub mod landmark_gate;
/// Letterbox coordinate normalization
pub mod normalizer;
/// Rule-based swing-phase state machine
pub mod phase_classifier;
/// Frame-progression trend analysis
pub mod progression;
/// Per-clip session context
pub mod session;
/// Temporal smoothing filter
pub mod smoothing;
/// Shared descriptive statistics
pub mod statistics;
/// Tempo, balance and swing-path metrics
pub mod swing_metrics;
/// Finite-difference landmark velocity
pub mod velocity;

pub use biomechanics::summarize;
pub use config::engine::{
    ConfigError, HistoryConfig, PhaseThresholds, ProviderConfig, SmoothingConfig,
    SwingMetricsConfig, TrendConfig, VelocityConfig,
};
pub use config::EngineConfig;
pub use geometry::{JointAngles, WeightDistribution};
pub use history::PoseHistory;
pub use landmark_gate::LandmarkGate;
pub use normalizer::LetterboxNormalizer;
pub use phase_classifier::{PhaseClassifier, PhaseTransition};
pub use progression::{ProgressionAnalyzer, ProgressionReport};
pub use session::{ClipAnalysis, DropReason, FrameOutcome, SwingSession};
pub use smoothing::TemporalSmoother;
pub use swing_metrics::SwingMetricsAggregator;
