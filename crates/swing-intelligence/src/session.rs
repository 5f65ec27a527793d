// ABOUTME: Per-clip swing session owning smoothing, history, phase state and the clip record
// ABOUTME: Single-writer ingestion of pose frames plus on-demand metrics, summaries and trends
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Swing Session
//!
//! One [`SwingSession`] holds every piece of mutable state the engine needs
//! for a single clip. Sessions share nothing, so independent clips can be
//! analyzed on separate threads or tasks.

use serde::{Deserialize, Serialize};
use std::fmt;
use swing_core::{
    BiomechanicsSummary, Landmark, PhaseTiming, Point2, PoseFrame, RawLandmark, SwingMetrics,
    SwingPhase,
};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::biomechanics;
use crate::config::EngineConfig;
use crate::geometry::{JointAngles, WeightDistribution};
use crate::history::PoseHistory;
use crate::landmark_gate::LandmarkGate;
use crate::normalizer::LetterboxNormalizer;
use crate::phase_classifier::{PhaseClassifier, PhaseTransition};
use crate::progression::{ProgressionAnalyzer, ProgressionReport};
use crate::smoothing::TemporalSmoother;
use crate::swing_metrics::SwingMetricsAggregator;
use crate::velocity;

/// Why a frame did not reach the analysis pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// The provider found no person in the frame
    NoPose,
    /// The frame timestamp was earlier than the previous frame or not finite
    OutOfOrder,
    /// The provider call exceeded its time budget
    ProviderTimeout,
    /// The provider call returned an error
    ProviderFailed,
}

impl DropReason {
    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoPose => "no_pose",
            Self::OutOfOrder => "out_of_order",
            Self::ProviderTimeout => "provider_timeout",
            Self::ProviderFailed => "provider_failed",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of offering one frame to a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FrameOutcome {
    /// The frame was smoothed, buffered and classified
    Processed {
        /// Phase after this frame
        phase: SwingPhase,
        /// Phase change triggered by this frame, if any
        transition: Option<PhaseTransition>,
    },
    /// The frame was discarded
    Dropped(DropReason),
}

impl FrameOutcome {
    /// True when the frame entered the pipeline
    #[must_use]
    pub const fn is_processed(&self) -> bool {
        matches!(self, Self::Processed { .. })
    }
}

/// Everything the engine derives from one finished clip
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClipAnalysis {
    /// Session that produced this analysis
    pub session_id: Uuid,
    /// Frames that entered the pipeline and remain in the clip record
    pub frames_processed: usize,
    /// Frames dropped before analysis
    pub frames_dropped: usize,
    /// Phase at the end of the clip
    pub final_phase: SwingPhase,
    /// Time per phase for the last swing
    pub phase_timing: PhaseTiming,
    /// Tempo, balance, swing path and overall score
    pub metrics: SwingMetrics,
    /// Per-joint summary over the clip
    pub biomechanics: BiomechanicsSummary,
    /// Per-metric trends over the clip
    pub progression: ProgressionReport,
    /// True when too few usable frames were seen for real metrics
    pub degraded: bool,
}

/// Per-clip analysis context
#[derive(Debug, Clone)]
pub struct SwingSession {
    id: Uuid,
    config: EngineConfig,
    gate: LandmarkGate,
    smoother: TemporalSmoother,
    history: PoseHistory,
    classifier: PhaseClassifier,
    aggregator: SwingMetricsAggregator,
    progression: ProgressionAnalyzer,
    clip: Vec<PoseFrame>,
    impact_snapshot: Vec<PoseFrame>,
    dropped_frames: usize,
    last_timestamp: Option<f64>,
}

impl SwingSession {
    /// Create a session with its own copy of the configuration
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self {
            id: Uuid::new_v4(),
            gate: LandmarkGate::new(config.provider.clone()),
            smoother: TemporalSmoother::new(config.smoothing.clone()),
            history: PoseHistory::new(config.history.capacity),
            classifier: PhaseClassifier::new(config.phase.clone()),
            aggregator: SwingMetricsAggregator::new(config.metrics.clone()),
            progression: ProgressionAnalyzer::new(config.trend.clone()),
            clip: Vec::new(),
            impact_snapshot: Vec::new(),
            dropped_frames: 0,
            last_timestamp: None,
            config,
        }
    }

    /// Create a session from the process-wide configuration
    #[must_use]
    pub fn from_global_config() -> Self {
        Self::new(EngineConfig::global().clone())
    }

    /// Session identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current swing phase
    #[must_use]
    pub const fn current_phase(&self) -> SwingPhase {
        self.classifier.current_phase()
    }

    /// Phase timing of the current swing
    #[must_use]
    pub const fn phase_timing(&self) -> &PhaseTiming {
        self.classifier.timing()
    }

    /// Timestamp at which the current swing's takeaway began
    #[must_use]
    pub const fn swing_started_at(&self) -> Option<f64> {
        self.classifier.swing_started_at()
    }

    /// Latest frame classified as address
    #[must_use]
    pub const fn address_frame(&self) -> Option<&PoseFrame> {
        self.classifier.address_frame()
    }

    /// Live history window
    #[must_use]
    pub const fn history(&self) -> &PoseHistory {
        &self.history
    }

    /// Recorded clip, oldest first
    #[must_use]
    pub fn clip(&self) -> &[PoseFrame] {
        &self.clip
    }

    /// Number of frames dropped so far
    #[must_use]
    pub const fn dropped_frames(&self) -> usize {
        self.dropped_frames
    }

    /// Gate provider output for one frame and ingest it
    ///
    /// `None` means the provider saw no person; the frame is counted as
    /// dropped.
    pub fn ingest_detection(
        &mut self,
        frame_number: u64,
        timestamp: f64,
        landmarks: Option<&[RawLandmark]>,
        normalizer: &LetterboxNormalizer,
    ) -> FrameOutcome {
        let Some(landmarks) = landmarks else {
            return self.record_dropped_frame(frame_number, DropReason::NoPose);
        };
        let frame = self
            .gate
            .build_frame(frame_number, timestamp, landmarks, normalizer);
        self.ingest_frame(&frame)
    }

    /// Smooth, buffer and classify one frame
    ///
    /// Frames stamped earlier than the previous frame are dropped. A repeated
    /// timestamp is accepted and yields zero velocity.
    pub fn ingest_frame(&mut self, frame: &PoseFrame) -> FrameOutcome {
        let timestamp = frame.timestamp();
        let in_order = timestamp.is_finite()
            && !matches!(self.last_timestamp, Some(previous) if timestamp < previous);
        if !in_order {
            return self.record_dropped_frame(frame.frame_number(), DropReason::OutOfOrder);
        }
        self.last_timestamp = Some(timestamp);

        let smoothed = self.smoother.smooth_frame(frame);
        self.record_clip_frame(smoothed.clone());
        self.history.push(smoothed);

        let transition = self.classifier.update(&self.history);
        if let Some(change) = transition {
            match change.to {
                SwingPhase::Impact => self.snapshot_impact_window(),
                SwingPhase::Address => self.impact_snapshot.clear(),
                _ => {}
            }
        }

        FrameOutcome::Processed {
            phase: self.classifier.current_phase(),
            transition,
        }
    }

    /// Count a frame that never reached the pipeline
    pub fn record_dropped_frame(&mut self, frame_number: u64, reason: DropReason) -> FrameOutcome {
        self.dropped_frames += 1;
        if reason == DropReason::NoPose {
            debug!(session_id = %self.id, frame_number, "No pose detected, frame dropped");
        } else {
            warn!(
                session_id = %self.id,
                frame_number,
                reason = %reason,
                dropped_total = self.dropped_frames,
                "Frame dropped"
            );
        }
        FrameOutcome::Dropped(reason)
    }

    fn record_clip_frame(&mut self, frame: PoseFrame) {
        let capacity = self.config.history.clip_capacity.max(1);
        if self.clip.len() >= capacity {
            let excess = self.clip.len() + 1 - capacity;
            self.clip.drain(..excess);
        }
        self.clip.push(frame);
    }

    fn snapshot_impact_window(&mut self) {
        self.impact_snapshot = velocity::impact_window(
            self.history.iter(),
            Landmark::LEAD_WRIST,
            self.config.velocity.impact_speed_threshold,
        )
        .into_iter()
        .cloned()
        .collect();
        debug!(
            session_id = %self.id,
            frames = self.impact_snapshot.len(),
            "Captured impact window"
        );
    }

    /// Impact window used for swing path: the snapshot taken on entering
    /// impact, or the trailing fast run of the live history
    #[must_use]
    pub fn impact_window(&self) -> Vec<&PoseFrame> {
        if self.impact_snapshot.is_empty() {
            velocity::impact_window(
                self.history.iter(),
                Landmark::LEAD_WRIST,
                self.config.velocity.impact_speed_threshold,
            )
        } else {
            self.impact_snapshot.iter().collect()
        }
    }

    /// Joint angles of the latest frame
    #[must_use]
    pub fn joint_angles(&self) -> Option<JointAngles> {
        self.history.latest().map(JointAngles::from_frame)
    }

    /// Weight distribution of the latest frame
    #[must_use]
    pub fn weight_distribution(&self) -> WeightDistribution {
        self.history
            .latest()
            .map(WeightDistribution::from_frame)
            .unwrap_or_default()
    }

    /// Lead-wrist velocity on the latest frame
    #[must_use]
    pub fn lead_wrist_velocity(&self) -> Point2 {
        velocity::landmark_velocity(&self.history, Landmark::LEAD_WRIST)
    }

    /// Swing metrics for the clip so far
    #[must_use]
    pub fn metrics(&self) -> SwingMetrics {
        self.aggregator.aggregate(
            self.classifier.timing(),
            &self.clip,
            &self.impact_window(),
            self.classifier.address_frame(),
        )
    }

    /// Per-joint summary for the clip so far
    #[must_use]
    pub fn biomechanics(&self) -> BiomechanicsSummary {
        biomechanics::summarize(&self.clip)
    }

    /// Per-metric trends for the clip so far
    #[must_use]
    pub fn progression(&self) -> ProgressionReport {
        self.progression.analyze_clip(&self.clip)
    }

    /// Analyze the recorded clip and close the session
    #[must_use]
    pub fn finish(self) -> ClipAnalysis {
        let metrics = self.metrics();
        let angles = JointAngles::measure_clip(&self.clip);
        let clip_duration = ProgressionAnalyzer::clip_duration(&self.clip);
        let analysis = ClipAnalysis {
            session_id: self.id,
            frames_processed: self.clip.len(),
            frames_dropped: self.dropped_frames,
            final_phase: self.classifier.current_phase(),
            phase_timing: self.classifier.timing().clone(),
            biomechanics: biomechanics::summarize_angles(&angles),
            progression: self.progression.analyze_angles(&angles, clip_duration),
            degraded: metrics.degraded,
            metrics,
        };

        info!(
            session_id = %analysis.session_id,
            frames_processed = analysis.frames_processed,
            frames_dropped = analysis.frames_dropped,
            final_phase = %analysis.final_phase,
            tempo = analysis.metrics.tempo,
            overall_score = analysis.metrics.overall_score,
            degraded = analysis.degraded,
            "Swing clip analyzed"
        );

        analysis
    }

    /// Forget every frame and all phase state, keeping the configuration
    pub fn reset(&mut self) {
        self.smoother.reset();
        self.history.clear();
        self.classifier.reset();
        self.clip.clear();
        self.impact_snapshot.clear();
        self.dropped_frames = 0;
        self.last_timestamp = None;
    }
}

impl Default for SwingSession {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
