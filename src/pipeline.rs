// ABOUTME: Async clip driver feeding provider output into a swing session frame by frame
// ABOUTME: Bounds each provider call with a timeout and drops failed or timed-out frames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! # Clip Pipeline
//!
//! One clip is a single-writer pipeline: frames are processed strictly in
//! order, each provider call is awaited under
//! [`ProviderConfig::frame_timeout_ms`](swing_intelligence::ProviderConfig),
//! and the session is only touched between calls. A timed-out or failed
//! frame is logged, counted and skipped; the clip always completes.

use std::sync::Arc;
use std::time::Duration;

use swing_core::constants::provider::PROVIDER_LANDMARK_COUNT;
use swing_core::{ProviderError, ProviderResult, RawLandmark};
use swing_intelligence::{ClipAnalysis, DropReason, EngineConfig, FrameOutcome, SwingSession};
use tokio::sync::mpsc;
use tokio::time;
use tracing::{debug, info, warn};

use crate::providers::{PoseProvider, VideoFrame};

/// Drives a [`PoseProvider`] over a clip and analyzes the result
#[derive(Clone)]
pub struct ClipAnalyzer {
    provider: Arc<dyn PoseProvider>,
    config: EngineConfig,
}

impl ClipAnalyzer {
    /// Create an analyzer with an explicit configuration
    #[must_use]
    pub fn new(provider: Arc<dyn PoseProvider>, config: EngineConfig) -> Self {
        Self { provider, config }
    }

    /// Create an analyzer using the process-wide configuration
    #[must_use]
    pub fn with_global_config(provider: Arc<dyn PoseProvider>) -> Self {
        Self::new(provider, EngineConfig::global().clone())
    }

    /// Configuration handed to every new session
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Start an empty session for one clip
    #[must_use]
    pub fn new_session(&self) -> SwingSession {
        SwingSession::new(self.config.clone())
    }

    fn frame_timeout(&self) -> Duration {
        Duration::from_millis(self.config.provider.frame_timeout_ms)
    }

    /// Ask the provider for one frame under the per-frame timeout
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Timeout`] when the budget is exceeded, the
    /// provider's own error when detection fails, or
    /// [`ProviderError::MalformedOutput`] for a landmark set longer than the
    /// provider layout
    pub async fn detect(&self, frame: &VideoFrame) -> ProviderResult<Option<Vec<RawLandmark>>> {
        let timeout = self.frame_timeout();
        let detection = time::timeout(timeout, self.provider.detect(frame))
            .await
            .map_err(|_| ProviderError::Timeout {
                timeout_ms: self.config.provider.frame_timeout_ms,
            })??;

        match detection {
            Some(landmarks) if landmarks.len() > PROVIDER_LANDMARK_COUNT => {
                Err(ProviderError::malformed(format!(
                    "expected at most {PROVIDER_LANDMARK_COUNT} landmarks, got {}",
                    landmarks.len()
                )))
            }
            other => Ok(other),
        }
    }

    /// Run one frame through the provider and into the session
    pub async fn process_frame(
        &self,
        session: &mut SwingSession,
        frame: &VideoFrame,
    ) -> FrameOutcome {
        match self.detect(frame).await {
            Ok(landmarks) => session.ingest_detection(
                frame.frame_number,
                frame.timestamp,
                landmarks.as_deref(),
                &frame.normalizer(),
            ),
            Err(error) => {
                warn!(
                    provider = self.provider.name(),
                    frame_number = frame.frame_number,
                    error_kind = error.kind(),
                    error = %error,
                    "Pose provider call failed"
                );
                let reason = match error {
                    ProviderError::Timeout { .. } => DropReason::ProviderTimeout,
                    ProviderError::DetectionFailed(_) | ProviderError::MalformedOutput(_) => {
                        DropReason::ProviderFailed
                    }
                };
                session.record_dropped_frame(frame.frame_number, reason)
            }
        }
    }

    /// Analyze a complete clip
    pub async fn analyze<I>(&self, frames: I) -> ClipAnalysis
    where
        I: IntoIterator<Item = VideoFrame>,
        I::IntoIter: Send,
    {
        let mut session = self.new_session();
        info!(
            session_id = %session.id(),
            provider = self.provider.name(),
            "Starting clip analysis"
        );
        for frame in frames {
            self.process_frame(&mut session, &frame).await;
        }
        session.finish()
    }

    /// Analyze frames as they arrive on a channel
    ///
    /// `on_frame` observes every outcome, for example to surface live phase
    /// changes. The analysis completes when the sender side is dropped.
    pub async fn analyze_stream<F>(
        &self,
        mut frames: mpsc::Receiver<VideoFrame>,
        mut on_frame: F,
    ) -> ClipAnalysis
    where
        F: FnMut(&VideoFrame, FrameOutcome) + Send,
    {
        let mut session = self.new_session();
        info!(
            session_id = %session.id(),
            provider = self.provider.name(),
            "Starting streamed clip analysis"
        );
        while let Some(frame) = frames.recv().await {
            let outcome = self.process_frame(&mut session, &frame).await;
            if let FrameOutcome::Processed {
                transition: Some(transition),
                ..
            } = outcome
            {
                debug!(
                    session_id = %session.id(),
                    from = %transition.from,
                    to = %transition.to,
                    "Live phase change"
                );
            }
            on_frame(&frame, outcome);
        }
        session.finish()
    }
}
