// ABOUTME: Selects the compact landmark subset from provider output and gates it on confidence
// ABOUTME: Rejected, missing or out-of-frame landmarks become zero-confidence sentinels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use swing_core::{KeypointObservation, Landmark, PoseFrame, RawLandmark};
use tracing::debug;

use crate::config::engine::ProviderConfig;
use crate::normalizer::LetterboxNormalizer;

/// Confidence gate between provider landmarks and pose frames
#[derive(Debug, Clone, Default)]
pub struct LandmarkGate {
    config: ProviderConfig,
}

impl LandmarkGate {
    /// Create a gate with the given thresholds
    #[must_use]
    pub const fn new(config: ProviderConfig) -> Self {
        Self { config }
    }

    /// Thresholds in use
    #[must_use]
    pub const fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// True when visibility, presence and their average all clear the thresholds
    #[must_use]
    pub fn accepts(&self, raw: &RawLandmark) -> bool {
        raw.visibility.is_finite()
            && raw.presence.is_finite()
            && raw.combined_confidence() > self.config.min_combined_confidence
            && raw.visibility > self.config.min_visibility
            && raw.presence > self.config.min_presence
    }

    /// Pick the compact landmarks out of a provider landmark list
    ///
    /// Always returns one observation per compact landmark. Indices missing
    /// from a short list yield sentinels.
    #[must_use]
    pub fn select(
        &self,
        raw: &[RawLandmark],
        normalizer: &LetterboxNormalizer,
    ) -> Vec<KeypointObservation> {
        Landmark::ALL
            .iter()
            .map(|&landmark| {
                raw.get(landmark.provider_index())
                    .filter(|candidate| self.accepts(candidate))
                    .and_then(|candidate| {
                        normalizer.normalize(candidate.position()).map(|position| {
                            KeypointObservation::new(
                                landmark.index(),
                                position,
                                candidate.combined_confidence().clamp(0.0, 1.0),
                            )
                        })
                    })
                    .unwrap_or_else(|| KeypointObservation::sentinel(landmark.index()))
            })
            .collect()
    }

    /// Build an unsmoothed pose frame from provider output
    #[must_use]
    pub fn build_frame(
        &self,
        frame_number: u64,
        timestamp: f64,
        raw: &[RawLandmark],
        normalizer: &LetterboxNormalizer,
    ) -> PoseFrame {
        let frame = PoseFrame::new(frame_number, timestamp, self.select(raw, normalizer));
        debug!(
            frame_number,
            provided = raw.len(),
            accepted = frame.valid_landmark_count(),
            "Gated provider landmarks"
        );
        frame
    }
}
