// ABOUTME: Pose-estimation provider boundary: the async provider trait and the frame it consumes
// ABOUTME: Providers return at most one 33-point landmark set per video frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! # Pose Providers
//!
//! The pose-estimation model is an external collaborator. The engine only
//! sees its output through [`PoseProvider`]: zero or one set of
//! [`RawLandmark`]s in the provider's 33-point layout, with coordinates
//! normalized to the square letterbox the model was fed.
//!
//! Provider calls are the only suspension point in the pipeline. The clip
//! driver bounds every call with a timeout and drops frames whose call fails
//! or times out.

/// Replay provider for recorded landmark data
pub mod recorded_provider;

pub use recorded_provider::RecordedPoseProvider;

use async_trait::async_trait;
use bytes::Bytes;
use swing_core::{ProviderResult, RawLandmark};
use swing_intelligence::LetterboxNormalizer;

/// One decoded video frame handed to a provider
#[derive(Debug, Clone)]
pub struct VideoFrame {
    /// Position of the frame in the clip
    pub frame_number: u64,
    /// Capture time in seconds from the start of the clip
    pub timestamp: f64,
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Encoded or raw pixel data, opaque to the engine
    pub pixels: Bytes,
}

impl VideoFrame {
    /// Create a frame without pixel data
    #[must_use]
    pub const fn new(frame_number: u64, timestamp: f64, width: u32, height: u32) -> Self {
        Self {
            frame_number,
            timestamp,
            width,
            height,
            pixels: Bytes::new(),
        }
    }

    /// Attach pixel data
    #[must_use]
    pub fn with_pixels(mut self, pixels: impl Into<Bytes>) -> Self {
        self.pixels = pixels.into();
        self
    }

    /// Normalizer that undoes the square letterbox for this frame size
    #[must_use]
    pub fn normalizer(&self) -> LetterboxNormalizer {
        LetterboxNormalizer::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Source of body landmarks for video frames
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync`; one provider may serve several
/// sessions running on separate tasks.
#[async_trait]
pub trait PoseProvider: Send + Sync {
    /// Provider name used in log fields
    fn name(&self) -> &'static str;

    /// Detect the body pose in one frame
    ///
    /// Returns `Ok(None)` when no person is visible.
    ///
    /// # Errors
    ///
    /// Returns [`swing_core::ProviderError`] when detection fails or the
    /// provider output cannot be interpreted
    async fn detect(&self, frame: &VideoFrame) -> ProviderResult<Option<Vec<RawLandmark>>>;
}
