// ABOUTME: Error types for the pose-estimation provider boundary
// ABOUTME: Covers detection failures, per-frame timeouts, and malformed landmark output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Provider error types.
//!
//! Analysis itself never fails: missing data is carried as sentinels and
//! degraded defaults. Only the call into the external pose provider can
//! produce an error, and the pipeline answers every variant by dropping the
//! frame and continuing.

use thiserror::Error;

/// Errors produced while obtaining landmarks for one frame
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The provider ran but could not produce a result for the frame
    #[error("Pose detection failed: {0}")]
    DetectionFailed(String),

    /// The provider did not answer within the per-frame budget
    #[error("Pose detection timed out after {timeout_ms} ms")]
    Timeout {
        /// Budget that was exceeded, in milliseconds
        timeout_ms: u64,
    },

    /// The provider answered with data the engine cannot interpret
    #[error("Malformed provider output: {0}")]
    MalformedOutput(String),
}

impl ProviderError {
    /// Create a detection failure error
    #[must_use]
    pub fn detection_failed(details: impl Into<String>) -> Self {
        Self::DetectionFailed(details.into())
    }

    /// Create a malformed output error
    #[must_use]
    pub fn malformed(details: impl Into<String>) -> Self {
        Self::MalformedOutput(details.into())
    }

    /// Short machine-readable label used in log fields
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::DetectionFailed(_) => "detection_failed",
            Self::Timeout { .. } => "timeout",
            Self::MalformedOutput(_) => "malformed_output",
        }
    }
}

/// Result alias for provider calls
pub type ProviderResult<T> = Result<T, ProviderError>;
