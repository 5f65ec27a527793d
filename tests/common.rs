// ABOUTME: Shared fixtures for integration tests: synthetic pose frames and a scripted swing clip
// ABOUTME: Provides deterministic frame builders, engine configs and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_precision_loss
)]
//! Shared test utilities for `swing_analyzer`
//!
//! The scripted swing places the shoulders at `(0.4, 0.3)` and `(0.6, 0.3)`
//! and moves the lead wrist relative to their center at 30 fps.

use std::sync::Once;

use swing_analyzer::{EngineConfig, Landmark, PoseFrame};

static INIT_LOGGER: Once = Once::new();

/// Frame rate of the scripted clips
pub const FPS: f64 = 30.0;

/// Confidence given to every synthetic landmark
pub const CONFIDENCE: f64 = 0.95;

/// Center of the synthetic shoulders
pub const SHOULDER_CENTER: (f64, f64) = (0.5, 0.3);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("warn")
            .with_test_writer()
            .try_init();
    });
}

/// Engine configuration with smoothing off so wrist positions stay exact
pub fn unsmoothed_config() -> EngineConfig {
    let mut config = EngineConfig::default();
    config.smoothing.enabled = false;
    config
}

/// Full-body frame with the lead wrist at `offset` from the shoulder center
pub fn swing_frame(frame_number: u64, timestamp: f64, offset: (f64, f64)) -> PoseFrame {
    let (cx, cy) = SHOULDER_CENTER;
    PoseFrame::builder(frame_number, timestamp)
        .landmark(Landmark::Nose, 0.5, 0.15, CONFIDENCE)
        .landmark(Landmark::LeftShoulder, 0.4, 0.3, CONFIDENCE)
        .landmark(Landmark::RightShoulder, 0.6, 0.3, CONFIDENCE)
        .landmark(Landmark::LeftElbow, 0.42, 0.42, CONFIDENCE)
        .landmark(Landmark::RightElbow, 0.58, 0.42, CONFIDENCE)
        .landmark(Landmark::LeftWrist, cx + offset.0, cy + offset.1, CONFIDENCE)
        .landmark(Landmark::RightWrist, 0.52, 0.5, CONFIDENCE)
        .landmark(Landmark::LeftHip, 0.45, 0.6, CONFIDENCE)
        .landmark(Landmark::RightHip, 0.55, 0.6, CONFIDENCE)
        .landmark(Landmark::LeftKnee, 0.43, 0.75, CONFIDENCE)
        .landmark(Landmark::RightKnee, 0.57, 0.75, CONFIDENCE)
        .landmark(Landmark::LeftAnkle, 0.4, 0.9, CONFIDENCE)
        .landmark(Landmark::RightAnkle, 0.6, 0.9, CONFIDENCE)
        .build()
}

/// Lead-wrist offsets of the scripted 30-frame swing
///
/// Address for frames 0-2, backswing from frame 3, downswing from frame 21,
/// impact at frame 27 and follow-through from frame 28.
pub fn swing_offsets() -> Vec<(f64, f64)> {
    let mut offsets = Vec::with_capacity(30);
    offsets.extend([(0.0, 0.05); 3]);
    offsets.extend([(-0.3, -0.25); 18]);
    offsets.push((-0.19, -0.05));
    for step in 1..=5 {
        let step = f64::from(step);
        offsets.push((0.015f64.mul_add(step, -0.19), 0.05f64.mul_add(step, -0.05)));
    }
    offsets.push((0.0, 0.3));
    offsets.extend([(0.16, 0.1); 2]);
    offsets
}

/// The scripted swing as pose frames at 30 fps
pub fn synthetic_swing_clip() -> Vec<PoseFrame> {
    swing_offsets()
        .into_iter()
        .enumerate()
        .map(|(i, offset)| {
            let n = i as u64;
            swing_frame(n, n as f64 / FPS, offset)
        })
        .collect()
}
