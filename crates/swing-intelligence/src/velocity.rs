// ABOUTME: Finite-difference landmark velocity over the pose history
// ABOUTME: Also extracts the trailing high-speed impact window of the lead wrist
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Velocity Estimator
//!
//! Velocity is `Δposition / Δt` between a frame and the closest earlier
//! frame on which the same landmark is valid. Anything that prevents a
//! well-defined difference (fewer than two valid samples, a non-positive
//! time step, an unavailable landmark) yields the zero vector.

use swing_core::{Landmark, Point2, PoseFrame};

use crate::history::PoseHistory;

/// Velocity between two frames in normalized units per second
#[must_use]
pub fn velocity_between(previous: &PoseFrame, current: &PoseFrame, landmark: Landmark) -> Point2 {
    let (Some(from), Some(to)) = (previous.position(landmark), current.position(landmark)) else {
        return Point2::ZERO;
    };
    let dt = current.timestamp() - previous.timestamp();
    if dt.is_nan() || dt <= 0.0 {
        return Point2::ZERO;
    }
    let velocity = (to - from) * (1.0 / dt);
    if velocity.is_finite() {
        velocity
    } else {
        Point2::ZERO
    }
}

/// Velocity of a landmark on the latest history frame
#[must_use]
pub fn landmark_velocity(history: &PoseHistory, landmark: Landmark) -> Point2 {
    let mut frames = history.iter().rev();
    let Some(current) = frames.next() else {
        return Point2::ZERO;
    };
    if current.position(landmark).is_none() {
        return Point2::ZERO;
    }
    frames
        .find(|frame| frame.position(landmark).is_some())
        .map_or(Point2::ZERO, |previous| {
            velocity_between(previous, current, landmark)
        })
}

/// Per-frame velocities over an ordered frame sequence
///
/// Each entry is measured against the closest earlier frame with the
/// landmark valid; the first valid frame is zero.
#[must_use]
pub fn velocity_series<'a>(
    frames: impl IntoIterator<Item = &'a PoseFrame>,
    landmark: Landmark,
) -> Vec<Point2> {
    let mut last_valid: Option<&PoseFrame> = None;
    frames
        .into_iter()
        .map(|frame| {
            let velocity = last_valid.map_or(Point2::ZERO, |previous| {
                velocity_between(previous, frame, landmark)
            });
            if frame.position(landmark).is_some() {
                last_valid = Some(frame);
            }
            velocity
        })
        .collect()
}

/// Per-frame speeds (velocity magnitudes) over an ordered frame sequence
#[must_use]
pub fn speeds<'a>(frames: impl IntoIterator<Item = &'a PoseFrame>, landmark: Landmark) -> Vec<f64> {
    velocity_series(frames, landmark)
        .into_iter()
        .map(Point2::length)
        .collect()
}

/// Trailing run of frames whose landmark speed exceeds `threshold`
///
/// Returned oldest first. Empty when the latest frame is below threshold.
#[must_use]
pub fn impact_window<'a>(
    frames: impl IntoIterator<Item = &'a PoseFrame>,
    landmark: Landmark,
    threshold: f64,
) -> Vec<&'a PoseFrame> {
    let frames: Vec<&PoseFrame> = frames.into_iter().collect();
    let frame_speeds = speeds(frames.iter().copied(), landmark);
    let run = frame_speeds
        .iter()
        .rev()
        .take_while(|speed| **speed > threshold)
        .count();
    frames[frames.len() - run..].to_vec()
}
