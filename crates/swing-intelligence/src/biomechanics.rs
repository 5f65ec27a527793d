// ABOUTME: Full-clip biomechanics summary: per-joint series, average, peak and consistency
// ABOUTME: Measures joint angles per frame in parallel using the shared geometry module
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use std::collections::BTreeMap;
use swing_core::{BiomechanicsSummary, JointSummary, PoseFrame, TrackedMetric};

use crate::geometry::JointAngles;
use crate::statistics;

/// Summarize every tracked metric across a set of frames
///
/// Metrics that are unavailable on every frame are left out of `joints`.
#[must_use]
pub fn summarize(frames: &[PoseFrame]) -> BiomechanicsSummary {
    summarize_angles(&JointAngles::measure_clip(frames))
}

/// Summarize angles already measured with [`JointAngles::measure_clip`]
#[must_use]
pub fn summarize_angles(angles: &[JointAngles]) -> BiomechanicsSummary {
    let joints = TrackedMetric::ALL
        .iter()
        .filter_map(|&metric| {
            let series = JointAngles::series(angles, metric);
            if series.is_empty() {
                return None;
            }
            Some((
                metric,
                JointSummary {
                    average: statistics::mean(&series),
                    peak: statistics::peak(&series),
                    consistency: statistics::consistency(&series),
                    series,
                },
            ))
        })
        .collect::<BTreeMap<_, _>>();

    BiomechanicsSummary {
        frame_count: angles.len(),
        joints,
    }
}
