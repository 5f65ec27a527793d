// ABOUTME: Confidence-weighted temporal smoothing of keypoint positions per landmark
// ABOUTME: Blends each raw point with a recency-weighted average of its recent samples
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

//! Temporal Smoothing Filter
//!
//! Each landmark index keeps its last few raw accepted samples. A new point
//! is blended with the recency-weighted average of those samples: lightly
//! when the detector is confident, heavily otherwise. High-confidence
//! samples also count for more inside the average.

use std::collections::{HashMap, VecDeque};
use swing_core::{KeypointObservation, Point2, PoseFrame};

use crate::config::engine::SmoothingConfig;

#[derive(Debug, Clone, Copy)]
struct Sample {
    position: Point2,
    confidence: f64,
}

/// Per-landmark smoothing state for one session
#[derive(Debug, Clone)]
pub struct TemporalSmoother {
    config: SmoothingConfig,
    samples: HashMap<usize, VecDeque<Sample>>,
}

impl TemporalSmoother {
    /// Create an empty smoother
    #[must_use]
    pub fn new(config: SmoothingConfig) -> Self {
        Self {
            config,
            samples: HashMap::new(),
        }
    }

    /// Smoothing settings in use
    #[must_use]
    pub const fn config(&self) -> &SmoothingConfig {
        &self.config
    }

    /// Number of raw samples currently held for a landmark index
    #[must_use]
    pub fn sample_count(&self, landmark_index: usize) -> usize {
        self.samples.get(&landmark_index).map_or(0, VecDeque::len)
    }

    /// Smooth one observation and record it
    ///
    /// Sentinels pass through untouched and are not recorded. With fewer than
    /// two recorded samples the raw point is returned unchanged.
    pub fn smooth(&mut self, observation: KeypointObservation) -> KeypointObservation {
        if !observation.is_valid() {
            return observation;
        }

        let max_samples = self.config.max_samples.max(1);
        let history = self.samples.entry(observation.landmark_index).or_default();
        history.push_back(Sample {
            position: observation.position,
            confidence: observation.confidence,
        });
        while history.len() > max_samples {
            history.pop_front();
        }

        if history.len() < 2 {
            return observation;
        }

        let average = weighted_average(history, &self.config);
        let blend = if observation.confidence > self.config.high_confidence_threshold {
            self.config.light_blend_factor
        } else {
            self.config.heavy_blend_factor
        };

        let smoothed = observation.position * (1.0 - blend) + average * blend;
        KeypointObservation::new(observation.landmark_index, smoothed, observation.confidence)
    }

    /// Smooth every keypoint of a frame, preserving frame number and timestamp
    #[must_use]
    pub fn smooth_frame(&mut self, frame: &PoseFrame) -> PoseFrame {
        if !self.config.enabled {
            return frame.clone();
        }
        let smoothed: Vec<KeypointObservation> = frame
            .keypoints()
            .iter()
            .map(|observation| self.smooth(*observation))
            .collect();
        PoseFrame::new(frame.frame_number(), frame.timestamp(), smoothed)
    }

    /// Drop all recorded samples
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}

/// Recency-weighted average; older samples get lower weight
fn weighted_average(history: &VecDeque<Sample>, config: &SmoothingConfig) -> Point2 {
    let mut total = Point2::ZERO;
    let mut total_weight = 0.0;

    for (i, sample) in history.iter().enumerate() {
        let mut weight = (i + 1) as f64;
        if sample.confidence > config.high_confidence_threshold {
            weight *= config.high_confidence_weight_boost;
        }
        total = total + sample.position * weight;
        total_weight += weight;
    }

    if total_weight > 0.0 {
        total * (1.0 / total_weight)
    } else {
        history.back().map_or(Point2::ZERO, |sample| sample.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn observation(x: f64, y: f64, confidence: f64) -> KeypointObservation {
        KeypointObservation::new(5, Point2::new(x, y), confidence)
    }

    #[test]
    fn test_first_sample_passes_through() {
        let mut smoother = TemporalSmoother::new(SmoothingConfig::default());
        let out = smoother.smooth(observation(0.3, 0.4, 0.8));
        assert_eq!(out.position, Point2::new(0.3, 0.4));
        assert_eq!(smoother.sample_count(5), 1);
    }

    #[test]
    fn test_sentinel_is_not_recorded() {
        let mut smoother = TemporalSmoother::new(SmoothingConfig::default());
        let out = smoother.smooth(KeypointObservation::sentinel(5));
        assert!(!out.is_valid());
        assert_eq!(smoother.sample_count(5), 0);
    }

    #[test]
    fn test_jump_is_damped_toward_history() {
        let mut smoother = TemporalSmoother::new(SmoothingConfig::default());
        smoother.smooth(observation(0.0, 0.0, 0.8));
        let out = smoother.smooth(observation(1.0, 0.0, 0.8));
        // weights 1 and 2 give an average of 2/3; heavy blend 0.6
        let expected = 0.4f64.mul_add(1.0, 0.6 * (2.0 / 3.0));
        assert!((out.position.x - expected).abs() < 1e-9);
    }

    #[test]
    fn test_history_is_capped() {
        let config = SmoothingConfig::default();
        let max = config.max_samples;
        let mut smoother = TemporalSmoother::new(config);
        for _ in 0..(max + 4) {
            smoother.smooth(observation(0.5, 0.5, 0.95));
        }
        assert_eq!(smoother.sample_count(5), max);
        smoother.reset();
        assert_eq!(smoother.sample_count(5), 0);
    }
}
