// ABOUTME: Bounded FIFO of smoothed pose frames for the live analysis window
// ABOUTME: Evicts the oldest frame once capacity is reached and offers named-landmark lookup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use std::collections::vec_deque::Iter;
use std::collections::VecDeque;
use swing_core::{Landmark, Point2, PoseFrame};

/// Fixed-capacity ring of the most recent frames, oldest first
#[derive(Debug, Clone)]
pub struct PoseHistory {
    frames: VecDeque<PoseFrame>,
    capacity: usize,
}

impl PoseHistory {
    /// Create an empty history; a zero capacity is raised to one
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            frames: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a frame, returning the evicted oldest frame when full
    pub fn push(&mut self, frame: PoseFrame) -> Option<PoseFrame> {
        let evicted = if self.frames.len() >= self.capacity {
            self.frames.pop_front()
        } else {
            None
        };
        self.frames.push_back(frame);
        evicted
    }

    /// Most recent frame
    #[must_use]
    pub fn latest(&self) -> Option<&PoseFrame> {
        self.frames.back()
    }

    /// Frame `n` steps before the latest (`back(0)` is the latest)
    #[must_use]
    pub fn back(&self, n: usize) -> Option<&PoseFrame> {
        self.frames
            .len()
            .checked_sub(n + 1)
            .and_then(|index| self.frames.get(index))
    }

    /// Number of frames held
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True when no frame has been pushed since creation or the last clear
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Maximum number of frames held
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Frames from oldest to newest
    pub fn iter(&self) -> Iter<'_, PoseFrame> {
        self.frames.iter()
    }

    /// Remove every frame
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Position of a landmark on the latest frame, if valid
    #[must_use]
    pub fn latest_landmark(&self, landmark: Landmark) -> Option<Point2> {
        self.latest().and_then(|frame| frame.position(landmark))
    }

    /// Position of a landmark `n` frames back, if valid
    #[must_use]
    pub fn landmark_at(&self, n: usize, landmark: Landmark) -> Option<Point2> {
        self.back(n).and_then(|frame| frame.position(landmark))
    }

    /// Position of a landmark on the latest frame, looked up by name
    #[must_use]
    pub fn landmark_by_name(&self, name: &str) -> Option<Point2> {
        Landmark::from_name(name).and_then(|landmark| self.latest_landmark(landmark))
    }
}

impl<'a> IntoIterator for &'a PoseHistory {
    type Item = &'a PoseFrame;
    type IntoIter = Iter<'a, PoseFrame>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn frame(n: u64) -> PoseFrame {
        PoseFrame::builder(n, n as f64 / 30.0)
            .landmark(Landmark::LeftWrist, 0.1 * n as f64, 0.5, 0.9)
            .build()
    }

    #[test]
    fn test_push_evicts_oldest_at_capacity() {
        let mut history = PoseHistory::new(3);
        for n in 0..3 {
            assert!(history.push(frame(n)).is_none());
        }
        let evicted = history.push(frame(3)).unwrap();
        assert_eq!(evicted.frame_number(), 0);
        assert_eq!(history.len(), 3);
        assert_eq!(history.latest().unwrap().frame_number(), 3);
        assert_eq!(history.back(2).unwrap().frame_number(), 1);
        assert!(history.back(3).is_none());
    }

    #[test]
    fn test_named_lookup() {
        let mut history = PoseHistory::new(5);
        history.push(frame(1));
        history.push(frame(2));
        let wrist = history.landmark_by_name("left_wrist").unwrap();
        assert!((wrist.x - 0.2).abs() < 1e-9);
        let previous = history.landmark_at(1, Landmark::LeftWrist).unwrap();
        assert!((previous.x - 0.1).abs() < 1e-9);
        assert!(history.latest_landmark(Landmark::Nose).is_none());
    }
}
