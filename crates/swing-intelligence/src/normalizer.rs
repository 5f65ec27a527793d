// ABOUTME: Undoes square letterbox padding applied before pose detection
// ABOUTME: Maps coordinates from the padded square back into the true image frame
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use swing_core::Point2;

/// Reverses the square letterbox a detector sees for a `width x height` image
///
/// The detector receives the image centered in a square of side
/// `max(width, height)`. Its normalized output is relative to that square.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterboxNormalizer {
    width: f64,
    height: f64,
}

impl LetterboxNormalizer {
    /// Create a normalizer for an image of the given pixel size
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Image width in pixels
    #[must_use]
    pub const fn width(&self) -> f64 {
        self.width
    }

    /// Image height in pixels
    #[must_use]
    pub const fn height(&self) -> f64 {
        self.height
    }

    /// Map a square-normalized point into image-normalized coordinates
    ///
    /// Returns `None` when the image size is not positive or the result falls
    /// outside `[0, 1]` on either axis; callers substitute the sentinel.
    #[must_use]
    pub fn normalize(&self, point: Point2) -> Option<Point2> {
        let positive_size = self.width > 0.0 && self.height > 0.0;
        if !positive_size || !point.is_finite() {
            return None;
        }

        let side = self.width.max(self.height);
        let pad_x = (side - self.width) / 2.0;
        let pad_y = (side - self.height) / 2.0;

        let x = point.x.mul_add(side, -pad_x) / self.width;
        let y = point.y.mul_add(side, -pad_y) / self.height;

        let in_range = (0.0..=1.0).contains(&x) && (0.0..=1.0).contains(&y);
        in_range.then_some(Point2::new(x, y))
    }
}
