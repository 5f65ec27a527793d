// ABOUTME: Descriptive statistics shared by the biomechanics summary and trend analyzer
// ABOUTME: Mean, population standard deviation and a bounded consistency score
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Swing Analyzer Contributors

use tracing::debug;

/// Convert a sample count to `f64`, saturating at `u32::MAX`
#[inline]
pub(crate) fn count_to_f64(count: usize) -> f64 {
    match u32::try_from(count) {
        Ok(n) => f64::from(n),
        Err(e) => {
            debug!(
                data_points = count,
                error = %e,
                "Sample count conversion to u32 failed, using u32::MAX"
            );
            f64::from(u32::MAX)
        }
    }
}

/// Arithmetic mean; `0.0` for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / count_to_f64(values.len())
}

/// Population standard deviation; `0.0` for an empty slice
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    let variance = values
        .iter()
        .map(|v| (v - avg).powi(2))
        .sum::<f64>()
        / count_to_f64(values.len());
    variance.sqrt()
}

/// Largest value; `0.0` for an empty slice
#[must_use]
pub fn peak(values: &[f64]) -> f64 {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(0.0)
}

/// Consistency heuristic `max(0, 1 - stddev / max)`, in `[0, 1]`
///
/// Zero when the series is empty or its maximum is not positive.
#[must_use]
pub fn consistency(values: &[f64]) -> f64 {
    let max = peak(values);
    if values.is_empty() || max <= 0.0 {
        return 0.0;
    }
    (1.0 - std_dev(values) / max).clamp(0.0, 1.0)
}
