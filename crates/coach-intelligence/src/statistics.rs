// ABOUTME: Descriptive statistics and least-squares regression over small volume series
// ABOUTME: Guards every zero denominator so degenerate series yield zeros instead of NaN
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: series lengths are small session counts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Ordinary least-squares fit of values against their index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionResult {
    /// Slope of the regression line (change per session)
    pub slope: f64,
    /// Y-intercept of the regression line
    pub intercept: f64,
    /// Coefficient of determination (0 when the values have no variance)
    pub r_squared: f64,
}

/// Arithmetic mean, 0 for an empty slice
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance, 0 for an empty slice
#[must_use]
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let avg = mean(values);
    values
        .iter()
        .map(|v| {
            let diff = v - avg;
            diff * diff
        })
        .sum::<f64>()
        / values.len() as f64
}

/// Population standard deviation
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Standard deviation divided by mean, 0 when the mean is not positive
#[must_use]
pub fn coefficient_of_variation(values: &[f64]) -> f64 {
    let avg = mean(values);
    if avg <= 0.0 {
        return 0.0;
    }
    std_dev(values) / avg
}

/// Least-squares regression of `values` against indices `0..n`
///
/// Returns `None` with fewer than two points, since the slope is undefined.
#[must_use]
pub fn linear_regression(values: &[f64]) -> Option<RegressionResult> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let mean_x = (n - 1.0) / 2.0;
    let mean_y = mean(values);

    let (mut sxy, mut sxx) = (0.0, 0.0);
    for (i, y) in values.iter().enumerate() {
        let dx = i as f64 - mean_x;
        sxy = dx.mul_add(y - mean_y, sxy);
        sxx = dx.mul_add(dx, sxx);
    }

    let slope = sxy / sxx;
    let intercept = slope.mul_add(-mean_x, mean_y);

    let mut ss_res = 0.0;
    let mut ss_tot = 0.0;
    for (i, y) in values.iter().enumerate() {
        let predicted = slope.mul_add(i as f64, intercept);
        ss_res += (y - predicted) * (y - predicted);
        ss_tot += (y - mean_y) * (y - mean_y);
    }

    let r_squared = if ss_tot > 0.0 {
        (1.0 - ss_res / ss_tot).clamp(0.0, 1.0)
    } else {
        0.0
    };

    Some(RegressionResult {
        slope,
        intercept,
        r_squared,
    })
}

/// Whole days from `start` to `end` (negative if out of order)
#[must_use]
pub fn days_between(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Weeks spanned by two dates, never less than one
#[must_use]
pub fn weeks_between(start: NaiveDate, end: NaiveDate) -> f64 {
    (days_between(start, end) as f64 / 7.0).max(1.0)
}
