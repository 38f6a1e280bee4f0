// ABOUTME: Strength progression analysis over the estimated one-rep max series
// ABOUTME: Reports improvement rates, curve shape, and the next rounded milestone with time to reach
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: window sizes are small

use crate::config::AnalyticsConfig;
use crate::statistics;
use chrono::NaiveDate;
use coach_core::models::NormalizedSession;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Shape of the 1RM progression curve
///
/// `Logarithmic` is part of the published vocabulary but no classification
/// rule currently produces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionCurve {
    /// Steady gains
    Linear,
    /// Gains tapering off over time
    Logarithmic,
    /// Gains have stalled
    Plateau,
    /// Gains are shrinking
    Declining,
}

/// One point of the 1RM history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OneRepMaxPoint {
    /// Session date
    pub date: NaiveDate,
    /// Estimated one-rep max for that session
    pub estimated_one_rep_max: f64,
}

/// Next strength target
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
    /// Target 1RM, rounded up to the milestone step
    pub target: f64,
    /// Estimated weeks to reach the target
    pub estimated_weeks: Option<u32>,
    /// Human-readable timeframe
    pub timeframe: String,
}

/// Strength progression summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionSummary {
    /// Latest estimated 1RM
    pub current_one_rep_max: f64,
    /// Estimated 1RM of the session before the latest
    pub previous_one_rep_max: f64,
    /// Period-over-period improvement (%)
    pub improvement_rate: f64,
    /// Improvement since the first recorded session (%)
    pub total_improvement: f64,
    /// Full 1RM series
    pub history: Vec<OneRepMaxPoint>,
    /// Curve classification
    pub curve: ProgressionCurve,
    /// Next milestone
    pub next_milestone: Milestone,
}

impl ProgressionSummary {
    /// Result for histories too short to compare
    #[must_use]
    pub fn insufficient_data() -> Self {
        Self {
            current_one_rep_max: 0.0,
            previous_one_rep_max: 0.0,
            improvement_rate: 0.0,
            total_improvement: 0.0,
            history: Vec::new(),
            curve: ProgressionCurve::Linear,
            next_milestone: Milestone {
                target: 0.0,
                estimated_weeks: None,
                timeframe: "N/A".to_owned(),
            },
        }
    }
}

/// Strength progression analyzer
pub struct ProgressionAnalyzer;

impl ProgressionAnalyzer {
    /// Analyze the 1RM progression of a history
    #[must_use]
    pub fn analyze(sessions: &[NormalizedSession], config: &AnalyticsConfig) -> ProgressionSummary {
        let thresholds = &config.progression;
        let n = sessions.len();
        if n < thresholds.min_sessions.max(2) {
            return ProgressionSummary::insufficient_data();
        }

        let series: Vec<f64> = sessions.iter().map(|s| s.estimated_one_rep_max).collect();
        let current = series[n - 1];
        let previous = series[n - 2];
        let first = series[0];

        let improvement_rate = percent_change(previous, current);
        let total_improvement = percent_change(first, current);
        let curve = Self::classify_curve(&series, config);
        let next_milestone = Self::next_milestone(current, improvement_rate, config);

        debug!(
            current_one_rep_max = current,
            improvement_rate,
            ?curve,
            "strength progression analyzed"
        );

        ProgressionSummary {
            current_one_rep_max: current,
            previous_one_rep_max: previous,
            improvement_rate,
            total_improvement,
            history: sessions
                .iter()
                .map(|s| OneRepMaxPoint {
                    date: s.date,
                    estimated_one_rep_max: s.estimated_one_rep_max,
                })
                .collect(),
            curve,
            next_milestone,
        }
    }

    /// Classify the curve from the mean delta of the trailing window
    #[must_use]
    pub fn classify_curve(series: &[f64], config: &AnalyticsConfig) -> ProgressionCurve {
        let thresholds = &config.progression;
        let window = thresholds.curve_window.max(2);
        if series.len() < window {
            return ProgressionCurve::Linear;
        }

        let recent = &series[series.len() - window..];
        let deltas: Vec<f64> = recent.windows(2).map(|pair| pair[1] - pair[0]).collect();
        let average_delta = statistics::mean(&deltas);

        if average_delta < thresholds.plateau_delta {
            ProgressionCurve::Plateau
        } else if average_delta < thresholds.declining_delta {
            ProgressionCurve::Declining
        } else {
            ProgressionCurve::Linear
        }
    }

    /// Next rounded target and the weeks needed at the current improvement rate
    #[must_use]
    pub fn next_milestone(current: f64, improvement_rate: f64, config: &AnalyticsConfig) -> Milestone {
        let thresholds = &config.progression;
        let step = thresholds.milestone_step;
        let target = if step > 0.0 {
            (current / step).ceil() * step
        } else {
            current
        };

        let weekly_gain = current * improvement_rate / 100.0;
        let weeks = if improvement_rate > 0.0 && weekly_gain > 0.0 {
            let raw = ((target - current) / weekly_gain).ceil().max(0.0);
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let weeks = raw.min(f64::from(u32::MAX)) as u32;
            weeks
        } else {
            thresholds.fallback_weeks
        };

        Milestone {
            target,
            estimated_weeks: Some(weeks),
            timeframe: format!("{weeks} weeks"),
        }
    }
}

fn percent_change(from: f64, to: f64) -> f64 {
    if from <= 0.0 {
        return 0.0;
    }
    (to - from) / from * 100.0
}
