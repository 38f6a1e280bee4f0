// ABOUTME: Volume trend analysis using least-squares regression over the session index
// ABOUTME: Classifies direction, volatility, weekly growth rate, and recent-vs-overall performance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: session counts are small

use crate::config::AnalyticsConfig;
use crate::statistics;
use coach_core::models::NormalizedSession;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Direction of the volume trend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Volume is growing session over session
    Increasing,
    /// Volume is shrinking session over session
    Decreasing,
    /// No meaningful slope
    Stable,
    /// Volume varies too much for the slope to be trusted
    Volatile,
}

impl TrendDirection {
    /// Fixed coaching text for this trend
    #[must_use]
    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Increasing => "Great progress! Keep up the current training approach",
            Self::Decreasing => {
                "Volume is dropping. Review recovery, sleep, and nutrition before adding load"
            }
            Self::Volatile => "Training volume is inconsistent. Aim for steadier session loads",
            Self::Stable => "Volume is steady. Consider a small overload to keep progressing",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Increasing => "increasing",
            Self::Decreasing => "decreasing",
            Self::Stable => "stable",
            Self::Volatile => "volatile",
        };
        f.write_str(label)
    }
}

/// Recent sessions compared with the whole history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecentPerformance {
    /// Recent mean is above the overall mean by more than the band
    AboveAverage,
    /// Recent mean is within the band
    Average,
    /// Recent mean is below the overall mean by more than the band
    BelowAverage,
}

/// Volume trend summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendSummary {
    /// Trend classification
    pub trend: TrendDirection,
    /// Confidence in the trend (R-squared, 0-1)
    pub trend_strength: f64,
    /// Regression slope in volume per session
    pub slope: f64,
    /// Regression intercept
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    /// Average volume growth per week
    pub average_growth_rate: f64,
    /// Population standard deviation of volume
    pub volatility: f64,
    /// Recent-vs-overall classification
    pub recent_performance: RecentPerformance,
    /// Coaching text
    pub recommendation: String,
}

impl TrendSummary {
    /// Result for histories too short to regress
    #[must_use]
    pub fn insufficient_data() -> Self {
        Self {
            trend: TrendDirection::Stable,
            trend_strength: 0.0,
            slope: 0.0,
            intercept: 0.0,
            r_squared: 0.0,
            average_growth_rate: 0.0,
            volatility: 0.0,
            recent_performance: RecentPerformance::Average,
            recommendation: "need more data".to_owned(),
        }
    }
}

/// Volume trend analyzer
pub struct TrendAnalyzer;

impl TrendAnalyzer {
    /// Analyze the volume trend of a history
    #[must_use]
    pub fn analyze(sessions: &[NormalizedSession], config: &AnalyticsConfig) -> TrendSummary {
        let thresholds = &config.trend;
        let (Some(first), Some(last)) = (sessions.first(), sessions.last()) else {
            return TrendSummary::insufficient_data();
        };
        if sessions.len() < thresholds.min_sessions {
            return TrendSummary::insufficient_data();
        }

        let volumes: Vec<f64> = sessions.iter().map(|s| s.volume).collect();
        let Some(regression) = statistics::linear_regression(&volumes) else {
            return TrendSummary::insufficient_data();
        };

        let volatility = statistics::std_dev(&volumes);
        let trend = Self::classify(
            regression.slope,
            statistics::coefficient_of_variation(&volumes),
            config,
        );

        let weeks = statistics::weeks_between(first.date, last.date);
        let average_growth_rate = regression.slope * volumes.len() as f64 / weeks;

        let recent_performance = Self::recent_performance(&volumes, config);

        debug!(
            sessions = sessions.len(),
            slope = regression.slope,
            r_squared = regression.r_squared,
            %trend,
            "volume trend analyzed"
        );

        TrendSummary {
            trend,
            trend_strength: regression.r_squared.clamp(0.0, 1.0),
            slope: regression.slope,
            intercept: regression.intercept,
            r_squared: regression.r_squared,
            average_growth_rate,
            volatility,
            recent_performance,
            recommendation: trend.recommendation().to_owned(),
        }
    }

    /// Classify a slope, letting high relative variation override its sign
    #[must_use]
    pub fn classify(slope: f64, coefficient_of_variation: f64, config: &AnalyticsConfig) -> TrendDirection {
        let thresholds = &config.trend;
        if coefficient_of_variation > thresholds.volatility_cv {
            return TrendDirection::Volatile;
        }
        if slope.abs() < thresholds.stable_slope {
            TrendDirection::Stable
        } else if slope > thresholds.stable_slope {
            TrendDirection::Increasing
        } else if slope < -thresholds.stable_slope {
            TrendDirection::Decreasing
        } else {
            TrendDirection::Stable
        }
    }

    fn recent_performance(volumes: &[f64], config: &AnalyticsConfig) -> RecentPerformance {
        let thresholds = &config.trend;
        let overall = statistics::mean(volumes);
        if overall <= 0.0 {
            return RecentPerformance::Average;
        }

        let window = thresholds.recent_window.min(volumes.len());
        let recent = statistics::mean(&volumes[volumes.len() - window..]);
        let band = thresholds.recent_performance_band;

        if recent > overall * (1.0 + band) {
            RecentPerformance::AboveAverage
        } else if recent < overall * (1.0 - band) {
            RecentPerformance::BelowAverage
        } else {
            RecentPerformance::Average
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn history(volumes: &[f64], spacing_days: i64) -> Vec<NormalizedSession> {
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default();
        volumes
            .iter()
            .enumerate()
            .map(|(i, volume)| NormalizedSession {
                date: start + Duration::days(spacing_days * i64::try_from(i).unwrap_or_default()),
                sets: 3,
                reps: vec![5, 5, 5],
                weights: vec![100.0, 100.0, 100.0],
                volume: *volume,
                max_weight: 100.0,
                intensity: 100.0,
                estimated_one_rep_max: 115.0,
            })
            .collect()
    }

    #[test]
    fn test_two_sessions_need_more_data() {
        let summary = TrendAnalyzer::analyze(&history(&[1000.0, 1100.0], 2), &AnalyticsConfig::default());
        assert_eq!(summary.trend, TrendDirection::Stable);
        assert!(summary.trend_strength.abs() < f64::EPSILON);
        assert!(summary.r_squared.abs() < f64::EPSILON);
        assert_eq!(summary.recommendation, "need more data");
    }

    #[test]
    fn test_increasing_trend_and_growth_rate() {
        let volumes: Vec<f64> = (0..8).map(|i| f64::from(i).mul_add(50.0, 1000.0)).collect();
        let summary = TrendAnalyzer::analyze(&history(&volumes, 7), &AnalyticsConfig::default());

        assert_eq!(summary.trend, TrendDirection::Increasing);
        assert!((summary.slope - 50.0).abs() < 1e-9);
        assert!((summary.trend_strength - 1.0).abs() < 1e-9);
        // 49 days span 7 weeks: 50 * 8 / 7
        assert!((summary.average_growth_rate - 400.0 / 7.0).abs() < 1e-9);
        assert_eq!(summary.recent_performance, RecentPerformance::AboveAverage);
    }

    #[test]
    fn test_decreasing_trend() {
        let summary = TrendAnalyzer::analyze(
            &history(&[1400.0, 1300.0, 1200.0, 1100.0], 2),
            &AnalyticsConfig::default(),
        );
        assert_eq!(summary.trend, TrendDirection::Decreasing);
        assert_eq!(summary.recent_performance, RecentPerformance::Average);
    }

    #[test]
    fn test_volatility_overrides_slope() {
        let summary = TrendAnalyzer::analyze(
            &history(&[200.0, 1500.0, 300.0, 1800.0, 250.0, 2000.0], 2),
            &AnalyticsConfig::default(),
        );
        assert_eq!(summary.trend, TrendDirection::Volatile);
        assert!(summary.volatility > 0.0);
    }

    #[test]
    fn test_flat_history_is_stable_with_zero_strength() {
        let summary = TrendAnalyzer::analyze(&history(&[900.0; 5], 3), &AnalyticsConfig::default());
        assert_eq!(summary.trend, TrendDirection::Stable);
        assert!(summary.trend_strength.abs() < f64::EPSILON);
        assert!(summary.volatility.abs() < f64::EPSILON);
    }

    #[test]
    fn test_short_span_uses_one_week_minimum() {
        let summary = TrendAnalyzer::analyze(&history(&[100.0, 110.0, 120.0], 1), &AnalyticsConfig::default());
        assert!((summary.average_growth_rate - 30.0).abs() < 1e-9);
    }
}
