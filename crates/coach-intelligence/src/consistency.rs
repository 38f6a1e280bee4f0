// ABOUTME: Training consistency analysis from inter-session gaps and weekly buckets
// ABOUTME: Computes frequency, regularity score, streaks, best week, gap trend, and adherence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::cast_precision_loss)] // Safe: day counts and session counts are small

use crate::config::AnalyticsConfig;
use crate::statistics;
use chrono::{Datelike, Duration, NaiveDate};
use coach_core::models::NormalizedSession;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Direction of session spacing over time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsistencyTrend {
    /// Gaps are getting shorter
    Improving,
    /// Gaps are roughly unchanged
    Stable,
    /// Gaps are getting longer
    Declining,
}

/// Summed volume for one Sunday-start week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyVolume {
    /// Sunday that starts the week
    pub week_start: NaiveDate,
    /// Total volume across the week
    pub volume: f64,
    /// Sessions logged in the week
    pub sessions: usize,
}

/// Training consistency summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencySummary {
    /// Sessions per week
    pub frequency: f64,
    /// Regularity score (0-100)
    pub consistency_score: f64,
    /// Longest run of sessions separated by short gaps
    pub longest_streak: usize,
    /// Mean days between sessions
    pub average_gap_days: f64,
    /// Week with the highest summed volume
    pub best_week: Option<WeeklyVolume>,
    /// Recent gaps compared with early gaps
    pub trend: ConsistencyTrend,
    /// Expected sessions that were not logged
    pub missed_sessions: u32,
    /// Logged sessions as a percentage of expected (0-100)
    pub adherence: f64,
}

impl ConsistencySummary {
    /// Result for histories without any gap to measure
    #[must_use]
    pub const fn insufficient_data() -> Self {
        Self {
            frequency: 0.0,
            consistency_score: 0.0,
            longest_streak: 0,
            average_gap_days: 0.0,
            best_week: None,
            trend: ConsistencyTrend::Stable,
            missed_sessions: 0,
            adherence: 0.0,
        }
    }
}

/// Training consistency analyzer
pub struct ConsistencyAnalyzer;

impl ConsistencyAnalyzer {
    /// Analyze how regularly sessions were logged
    #[must_use]
    pub fn analyze(sessions: &[NormalizedSession], config: &AnalyticsConfig) -> ConsistencySummary {
        let thresholds = &config.consistency;
        let (Some(first), Some(last)) = (sessions.first(), sessions.last()) else {
            return ConsistencySummary::insufficient_data();
        };
        if sessions.len() < 2 {
            return ConsistencySummary::insufficient_data();
        }

        let gaps = Self::gaps(sessions);
        let gap_days: Vec<f64> = gaps.iter().map(|g| *g as f64).collect();
        let total_days = statistics::days_between(first.date, last.date);

        let frequency = sessions.len() as f64 / statistics::weeks_between(first.date, last.date);
        let consistency_score = Self::consistency_score(&gap_days, config);
        let longest_streak = Self::longest_streak(&gaps, thresholds.streak_max_gap_days);
        let average_gap_days = statistics::mean(&gap_days);
        let best_week = Self::best_week(sessions);
        let trend = Self::gap_trend(&gap_days, config);

        let full_weeks = u32::try_from(total_days.max(0) / 7).unwrap_or(u32::MAX);
        let expected = full_weeks.saturating_mul(thresholds.expected_sessions_per_week);
        let actual = u32::try_from(sessions.len()).unwrap_or(u32::MAX);
        let missed_sessions = expected.saturating_sub(actual);
        let adherence = if expected == 0 {
            100.0
        } else {
            (f64::from(actual) / f64::from(expected) * 100.0).clamp(0.0, 100.0)
        };

        debug!(
            sessions = sessions.len(),
            consistency_score,
            longest_streak,
            adherence,
            "training consistency analyzed"
        );

        ConsistencySummary {
            frequency,
            consistency_score,
            longest_streak,
            average_gap_days,
            best_week,
            trend,
            missed_sessions,
            adherence,
        }
    }

    /// Days between consecutive sessions
    #[must_use]
    pub fn gaps(sessions: &[NormalizedSession]) -> Vec<i64> {
        sessions
            .windows(2)
            .map(|pair| statistics::days_between(pair[0].date, pair[1].date))
            .collect()
    }

    /// 100 minus a penalty proportional to the RMS deviation from the ideal gap, floored at 0
    #[must_use]
    pub fn consistency_score(gap_days: &[f64], config: &AnalyticsConfig) -> f64 {
        if gap_days.is_empty() {
            return 0.0;
        }
        let thresholds = &config.consistency;
        let deviations: Vec<f64> = gap_days
            .iter()
            .map(|gap| {
                let diff = gap - thresholds.ideal_gap_days;
                diff * diff
            })
            .collect();
        let rms = statistics::mean(&deviations).sqrt();
        thresholds
            .score_penalty_per_day
            .mul_add(-rms, 100.0)
            .clamp(0.0, 100.0)
    }

    /// Longest run of sessions whose gaps stay within `max_gap_days`
    #[must_use]
    pub fn longest_streak(gaps: &[i64], max_gap_days: i64) -> usize {
        let mut longest = 1;
        let mut current = 1;
        for gap in gaps {
            if *gap <= max_gap_days {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 1;
            }
        }
        longest
    }

    /// Sunday that starts the week containing `date`
    #[must_use]
    pub fn week_start(date: NaiveDate) -> NaiveDate {
        date - Duration::days(i64::from(date.weekday().num_days_from_sunday()))
    }

    fn best_week(sessions: &[NormalizedSession]) -> Option<WeeklyVolume> {
        let mut weeks: BTreeMap<NaiveDate, WeeklyVolume> = BTreeMap::new();
        for session in sessions {
            let week_start = Self::week_start(session.date);
            let entry = weeks.entry(week_start).or_insert_with(|| WeeklyVolume {
                week_start,
                volume: 0.0,
                sessions: 0,
            });
            entry.volume += session.volume;
            entry.sessions += 1;
        }

        // Earliest week wins ties
        weeks.into_values().fold(None, |best, week| match best {
            Some(current) if current.volume >= week.volume => Some(current),
            _ => Some(week),
        })
    }

    fn gap_trend(gap_days: &[f64], config: &AnalyticsConfig) -> ConsistencyTrend {
        let thresholds = &config.consistency;
        let window = thresholds.trend_window.min(gap_days.len());
        if window == 0 {
            return ConsistencyTrend::Stable;
        }

        let early = statistics::mean(&gap_days[..window]);
        let recent = statistics::mean(&gap_days[gap_days.len() - window..]);
        let tolerance = thresholds.trend_tolerance;

        if recent < early * (1.0 - tolerance) {
            ConsistencyTrend::Improving
        } else if recent > early * (1.0 + tolerance) {
            ConsistencyTrend::Declining
        } else {
            ConsistencyTrend::Stable
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    fn sessions_at(offsets: &[i64]) -> Vec<NormalizedSession> {
        // 2025-01-05 is a Sunday
        let start = NaiveDate::from_ymd_opt(2025, 1, 5).unwrap_or_default();
        offsets
            .iter()
            .enumerate()
            .map(|(i, offset)| NormalizedSession {
                date: start + Duration::days(*offset),
                sets: 3,
                reps: vec![5; 3],
                weights: vec![80.0; 3],
                volume: 1000.0 + 100.0 * f64::from(u32::try_from(i).unwrap_or_default()),
                max_weight: 80.0,
                intensity: 100.0,
                estimated_one_rep_max: 92.0,
            })
            .collect()
    }

    #[test]
    fn test_single_session_is_neutral() {
        let summary = ConsistencyAnalyzer::analyze(&sessions_at(&[0]), &AnalyticsConfig::default());
        assert_eq!(summary, ConsistencySummary::insufficient_data());
    }

    #[test]
    fn test_ideal_spacing_scores_full_marks() {
        let summary = ConsistencyAnalyzer::analyze(
            &sessions_at(&[0, 2, 4, 6, 8, 10, 12, 14]),
            &AnalyticsConfig::default(),
        );
        assert!((summary.consistency_score - 100.0).abs() < 1e-9);
        assert_eq!(summary.longest_streak, 8);
        assert!((summary.average_gap_days - 2.0).abs() < 1e-9);
        assert_eq!(summary.trend, ConsistencyTrend::Stable);
        // 14 days: 2 full weeks x 3 = 6 expected, 8 logged
        assert_eq!(summary.missed_sessions, 0);
        assert!((summary.adherence - 100.0).abs() < f64::EPSILON);
        assert!((summary.frequency - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_irregular_gaps_floor_at_zero() {
        let summary = ConsistencyAnalyzer::analyze(
            &sessions_at(&[0, 1, 31, 32, 62]),
            &AnalyticsConfig::default(),
        );
        assert!(summary.consistency_score.abs() < f64::EPSILON);
        assert_eq!(summary.longest_streak, 2);
    }

    #[test]
    fn test_gap_trend_directions() {
        let config = AnalyticsConfig::default();
        let improving = ConsistencyAnalyzer::analyze(&sessions_at(&[0, 5, 10, 15, 17, 19, 21]), &config);
        assert_eq!(improving.trend, ConsistencyTrend::Improving);

        let declining = ConsistencyAnalyzer::analyze(&sessions_at(&[0, 2, 4, 6, 11, 16, 21]), &config);
        assert_eq!(declining.trend, ConsistencyTrend::Declining);
    }

    #[test]
    fn test_best_week_uses_sunday_buckets() {
        // Days 0,2 fall in week of Jan 5; 7,9,11 in week of Jan 12
        let summary =
            ConsistencyAnalyzer::analyze(&sessions_at(&[0, 2, 7, 9, 11]), &AnalyticsConfig::default());
        let Some(best) = summary.best_week else {
            panic!("two weeks of data must produce a best week");
        };
        assert_eq!(best.week_start, NaiveDate::from_ymd_opt(2025, 1, 12).unwrap_or_default());
        assert_eq!(best.sessions, 3);
        assert!((best.volume - 3900.0).abs() < 1e-9);
    }

    #[test]
    fn test_adherence_and_missed_sessions() {
        // 28 days: 4 full weeks x 3 = 12 expected, 4 logged
        let summary =
            ConsistencyAnalyzer::analyze(&sessions_at(&[0, 7, 14, 28]), &AnalyticsConfig::default());
        assert_eq!(summary.missed_sessions, 8);
        assert!((summary.adherence - 100.0 / 3.0).abs() < 1e-9);
    }
}
