// ABOUTME: Plateau detection over the most recent sessions using coefficient-of-variation thresholds
// ABOUTME: Grades stagnation severity and suggests interventions and alternative exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AnalyticsConfig;
use crate::statistics;
use crate::trend::{TrendAnalyzer, TrendDirection, TrendSummary};
use chrono::NaiveDate;
use coach_core::models::NormalizedSession;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Stagnation severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlateauSeverity {
    /// Volume still varies noticeably
    Mild,
    /// Volume is flattening
    Moderate,
    /// Volume is essentially flat
    Severe,
}

impl PlateauSeverity {
    fn interventions(self) -> Vec<String> {
        let items: &[&str] = match self {
            Self::Severe => &[
                "Take a deload week at roughly 85% of current loads",
                "Switch rep ranges for the next training block",
                "Review sleep, nutrition, and recovery habits",
            ],
            Self::Moderate => &[
                "Introduce wave loading across working sets",
                "Add one extra set to the main lift",
            ],
            Self::Mild => &["Increase load by the smallest available increment"],
        };
        items.iter().map(|s| (*s).to_owned()).collect()
    }
}

impl fmt::Display for PlateauSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        };
        f.write_str(label)
    }
}

/// Plateau detection summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlateauSummary {
    /// Whether the recent window is flat and trendless
    pub is_plateaued: bool,
    /// First date of the plateaued window
    pub plateau_start: Option<NaiveDate>,
    /// Plateau length in weeks
    pub duration_weeks: u32,
    /// Severity grade, reported even when not plateaued
    pub severity: PlateauSeverity,
    /// Suggested interventions
    pub interventions: Vec<String>,
    /// Generic alternative exercise suggestions
    pub alternative_exercises: Vec<String>,
    /// Plateau score (0-100)
    pub plateau_score: u32,
    /// Coefficient of variation of the window volume
    pub coefficient_of_variation: f64,
}

impl PlateauSummary {
    /// Result for histories shorter than the detection window
    #[must_use]
    pub const fn insufficient_data() -> Self {
        Self {
            is_plateaued: false,
            plateau_start: None,
            duration_weeks: 0,
            severity: PlateauSeverity::Mild,
            interventions: Vec::new(),
            alternative_exercises: Vec::new(),
            plateau_score: 0,
            coefficient_of_variation: 0.0,
        }
    }
}

/// Plateau detector
pub struct PlateauDetector;

impl PlateauDetector {
    /// Trailing sessions examined for a plateau
    #[must_use]
    pub fn recent_window<'a>(
        sessions: &'a [NormalizedSession],
        config: &AnalyticsConfig,
    ) -> &'a [NormalizedSession] {
        let window = config.plateau.window.min(sessions.len());
        &sessions[sessions.len() - window..]
    }

    /// Detect a plateau, analyzing the trend of the recent window internally
    #[must_use]
    pub fn detect(sessions: &[NormalizedSession], config: &AnalyticsConfig) -> PlateauSummary {
        let window_trend = TrendAnalyzer::analyze(Self::recent_window(sessions, config), config);
        Self::detect_with_trend(sessions, &window_trend, config)
    }

    /// Detect a plateau given the trend already computed over the recent window
    #[must_use]
    pub fn detect_with_trend(
        sessions: &[NormalizedSession],
        window_trend: &TrendSummary,
        config: &AnalyticsConfig,
    ) -> PlateauSummary {
        let thresholds = &config.plateau;
        if sessions.is_empty() || thresholds.window == 0 || sessions.len() < thresholds.window {
            return PlateauSummary::insufficient_data();
        }

        let window = Self::recent_window(sessions, config);
        let volumes: Vec<f64> = window.iter().map(|s| s.volume).collect();
        let cv = statistics::coefficient_of_variation(&volumes);

        let (severity, plateau_score) = if cv < thresholds.severe_cv {
            (PlateauSeverity::Severe, thresholds.severe_score)
        } else if cv < thresholds.plateau_cv {
            (PlateauSeverity::Moderate, thresholds.moderate_score)
        } else {
            (PlateauSeverity::Mild, thresholds.mild_score)
        };

        let is_plateaued = cv < thresholds.plateau_cv && window_trend.trend == TrendDirection::Stable;

        debug!(
            coefficient_of_variation = cv,
            ?severity,
            is_plateaued,
            "plateau detection completed"
        );

        if !is_plateaued {
            return PlateauSummary {
                severity,
                plateau_score,
                coefficient_of_variation: cv,
                ..PlateauSummary::insufficient_data()
            };
        }

        let (plateau_start, duration_weeks) = match (window.first(), window.last()) {
            (Some(first), Some(last)) => {
                let days = statistics::days_between(first.date, last.date).max(0);
                let weeks = u32::try_from((days + 6) / 7).unwrap_or(u32::MAX).max(1);
                (Some(first.date), weeks)
            }
            _ => (None, 0),
        };

        PlateauSummary {
            is_plateaued,
            plateau_start,
            duration_weeks,
            severity,
            interventions: severity.interventions(),
            alternative_exercises: alternative_exercises(),
            plateau_score,
            coefficient_of_variation: cv,
        }
    }
}

fn alternative_exercises() -> Vec<String> {
    [
        "Paused variation of the main lift",
        "Tempo variation with a slower eccentric",
        "Unilateral accessory for the same movement pattern",
        "Machine or cable variation to reduce fatigue",
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect()
}
