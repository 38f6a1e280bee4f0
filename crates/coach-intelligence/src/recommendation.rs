// ABOUTME: Next-session loading recommendations driven by plateau and trend results
// ABOUTME: Chooses a progression scheme, adjusts set weights, and sketches a long-term plan with risk
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AnalyticsConfig;
use crate::plateau::{PlateauDetector, PlateauSeverity, PlateauSummary};
use crate::trend::{TrendAnalyzer, TrendDirection, TrendSummary};
use coach_core::models::NormalizedSession;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Loading scheme for the next session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressionType {
    /// Small uniform load increase
    Linear,
    /// Hold loads steady while volume settles
    Step,
    /// Alternate heavier and lighter sets
    Wave,
    /// Planned load reduction for recovery
    Deload,
}

impl ProgressionType {
    const fn reasoning(self) -> &'static str {
        match self {
            Self::Linear => "Steady progress supports a small load increase on every set",
            Self::Step => "Volume is volatile; repeat the last loads until sessions stabilize",
            Self::Wave => "A plateau is forming; alternate heavier and lighter sets to vary stimulus",
            Self::Deload => "Reduce loads to recover before the next progression block",
        }
    }
}

impl fmt::Display for ProgressionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Linear => "linear",
            Self::Step => "step",
            Self::Wave => "wave",
            Self::Deload => "deload",
        };
        f.write_str(label)
    }
}

/// Qualitative training risk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    /// No warning signs
    Low,
    /// One warning sign
    Medium,
    /// Two or more warning signs
    High,
}

/// Concrete loads for the next session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSuggestion {
    /// Suggested load per set
    pub weights: Vec<f64>,
    /// Suggested reps per set
    pub reps: Vec<i32>,
    /// Chosen loading scheme
    pub progression_type: ProgressionType,
    /// Confidence in the suggestion (0-1)
    pub confidence: f64,
    /// Why this scheme was chosen
    pub reasoning: String,
}

/// Strength target on the long-term plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMilestone {
    /// Short label
    pub label: String,
    /// Target estimated 1RM
    pub target_one_rep_max: f64,
    /// Weeks allotted
    pub weeks: u32,
}

/// Long-term plan skeleton
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongTermPlan {
    /// Scheme the plan starts with
    pub progression_type: ProgressionType,
    /// Milestones in order
    pub milestones: Vec<PlanMilestone>,
}

/// Recommendation summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationSummary {
    /// Next-session suggestion
    pub next_session: SessionSuggestion,
    /// Long-term plan
    pub long_term_plan: LongTermPlan,
    /// Overall risk assessment
    pub risk_assessment: RiskLevel,
    /// Other approaches worth considering
    pub alternative_approaches: Vec<String>,
}

/// Recommendation generator
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    /// Generate recommendations, running plateau and trend analysis internally
    #[must_use]
    pub fn generate(sessions: &[NormalizedSession], config: &AnalyticsConfig) -> RecommendationSummary {
        let trend = TrendAnalyzer::analyze(sessions, config);
        let plateau = PlateauDetector::detect(sessions, config);
        Self::generate_with(sessions, &plateau, &trend, config)
    }

    /// Generate recommendations from already computed plateau and full-history trend results
    #[must_use]
    pub fn generate_with(
        sessions: &[NormalizedSession],
        plateau: &PlateauSummary,
        trend: &TrendSummary,
        config: &AnalyticsConfig,
    ) -> RecommendationSummary {
        let thresholds = &config.recommendation;
        let Some(last) = sessions.last() else {
            return Self::insufficient_data();
        };
        if sessions.len() < thresholds.min_sessions {
            return Self::insufficient_data();
        }

        let high_volatility = trend.volatility > last.volume * thresholds.high_volatility_ratio;
        let progression_type = Self::choose_progression_type(plateau, trend, high_volatility);
        let weights = Self::adjust_weights(&last.weights, progression_type, config);

        let confidence = match progression_type {
            ProgressionType::Wave => f64::from(plateau.plateau_score) / 100.0,
            ProgressionType::Deload if plateau.is_plateaued => {
                f64::from(plateau.plateau_score) / 100.0
            }
            _ => 0.4f64.mul_add(trend.trend_strength, 0.5),
        }
        .clamp(0.0, 1.0);

        let risk_assessment = Self::assess_risk(
            plateau.is_plateaued,
            trend.trend == TrendDirection::Decreasing,
            high_volatility,
        );

        debug!(
            %progression_type,
            confidence,
            ?risk_assessment,
            "next session recommendation generated"
        );

        RecommendationSummary {
            next_session: SessionSuggestion {
                weights,
                reps: last.reps.clone(),
                progression_type,
                confidence,
                reasoning: progression_type.reasoning().to_owned(),
            },
            long_term_plan: Self::long_term_plan(
                progression_type,
                last.estimated_one_rep_max,
                config,
            ),
            risk_assessment,
            alternative_approaches: alternative_approaches(),
        }
    }

    /// Pick a scheme in priority order: plateau, falling trend, volatility, otherwise linear
    #[must_use]
    pub fn choose_progression_type(
        plateau: &PlateauSummary,
        trend: &TrendSummary,
        high_volatility: bool,
    ) -> ProgressionType {
        if plateau.is_plateaued {
            if plateau.severity == PlateauSeverity::Severe {
                ProgressionType::Deload
            } else {
                ProgressionType::Wave
            }
        } else if trend.trend == TrendDirection::Decreasing {
            ProgressionType::Deload
        } else if high_volatility {
            ProgressionType::Step
        } else {
            ProgressionType::Linear
        }
    }

    /// Apply the scheme's multipliers to the previous loads
    ///
    /// Step loading keeps the previous loads as they were.
    #[must_use]
    pub fn adjust_weights(
        weights: &[f64],
        progression_type: ProgressionType,
        config: &AnalyticsConfig,
    ) -> Vec<f64> {
        let thresholds = &config.recommendation;
        let increment = thresholds.weight_increment;
        match progression_type {
            ProgressionType::Step => weights.to_vec(),
            ProgressionType::Linear => weights
                .iter()
                .map(|w| round_to_increment(w * thresholds.linear_multiplier, increment))
                .collect(),
            ProgressionType::Deload => weights
                .iter()
                .map(|w| round_to_increment(w * thresholds.deload_multiplier, increment))
                .collect(),
            ProgressionType::Wave => weights
                .iter()
                .enumerate()
                .map(|(i, w)| {
                    let multiplier = if i % 2 == 0 {
                        thresholds.wave_heavy_multiplier
                    } else {
                        thresholds.wave_light_multiplier
                    };
                    round_to_increment(w * multiplier, increment)
                })
                .collect(),
        }
    }

    /// Risk grade from the number of warning signs present
    #[must_use]
    pub fn assess_risk(plateaued: bool, decreasing: bool, high_volatility: bool) -> RiskLevel {
        let signs = [plateaued, decreasing, high_volatility]
            .iter()
            .filter(|present| **present)
            .count();
        match signs {
            0 => RiskLevel::Low,
            1 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }

    fn long_term_plan(
        progression_type: ProgressionType,
        current_one_rep_max: f64,
        config: &AnalyticsConfig,
    ) -> LongTermPlan {
        let thresholds = &config.recommendation;
        LongTermPlan {
            progression_type,
            milestones: vec![
                PlanMilestone {
                    label: "short_term".to_owned(),
                    target_one_rep_max: (current_one_rep_max * (1.0 + thresholds.short_term_gain))
                        .round(),
                    weeks: thresholds.short_term_weeks,
                },
                PlanMilestone {
                    label: "long_term".to_owned(),
                    target_one_rep_max: (current_one_rep_max * (1.0 + thresholds.long_term_gain))
                        .round(),
                    weeks: thresholds.long_term_weeks,
                },
            ],
        }
    }

    fn insufficient_data() -> RecommendationSummary {
        RecommendationSummary {
            next_session: SessionSuggestion {
                weights: Vec::new(),
                reps: Vec::new(),
                progression_type: ProgressionType::Linear,
                confidence: 0.0,
                reasoning: "need more data".to_owned(),
            },
            long_term_plan: LongTermPlan {
                progression_type: ProgressionType::Linear,
                milestones: Vec::new(),
            },
            risk_assessment: RiskLevel::Low,
            alternative_approaches: alternative_approaches(),
        }
    }
}

/// Round a load to the nearest multiple of `increment`
#[must_use]
pub fn round_to_increment(weight: f64, increment: f64) -> f64 {
    if increment <= 0.0 {
        return weight;
    }
    (weight / increment).round() * increment
}

fn alternative_approaches() -> Vec<String> {
    [
        "Block periodization alternating volume and intensity phases",
        "Daily undulating periodization across the training week",
        "Autoregulated loading using reps in reserve",
    ]
    .iter()
    .map(|s| (*s).to_owned())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};

    fn history(volumes: &[f64], weights: &[f64]) -> Vec<NormalizedSession> {
        let start = NaiveDate::from_ymd_opt(2025, 6, 2).unwrap_or_default();
        volumes
            .iter()
            .enumerate()
            .map(|(i, volume)| NormalizedSession {
                date: start + Duration::days(7 * i64::try_from(i).unwrap_or_default()),
                sets: u32::try_from(weights.len()).unwrap_or_default(),
                reps: vec![5; weights.len()],
                weights: weights.to_vec(),
                volume: *volume,
                max_weight: weights.iter().copied().fold(0.0, f64::max),
                intensity: 100.0,
                estimated_one_rep_max: 120.0,
            })
            .collect()
    }

    #[test]
    fn test_rounding_to_increment() {
        assert!((round_to_increment(102.5, 2.5) - 102.5).abs() < f64::EPSILON);
        assert!((round_to_increment(103.9, 2.5) - 105.0).abs() < f64::EPSILON);
        assert!((round_to_increment(85.0 * 1.025, 2.5) - 87.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_wave_alternates_sets() {
        let adjusted = RecommendationGenerator::adjust_weights(
            &[100.0, 100.0, 100.0, 100.0],
            ProgressionType::Wave,
            &AnalyticsConfig::default(),
        );
        assert_eq!(adjusted, vec![105.0, 90.0, 105.0, 90.0]);
    }

    #[test]
    fn test_step_keeps_previous_loads() {
        let adjusted = RecommendationGenerator::adjust_weights(
            &[61.3, 72.1],
            ProgressionType::Step,
            &AnalyticsConfig::default(),
        );
        assert_eq!(adjusted, vec![61.3, 72.1]);
    }

    #[test]
    fn test_severe_plateau_deloads() {
        let sessions = history(&[1500.0; 6], &[100.0, 100.0, 100.0]);
        let summary = RecommendationGenerator::generate(&sessions, &AnalyticsConfig::default());
        assert_eq!(summary.next_session.progression_type, ProgressionType::Deload);
        assert_eq!(summary.next_session.weights, vec![85.0, 85.0, 85.0]);
        assert!((summary.next_session.confidence - 0.8).abs() < 1e-9);
        assert_eq!(summary.risk_assessment, RiskLevel::Medium);
    }

    #[test]
    fn test_moderate_plateau_waves() {
        let sessions = history(
            &[1000.0, 1250.0, 1000.0, 1250.0, 1000.0, 1250.0],
            &[100.0, 100.0],
        );
        let config = AnalyticsConfig::default();
        let flat = TrendSummary::insufficient_data();
        let plateau = PlateauDetector::detect_with_trend(&sessions, &flat, &config);
        let summary = RecommendationGenerator::generate_with(&sessions, &plateau, &flat, &config);
        assert_eq!(summary.next_session.progression_type, ProgressionType::Wave);
        assert_eq!(summary.next_session.weights, vec![105.0, 90.0]);
        assert!((summary.next_session.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_volatile_history_steps() {
        let sessions = history(&[400.0, 2000.0, 500.0, 1900.0, 1000.0], &[60.0, 70.0]);
        let summary = RecommendationGenerator::generate(&sessions, &AnalyticsConfig::default());
        assert_eq!(summary.next_session.progression_type, ProgressionType::Step);
        assert_eq!(summary.next_session.weights, vec![60.0, 70.0]);
    }

    #[test]
    fn test_insufficient_history() {
        let sessions = history(&[1000.0], &[100.0]);
        let summary = RecommendationGenerator::generate(&sessions, &AnalyticsConfig::default());
        assert!(summary.next_session.weights.is_empty());
        assert!(summary.next_session.confidence.abs() < f64::EPSILON);
        assert_eq!(summary.next_session.reasoning, "need more data");
    }

    #[test]
    fn test_long_term_milestones() {
        let sessions = history(&[1000.0, 1100.0, 1200.0], &[100.0]);
        let summary = RecommendationGenerator::generate(&sessions, &AnalyticsConfig::default());
        let targets: Vec<f64> = summary
            .long_term_plan
            .milestones
            .iter()
            .map(|m| m.target_one_rep_max)
            .collect();
        assert_eq!(targets, vec![132.0, 150.0]);
    }

    #[test]
    fn test_risk_grades() {
        assert_eq!(RecommendationGenerator::assess_risk(false, false, false), RiskLevel::Low);
        assert_eq!(RecommendationGenerator::assess_risk(true, false, false), RiskLevel::Medium);
        assert_eq!(RecommendationGenerator::assess_risk(true, true, false), RiskLevel::High);
    }
}
