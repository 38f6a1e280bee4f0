// ABOUTME: Insight aggregation running every analyzer over one normalized session history
// ABOUTME: Computes the composite training score and the key insight and action item lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Single entry point combining trend, progression, consistency, plateau,
//! prediction, and recommendation analysis into one [`InsightResult`].

use crate::config::AnalyticsConfig;
use crate::consistency::{ConsistencyAnalyzer, ConsistencySummary};
use crate::normalizer::RecordNormalizer;
use crate::plateau::{PlateauDetector, PlateauSummary};
use crate::prediction::{PerformancePredictor, PredictionSummary};
use crate::progression::{ProgressionAnalyzer, ProgressionSummary};
use crate::recommendation::{RecommendationGenerator, RecommendationSummary, RiskLevel};
use crate::trend::{TrendAnalyzer, TrendDirection, TrendSummary};
use coach_core::models::TrainingSession;
use serde::{Deserialize, Serialize};
use tracing::info;

const NO_DATA_INSIGHT: &str = "No data available for analysis";
const NO_DATA_ACTION: &str = "Start logging trainings to get insights";

/// Combined analytics for one exercise history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightResult {
    /// Volume trend
    pub trend: TrendSummary,
    /// Strength progression
    pub progression: ProgressionSummary,
    /// Training consistency
    pub consistency: ConsistencySummary,
    /// Plateau detection
    pub plateau: PlateauSummary,
    /// Volume projections
    pub predictions: PredictionSummary,
    /// Next-session and long-term recommendations
    pub recommendations: RecommendationSummary,
    /// Composite training score, nominally 0-100
    pub overall_score: u32,
    /// Highlights worth showing the athlete
    pub key_insights: Vec<String>,
    /// Suggested actions
    pub action_items: Vec<String>,
}

/// Insight aggregator
pub struct InsightAggregator;

impl InsightAggregator {
    /// Generate insights with the default thresholds
    #[must_use]
    pub fn generate(sessions: &[TrainingSession]) -> InsightResult {
        Self::generate_with_config(sessions, &AnalyticsConfig::default())
    }

    /// Generate insights with caller-supplied thresholds
    #[must_use]
    pub fn generate_with_config(
        sessions: &[TrainingSession],
        config: &AnalyticsConfig,
    ) -> InsightResult {
        let normalized = RecordNormalizer::normalize(sessions);

        let trend = TrendAnalyzer::analyze(&normalized, config);
        let progression = ProgressionAnalyzer::analyze(&normalized, config);
        let consistency = ConsistencyAnalyzer::analyze(&normalized, config);
        let window_trend =
            TrendAnalyzer::analyze(PlateauDetector::recent_window(&normalized, config), config);
        let plateau = PlateauDetector::detect_with_trend(&normalized, &window_trend, config);
        let predictions = PerformancePredictor::predict_with_trend(&normalized, &trend, config);
        let recommendations =
            RecommendationGenerator::generate_with(&normalized, &plateau, &trend, config);

        let mut result = InsightResult {
            trend,
            progression,
            consistency,
            plateau,
            predictions,
            recommendations,
            overall_score: 0,
            key_insights: Vec::new(),
            action_items: Vec::new(),
        };

        if normalized.is_empty() {
            result.key_insights.push(NO_DATA_INSIGHT.to_owned());
            result.action_items.push(NO_DATA_ACTION.to_owned());
            info!("no training sessions supplied, returning empty insights");
            return result;
        }

        result.overall_score = Self::composite_score(&result);
        result.key_insights = Self::key_insights(&result, config);
        result.action_items = Self::action_items(&result, config);

        info!(
            sessions = normalized.len(),
            overall_score = result.overall_score,
            trend = %result.trend.trend,
            plateaued = result.plateau.is_plateaued,
            "training insights generated"
        );

        result
    }

    /// Weighted sum of the sub-results, rounded but not clamped
    ///
    /// Every sub-metric at its maximum sums to 110.
    #[must_use]
    pub fn composite_score(result: &InsightResult) -> u32 {
        let mut score = 20.0 * result.trend.trend_strength;
        score += if result.progression.improvement_rate > 0.0 {
            20.0
        } else {
            10.0
        };
        score += 0.2 * result.consistency.consistency_score;
        score += 0.2 * result.predictions.growth_potential;
        score += if result.plateau.is_plateaued { 10.0 } else { 20.0 };
        score += if result.recommendations.risk_assessment == RiskLevel::Low {
            10.0
        } else {
            5.0
        };

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        // Safe: every term is non-negative and the sum is bounded
        let rounded = score.round().max(0.0) as u32;
        rounded
    }

    fn key_insights(result: &InsightResult, config: &AnalyticsConfig) -> Vec<String> {
        let thresholds = &config.insights;
        let mut insights = Vec::new();

        if result.trend.trend == TrendDirection::Increasing {
            insights.push(format!(
                "Training volume is increasing by {:.1} per week",
                result.trend.average_growth_rate
            ));
        }
        if result.progression.total_improvement > thresholds.improvement_highlight {
            insights.push(format!(
                "Estimated one-rep max has improved {:.1}% since your first session",
                result.progression.total_improvement
            ));
        }
        if result.consistency.consistency_score > thresholds.consistency_highlight {
            insights.push(format!(
                "Excellent training consistency (score {:.0})",
                result.consistency.consistency_score
            ));
        }
        if result.plateau.is_plateaued {
            insights.push(format!(
                "A {} plateau has lasted about {} weeks",
                result.plateau.severity, result.plateau.duration_weeks
            ));
        }
        if result.predictions.growth_potential > thresholds.growth_highlight {
            insights.push(format!(
                "High growth potential ({:.0}/100) if the current approach continues",
                result.predictions.growth_potential
            ));
        }

        insights
    }

    fn action_items(result: &InsightResult, config: &AnalyticsConfig) -> Vec<String> {
        let thresholds = &config.insights;
        let mut actions = Vec::new();

        if result.plateau.is_plateaued {
            actions.push(format!(
                "Break the plateau with a {} block",
                result.recommendations.next_session.progression_type
            ));
        }
        if result.trend.trend == TrendDirection::Decreasing {
            actions.push("Review recovery and nutrition to reverse the volume decline".to_owned());
        }
        if result.consistency.consistency_score < thresholds.consistency_action {
            actions.push("Train on a more regular schedule".to_owned());
        }
        if result.recommendations.risk_assessment == RiskLevel::High {
            actions.push("Reduce training stress; several risk factors are present".to_owned());
        }
        if result.consistency.adherence < thresholds.adherence_action {
            actions.push(format!(
                "Aim for {} sessions per week to stay on plan",
                config.consistency.expected_sessions_per_week
            ));
        }

        actions
    }
}

/// Generate insights for one exercise history using the default thresholds
#[must_use]
pub fn generate_insights(sessions: &[TrainingSession]) -> InsightResult {
    InsightAggregator::generate(sessions)
}

/// Generate insights for one exercise history using caller-supplied thresholds
#[must_use]
pub fn generate_insights_with_config(
    sessions: &[TrainingSession],
    config: &AnalyticsConfig,
) -> InsightResult {
    InsightAggregator::generate_with_config(sessions, config)
}
