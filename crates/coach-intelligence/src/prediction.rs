// ABOUTME: Volume projection by linear extrapolation of the trend growth rate
// ABOUTME: Produces weekly forecasts over fixed horizons, peak estimate, risk factors, and growth potential
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::AnalyticsConfig;
use crate::trend::{TrendAnalyzer, TrendDirection, TrendSummary};
use coach_core::models::NormalizedSession;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Forecast for one future week
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyProjection {
    /// Weeks from now (1-based)
    pub week: u32,
    /// Projected session volume
    pub predicted_volume: f64,
    /// Confidence in the projection (bounded by configuration)
    pub confidence: f64,
}

/// Weekly forecasts up to one horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HorizonProjection {
    /// Horizon length in weeks
    pub horizon_weeks: u32,
    /// One projection per week, empty when history is too short
    pub weeks: Vec<WeeklyProjection>,
}

/// Qualitative risks to the forecast
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskFactor {
    /// Volume is trending down
    DecreasingTrend,
    /// Volume swings are large relative to the current volume
    HighVolatility,
    /// The linear fit explains little of the variation
    LowTrendConfidence,
}

impl fmt::Display for RiskFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::DecreasingTrend => "Training volume is trending downward",
            Self::HighVolatility => "High volatility in training volume",
            Self::LowTrendConfidence => "Low confidence in the current trend",
        };
        f.write_str(text)
    }
}

/// Peak volume estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeakPerformance {
    /// Weeks from now
    pub week: u32,
    /// Projected volume at that week
    pub predicted_volume: f64,
}

/// Performance prediction summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionSummary {
    /// Forecasts per configured horizon
    pub projections: Vec<HorizonProjection>,
    /// Peak volume estimate
    pub peak_performance: Option<PeakPerformance>,
    /// Qualitative risk factors
    pub risk_factors: Vec<RiskFactor>,
    /// Growth potential score (0-100)
    pub growth_potential: f64,
}

impl PredictionSummary {
    /// Result for histories too short to extrapolate
    #[must_use]
    pub fn insufficient_data(config: &AnalyticsConfig) -> Self {
        Self {
            projections: config
                .prediction
                .horizons_weeks
                .iter()
                .map(|horizon| HorizonProjection {
                    horizon_weeks: *horizon,
                    weeks: Vec::new(),
                })
                .collect(),
            peak_performance: None,
            risk_factors: Vec::new(),
            growth_potential: 0.0,
        }
    }
}

/// Performance predictor
pub struct PerformancePredictor;

impl PerformancePredictor {
    /// Project volume, analyzing the full-history trend internally
    #[must_use]
    pub fn predict(sessions: &[NormalizedSession], config: &AnalyticsConfig) -> PredictionSummary {
        let trend = TrendAnalyzer::analyze(sessions, config);
        Self::predict_with_trend(sessions, &trend, config)
    }

    /// Project volume from an already computed full-history trend
    #[must_use]
    pub fn predict_with_trend(
        sessions: &[NormalizedSession],
        trend: &TrendSummary,
        config: &AnalyticsConfig,
    ) -> PredictionSummary {
        let thresholds = &config.prediction;
        let Some(last) = sessions.last() else {
            return PredictionSummary::insufficient_data(config);
        };
        if sessions.len() < thresholds.min_sessions {
            return PredictionSummary::insufficient_data(config);
        }

        let current_volume = last.volume;
        let growth_rate = trend.average_growth_rate;
        let confidence = trend
            .trend_strength
            .clamp(thresholds.min_confidence, thresholds.max_confidence);

        let project = |week: u32| growth_rate.mul_add(f64::from(week), current_volume).max(0.0);

        let projections = thresholds
            .horizons_weeks
            .iter()
            .map(|horizon| HorizonProjection {
                horizon_weeks: *horizon,
                weeks: (1..=*horizon)
                    .map(|week| WeeklyProjection {
                        week,
                        predicted_volume: project(week),
                        confidence,
                    })
                    .collect(),
            })
            .collect();

        let peak_performance = Some(PeakPerformance {
            week: thresholds.peak_horizon_weeks,
            predicted_volume: project(thresholds.peak_horizon_weeks),
        });

        let risk_factors = Self::risk_factors(trend, current_volume, config);
        let growth_potential = Self::growth_potential(trend, current_volume, config);

        debug!(
            current_volume,
            growth_rate,
            growth_potential,
            risks = risk_factors.len(),
            "performance prediction completed"
        );

        PredictionSummary {
            projections,
            peak_performance,
            risk_factors,
            growth_potential,
        }
    }

    /// Risk factors in check order
    #[must_use]
    pub fn risk_factors(
        trend: &TrendSummary,
        current_volume: f64,
        config: &AnalyticsConfig,
    ) -> Vec<RiskFactor> {
        let thresholds = &config.prediction;
        let mut risks = Vec::new();
        if trend.trend == TrendDirection::Decreasing {
            risks.push(RiskFactor::DecreasingTrend);
        }
        if trend.volatility > current_volume * thresholds.high_volatility_ratio {
            risks.push(RiskFactor::HighVolatility);
        }
        if trend.trend_strength < thresholds.low_trend_strength {
            risks.push(RiskFactor::LowTrendConfidence);
        }
        risks
    }

    /// Weighted growth potential score, clamped to 0-100
    #[must_use]
    pub fn growth_potential(trend: &TrendSummary, current_volume: f64, config: &AnalyticsConfig) -> f64 {
        let thresholds = &config.prediction;
        let mut score = 50.0 * trend.trend_strength;
        if trend.average_growth_rate > 0.0 {
            score += 30.0;
        }
        if trend.volatility < current_volume * thresholds.low_volatility_ratio {
            score += 20.0;
        }
        score.clamp(0.0, 100.0)
    }
}
