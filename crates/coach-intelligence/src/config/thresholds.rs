// ABOUTME: Threshold groups for each analytics stage with their default values
// ABOUTME: Replaces magic numbers in trend, plateau, consistency, prediction, and recommendation logic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Trend analysis thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrendThresholds {
    /// Sessions required before a regression is attempted
    pub min_sessions: usize,
    /// Slope magnitude below which volume is considered stable
    pub stable_slope: f64,
    /// Coefficient of variation above which the trend is volatile
    pub volatility_cv: f64,
    /// Number of trailing sessions compared against the overall mean
    pub recent_window: usize,
    /// Relative band around the overall mean treated as average (0.10 = 10%)
    pub recent_performance_band: f64,
}

impl Default for TrendThresholds {
    fn default() -> Self {
        Self {
            min_sessions: 3,
            stable_slope: 0.1,
            volatility_cv: 0.3,
            recent_window: 3,
            recent_performance_band: 0.10,
        }
    }
}

/// Strength progression thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressionThresholds {
    /// Sessions required for any progression metrics
    pub min_sessions: usize,
    /// Trailing sessions used to classify the curve shape
    pub curve_window: usize,
    /// Average 1RM delta below which the curve is a plateau
    pub plateau_delta: f64,
    /// Average 1RM delta below which the curve is declining
    pub declining_delta: f64,
    /// Milestones are rounded up to a multiple of this load
    pub milestone_step: f64,
    /// Weeks reported when no positive improvement rate exists
    pub fallback_weeks: u32,
}

impl Default for ProgressionThresholds {
    fn default() -> Self {
        Self {
            min_sessions: 2,
            curve_window: 4,
            plateau_delta: 1.0,
            declining_delta: 2.0,
            milestone_step: 5.0,
            fallback_weeks: 12,
        }
    }
}

/// Training consistency thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsistencyThresholds {
    /// Ideal rest gap between sessions in days
    pub ideal_gap_days: f64,
    /// Score points removed per day of gap deviation
    pub score_penalty_per_day: f64,
    /// Largest gap in days that keeps a streak alive
    pub streak_max_gap_days: i64,
    /// Expected training sessions per week
    pub expected_sessions_per_week: u32,
    /// Number of gaps compared at each end of the history
    pub trend_window: usize,
    /// Relative change in gap length treated as stable (0.10 = 10%)
    pub trend_tolerance: f64,
}

impl Default for ConsistencyThresholds {
    fn default() -> Self {
        Self {
            ideal_gap_days: 2.0,
            score_penalty_per_day: 10.0,
            streak_max_gap_days: 3,
            expected_sessions_per_week: 3,
            trend_window: 3,
            trend_tolerance: 0.10,
        }
    }
}

/// Plateau detection thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlateauThresholds {
    /// Trailing sessions examined
    pub window: usize,
    /// Coefficient of variation under which the window counts as flat
    pub plateau_cv: f64,
    /// Coefficient of variation under which a plateau is severe
    pub severe_cv: f64,
    /// Score reported for a severe plateau
    pub severe_score: u32,
    /// Score reported for a moderate plateau
    pub moderate_score: u32,
    /// Score reported for a mild plateau
    pub mild_score: u32,
}

impl Default for PlateauThresholds {
    fn default() -> Self {
        Self {
            window: 6,
            plateau_cv: 0.15,
            severe_cv: 0.10,
            severe_score: 80,
            moderate_score: 50,
            mild_score: 20,
        }
    }
}

/// Performance prediction thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionThresholds {
    /// Sessions required before projecting
    pub min_sessions: usize,
    /// Projection horizons in weeks
    pub horizons_weeks: Vec<u32>,
    /// Horizon used for the peak performance estimate
    pub peak_horizon_weeks: u32,
    /// Lower bound of per-week confidence
    pub min_confidence: f64,
    /// Upper bound of per-week confidence
    pub max_confidence: f64,
    /// Volatility above this fraction of current volume is a risk factor
    pub high_volatility_ratio: f64,
    /// Trend strength below this is a risk factor
    pub low_trend_strength: f64,
    /// Volatility below this fraction of current volume adds growth potential
    pub low_volatility_ratio: f64,
}

impl Default for PredictionThresholds {
    fn default() -> Self {
        Self {
            min_sessions: 4,
            horizons_weeks: vec![4, 8, 12],
            peak_horizon_weeks: 8,
            min_confidence: 0.3,
            max_confidence: 0.9,
            high_volatility_ratio: 0.3,
            low_trend_strength: 0.5,
            low_volatility_ratio: 0.2,
        }
    }
}

/// Next-session recommendation thresholds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationThresholds {
    /// Sessions required before suggesting loads
    pub min_sessions: usize,
    /// Volatility above this fraction of the last session volume selects step loading
    pub high_volatility_ratio: f64,
    /// Multiplier for linear progression
    pub linear_multiplier: f64,
    /// Multiplier for deload sessions
    pub deload_multiplier: f64,
    /// Multiplier for heavy (even-indexed) wave sets
    pub wave_heavy_multiplier: f64,
    /// Multiplier for light (odd-indexed) wave sets
    pub wave_light_multiplier: f64,
    /// Suggested loads are rounded to the nearest multiple of this increment
    pub weight_increment: f64,
    /// Short-term milestone gain over current 1RM
    pub short_term_gain: f64,
    /// Long-term milestone gain over current 1RM
    pub long_term_gain: f64,
    /// Weeks allotted to the short-term milestone
    pub short_term_weeks: u32,
    /// Weeks allotted to the long-term milestone
    pub long_term_weeks: u32,
}

impl Default for RecommendationThresholds {
    fn default() -> Self {
        Self {
            min_sessions: 2,
            high_volatility_ratio: 0.3,
            linear_multiplier: 1.025,
            deload_multiplier: 0.85,
            wave_heavy_multiplier: 1.05,
            wave_light_multiplier: 0.90,
            weight_increment: 2.5,
            short_term_gain: 0.10,
            long_term_gain: 0.25,
            short_term_weeks: 4,
            long_term_weeks: 12,
        }
    }
}

/// Gates for highlight and action strings in the aggregated result
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightThresholds {
    /// Total 1RM improvement (%) worth highlighting
    pub improvement_highlight: f64,
    /// Consistency score worth highlighting
    pub consistency_highlight: f64,
    /// Growth potential worth highlighting
    pub growth_highlight: f64,
    /// Consistency score below which an action is suggested
    pub consistency_action: f64,
    /// Adherence (%) below which an action is suggested
    pub adherence_action: f64,
}

impl Default for InsightThresholds {
    fn default() -> Self {
        Self {
            improvement_highlight: 5.0,
            consistency_highlight: 80.0,
            growth_highlight: 70.0,
            consistency_action: 60.0,
            adherence_action: 80.0,
        }
    }
}
