// ABOUTME: Configuration-driven thresholds for the training analytics pipeline
// ABOUTME: Provides defaults, environment overrides, and validation for every analysis stage
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Per-stage threshold groups
pub mod thresholds;

pub use error::ConfigError;
pub use thresholds::{
    ConsistencyThresholds, InsightThresholds, PlateauThresholds, PredictionThresholds,
    ProgressionThresholds, RecommendationThresholds, TrendThresholds,
};

use coach_core::constants::env_config;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Complete analytics configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Trend analysis thresholds
    pub trend: TrendThresholds,
    /// Strength progression thresholds
    pub progression: ProgressionThresholds,
    /// Training consistency thresholds
    pub consistency: ConsistencyThresholds,
    /// Plateau detection thresholds
    pub plateau: PlateauThresholds,
    /// Performance prediction thresholds
    pub prediction: PredictionThresholds,
    /// Next-session recommendation thresholds
    pub recommendation: RecommendationThresholds,
    /// Highlight and action gates
    pub insights: InsightThresholds,
}

impl AnalyticsConfig {
    /// Load configuration from environment variables with fallback to defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an override fails to parse or the result is invalid
    pub fn from_environment() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        override_from_env(env_config::TREND_STABLE_SLOPE, &mut config.trend.stable_slope)?;
        override_from_env(env_config::TREND_VOLATILITY_CV, &mut config.trend.volatility_cv)?;
        override_from_env(env_config::PLATEAU_WINDOW, &mut config.plateau.window)?;
        override_from_env(env_config::PLATEAU_CV, &mut config.plateau.plateau_cv)?;
        override_from_env(env_config::PLATEAU_SEVERE_CV, &mut config.plateau.severe_cv)?;
        override_from_env(
            env_config::EXPECTED_SESSIONS_PER_WEEK,
            &mut config.consistency.expected_sessions_per_week,
        )?;
        override_from_env(
            env_config::IDEAL_GAP_DAYS,
            &mut config.consistency.ideal_gap_days,
        )?;
        override_from_env(
            env_config::WEIGHT_INCREMENT,
            &mut config.recommendation.weight_increment,
        )?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.trend.min_sessions < 2 {
            return Err(ConfigError::ValidationFailed(
                "trend.min_sessions must be >= 2 for a regression".into(),
            ));
        }

        if self.trend.stable_slope < 0.0 {
            return Err(ConfigError::InvalidRange("trend.stable_slope must be >= 0"));
        }

        if self.trend.volatility_cv <= 0.0 {
            return Err(ConfigError::InvalidRange("trend.volatility_cv must be > 0"));
        }

        if self.plateau.window < self.trend.min_sessions {
            return Err(ConfigError::ValidationFailed(format!(
                "plateau.window ({}) must be >= trend.min_sessions ({})",
                self.plateau.window, self.trend.min_sessions
            )));
        }

        if self.plateau.severe_cv > self.plateau.plateau_cv {
            return Err(ConfigError::ValidationFailed(
                "plateau.severe_cv must be <= plateau.plateau_cv".into(),
            ));
        }

        if self.consistency.expected_sessions_per_week == 0 {
            return Err(ConfigError::InvalidRange(
                "consistency.expected_sessions_per_week must be > 0",
            ));
        }

        if self.consistency.ideal_gap_days < 0.0 {
            return Err(ConfigError::InvalidRange(
                "consistency.ideal_gap_days must be >= 0",
            ));
        }

        let prediction = &self.prediction;
        if !(0.0..=1.0).contains(&prediction.min_confidence)
            || !(0.0..=1.0).contains(&prediction.max_confidence)
        {
            return Err(ConfigError::InvalidRange(
                "prediction confidence bounds must be between 0 and 1",
            ));
        }

        if prediction.min_confidence > prediction.max_confidence {
            return Err(ConfigError::ValidationFailed(
                "prediction.min_confidence must be <= prediction.max_confidence".into(),
            ));
        }

        if prediction.horizons_weeks.is_empty() {
            return Err(ConfigError::ValidationFailed(
                "prediction.horizons_weeks must not be empty".into(),
            ));
        }

        if self.recommendation.weight_increment <= 0.0 {
            return Err(ConfigError::InvalidRange(
                "recommendation.weight_increment must be > 0",
            ));
        }

        Ok(())
    }
}

fn override_from_env<T: FromStr>(name: &'static str, target: &mut T) -> Result<(), ConfigError> {
    if let Ok(value) = env::var(name) {
        *target = value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse { name, value })?;
    }
    Ok(())
}
