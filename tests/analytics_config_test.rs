// ABOUTME: Tests for analytics threshold configuration and environment overrides
// ABOUTME: Validates defaults, COACH_* variable parsing, and cross-field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use coach_insights::config::AppConfig;
use coach_insights::constants::env_config;
use coach_insights::errors::ErrorCode;
use coach_insights::intelligence::{AnalyticsConfig, ConfigError};
use serial_test::serial;
use std::env;

const ALL_OVERRIDES: [&str; 8] = [
    env_config::TREND_STABLE_SLOPE,
    env_config::TREND_VOLATILITY_CV,
    env_config::PLATEAU_WINDOW,
    env_config::PLATEAU_CV,
    env_config::PLATEAU_SEVERE_CV,
    env_config::EXPECTED_SESSIONS_PER_WEEK,
    env_config::IDEAL_GAP_DAYS,
    env_config::WEIGHT_INCREMENT,
];

fn clear_overrides() {
    for name in ALL_OVERRIDES {
        env::remove_var(name);
    }
}

#[test]
fn test_default_thresholds() {
    let config = AnalyticsConfig::default();
    assert!(config.validate().is_ok());

    assert_eq!(config.trend.min_sessions, 3);
    assert!((config.trend.stable_slope - 0.1).abs() < f64::EPSILON);
    assert!((config.trend.volatility_cv - 0.3).abs() < f64::EPSILON);
    assert_eq!(config.plateau.window, 6);
    assert!((config.plateau.plateau_cv - 0.15).abs() < f64::EPSILON);
    assert!((config.plateau.severe_cv - 0.10).abs() < f64::EPSILON);
    assert_eq!(config.consistency.expected_sessions_per_week, 3);
    assert!((config.consistency.ideal_gap_days - 2.0).abs() < f64::EPSILON);
    assert_eq!(config.prediction.horizons_weeks, vec![4, 8, 12]);
    assert!((config.recommendation.weight_increment - 2.5).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_overrides();
    env::set_var(env_config::PLATEAU_WINDOW, "8");
    env::set_var(env_config::EXPECTED_SESSIONS_PER_WEEK, "4");
    env::set_var(env_config::WEIGHT_INCREMENT, "1.25");

    let config = AnalyticsConfig::from_environment();
    clear_overrides();

    let config = config.unwrap();
    assert_eq!(config.plateau.window, 8);
    assert_eq!(config.consistency.expected_sessions_per_week, 4);
    assert!((config.recommendation.weight_increment - 1.25).abs() < f64::EPSILON);
    assert!((config.trend.stable_slope - 0.1).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparseable_override_is_rejected() {
    clear_overrides();
    env::set_var(env_config::PLATEAU_CV, "fifteen percent");

    let result = AnalyticsConfig::from_environment();
    clear_overrides();

    match result {
        Err(ConfigError::Parse { name, value }) => {
            assert_eq!(name, env_config::PLATEAU_CV);
            assert_eq!(value, "fifteen percent");
        }
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
#[serial]
fn test_inconsistent_override_fails_validation() {
    clear_overrides();
    env::set_var(env_config::PLATEAU_SEVERE_CV, "0.2");

    let result = AppConfig::from_env();
    clear_overrides();

    let error = result.unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert_eq!(error.exit_code(), 78);
}

#[test]
fn test_validation_rules() {
    let mut config = AnalyticsConfig::default();
    config.prediction.min_confidence = 0.95;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValidationFailed(_))
    ));

    let mut config = AnalyticsConfig::default();
    config.consistency.expected_sessions_per_week = 0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = AnalyticsConfig::default();
    config.plateau.window = 2;
    assert!(config.validate().is_err());

    let mut config = AnalyticsConfig::default();
    config.prediction.horizons_weeks.clear();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serializes_for_display() {
    let summary = AppConfig::default().summary();
    assert_eq!(summary["service"]["name"], "coach-insights");
    assert_eq!(summary["analytics"]["plateau"]["window"], 6);
}
