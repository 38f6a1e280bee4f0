// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Utility commands for coach-cli
// ABOUTME: One-rep max estimation and effective configuration display

use crate::helpers::display::print_json;
use coach_core::errors::{AppError, AppResult};
use coach_insights::config::AppConfig;
use coach_intelligence::RecordNormalizer;
use serde_json::json;

/// Print the estimated one-rep max for one set
pub fn one_rep_max(weight: f64, reps: i32, pretty: bool) -> AppResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(AppError::invalid_input(format!(
            "weight must be a non-negative number, got {weight}"
        )));
    }
    let estimate = RecordNormalizer::estimated_one_rep_max(weight, reps);
    print_json(
        &json!({
            "weight": weight,
            "reps": reps,
            "estimatedOneRepMax": estimate,
        }),
        pretty,
    )
}

/// Print the configuration in effect after environment overrides
pub fn show_config(config: &AppConfig, pretty: bool) -> AppResult<()> {
    print_json(&config.summary(), pretty)
}
