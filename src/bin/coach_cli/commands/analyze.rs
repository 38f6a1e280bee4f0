// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Insight generation commands for coach-cli
// ABOUTME: Loads single or multi-exercise histories and prints their insight results

use crate::helpers::display::print_json;
use coach_core::errors::AppResult;
use coach_insights::batch::analyze_all;
use coach_insights::config::AppConfig;
use coach_insights::input;
use coach_intelligence::generate_insights_with_config;
use std::path::Path;
use tracing::info;

/// Analyze one exercise history
pub fn single(path: &Path, config: &AppConfig, pretty: bool) -> AppResult<()> {
    let sessions = input::load_sessions(path)?;
    info!(path = %path.display(), sessions = sessions.len(), "analyzing session history");

    let result = generate_insights_with_config(&sessions, &config.analytics);
    print_json(&result, pretty)
}

/// Analyze every exercise in a batch file
pub fn batch(path: &Path, config: &AppConfig, pretty: bool) -> AppResult<()> {
    let histories = input::load_batch(path)?;
    info!(path = %path.display(), exercises = histories.len(), "analyzing batch");

    let results = analyze_all(&histories, &config.analytics);
    print_json(&results, pretty)
}
