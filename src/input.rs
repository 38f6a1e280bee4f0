// ABOUTME: Session history loading from JSON files for single and multi-exercise analysis
// ABOUTME: Parses camelCase session records and warns about ordering or set-pairing problems
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! JSON input handling
//!
//! A single history is a JSON array of sessions. A batch is a JSON object
//! mapping exercise names to such arrays. Histories are passed through in the
//! order they were written; problems are reported as warnings, not errors.

use coach_core::errors::{AppError, AppResult};
use coach_core::models::TrainingSession;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Exercise name to session history, ordered by name
pub type ExerciseHistories = BTreeMap<String, Vec<TrainingSession>>;

/// Parse a single session history from JSON text
///
/// # Errors
///
/// Returns an invalid-format error when the text is not a JSON array of sessions
pub fn parse_sessions(json: &str) -> AppResult<Vec<TrainingSession>> {
    let sessions: Vec<TrainingSession> = serde_json::from_str(json)?;
    check_history("input", &sessions);
    Ok(sessions)
}

/// Parse a multi-exercise batch from JSON text
///
/// # Errors
///
/// Returns an invalid-format error when the text is not a JSON object of session arrays
pub fn parse_batch(json: &str) -> AppResult<ExerciseHistories> {
    let histories: ExerciseHistories = serde_json::from_str(json)?;
    if histories.is_empty() {
        return Err(AppError::invalid_input("Batch input contains no exercises"));
    }
    for (exercise, sessions) in &histories {
        check_history(exercise, sessions);
    }
    Ok(histories)
}

/// Read and parse a single session history file
///
/// # Errors
///
/// Returns a not-found or storage error when the file cannot be read, or an
/// invalid-format error when its contents do not parse
pub fn load_sessions(path: &Path) -> AppResult<Vec<TrainingSession>> {
    let contents = read_input(path)?;
    parse_sessions(&contents).map_err(|e| annotate(e, path))
}

/// Read and parse a multi-exercise batch file
///
/// # Errors
///
/// Returns a not-found or storage error when the file cannot be read, or an
/// invalid-format error when its contents do not parse
pub fn load_batch(path: &Path) -> AppResult<ExerciseHistories> {
    let contents = read_input(path)?;
    parse_batch(&contents).map_err(|e| annotate(e, path))
}

fn read_input(path: &Path) -> AppResult<String> {
    debug!(path = %path.display(), "reading session input");
    fs::read_to_string(path).map_err(|e| {
        let message = format!("Cannot read {}: {e}", path.display());
        let mut error = AppError::from(e);
        error.message = message;
        error
    })
}

fn annotate(mut error: AppError, path: &Path) -> AppError {
    error.message = format!("{}: {}", path.display(), error.message);
    error
}

/// Log warnings for histories that break the ordering or pairing assumptions
fn check_history(label: &str, sessions: &[TrainingSession]) {
    let out_of_order = sessions
        .windows(2)
        .filter(|pair| pair[1].date < pair[0].date)
        .count();
    if out_of_order > 0 {
        warn!(
            exercise = label,
            out_of_order, "sessions are not in ascending date order; analyzing as given"
        );
    }

    for session in sessions {
        if session.reps.len() != session.weights.len() {
            warn!(
                exercise = label,
                date = %session.date,
                reps = session.reps.len(),
                weights = session.weights.len(),
                "reps and weights differ in length; only paired sets are used"
            );
        }
    }
}
