// ABOUTME: Benchmark test fixtures for generating realistic strength training histories
// ABOUTME: Provides deterministic session generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark test fixtures for generating strength training histories.
//!
//! Loads climb slowly with a small periodic wobble so every analyzer sees a
//! realistic mix of progress and noise.

use chrono::{Duration, NaiveDate};
use coach_insights::input::ExerciseHistories;
use coach_insights::models::TrainingSession;

/// Predefined history lengths for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistorySize {
    /// Two weeks of training
    Small,
    /// About eight months of training
    Medium,
    /// Several years of training
    Large,
}

impl HistorySize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 6,
            Self::Medium => 100,
            Self::Large => 500,
        }
    }
}

/// Generate one session (internal use only)
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn generate_session(index: usize, start: NaiveDate, base_weight: f64) -> TrainingSession {
    let progression = index as f64 * 0.5;
    let wobble = ((index * 7) % 5) as f64 - 2.0;
    let top = base_weight + progression + wobble;
    // Mostly every other day, with an extra rest day every third session
    let date = start + Duration::days((index * 2 + index / 3) as i64);

    TrainingSession::from_sets(
        date,
        vec![5, 5, 5, 8 - (index % 3) as i32],
        vec![top, top, top - 5.0, top - 10.0],
    )
}

/// Generate a single exercise history of the given size
#[must_use]
pub fn generate_history(size: HistorySize) -> Vec<TrainingSession> {
    generate_history_with(size.count(), 100.0)
}

/// Generate a history of `count` sessions starting from `base_weight`
#[must_use]
pub fn generate_history_with(count: usize, base_weight: f64) -> Vec<TrainingSession> {
    let start = NaiveDate::from_ymd_opt(2023, 1, 2).unwrap_or_default();
    (0..count)
        .map(|index| generate_session(index, start, base_weight))
        .collect()
}

/// Generate a batch of exercises, each with a medium history
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn generate_batch(exercises: usize) -> ExerciseHistories {
    (0..exercises)
        .map(|index| {
            (
                format!("exercise_{index}"),
                generate_history_with(HistorySize::Medium.count(), 40.0 + index as f64 * 10.0),
            )
        })
        .collect()
}
