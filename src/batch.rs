// ABOUTME: Parallel insight generation across several exercise histories
// ABOUTME: Fans independent per-exercise analyses out over the rayon thread pool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::input::ExerciseHistories;
use coach_intelligence::{generate_insights_with_config, AnalyticsConfig, InsightResult};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::info;

/// Exercise name to insight result, ordered by name
pub type BatchInsights = BTreeMap<String, InsightResult>;

/// Analyze every exercise history in parallel
///
/// Each history is analyzed independently; results are identical to calling
/// [`generate_insights_with_config`] on each history in turn.
#[must_use]
pub fn analyze_all(histories: &ExerciseHistories, config: &AnalyticsConfig) -> BatchInsights {
    let started = Instant::now();

    let results: BatchInsights = histories
        .par_iter()
        .map(|(exercise, sessions)| {
            (
                exercise.clone(),
                generate_insights_with_config(sessions, config),
            )
        })
        .collect();

    info!(
        exercises = results.len(),
        elapsed_ms = started.elapsed().as_millis(),
        "batch analysis completed"
    );

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use coach_core::models::TrainingSession;

    fn history(base_weight: f64, count: u32) -> Vec<TrainingSession> {
        let start = NaiveDate::from_ymd_opt(2025, 2, 3).unwrap_or_default();
        (0..count)
            .map(|i| {
                TrainingSession::from_sets(
                    start + Duration::days(2 * i64::from(i)),
                    vec![5, 5, 5],
                    vec![f64::from(i).mul_add(2.5, base_weight); 3],
                )
            })
            .collect()
    }

    #[test]
    fn test_batch_matches_sequential_analysis() {
        let mut histories = ExerciseHistories::new();
        histories.insert("squat".to_owned(), history(100.0, 10));
        histories.insert("bench".to_owned(), history(60.0, 7));
        histories.insert("row".to_owned(), Vec::new());

        let config = AnalyticsConfig::default();
        let results = analyze_all(&histories, &config);

        assert_eq!(
            results.keys().collect::<Vec<_>>(),
            vec!["bench", "row", "squat"]
        );
        for (exercise, sessions) in &histories {
            assert_eq!(
                results.get(exercise),
                Some(&generate_insights_with_config(sessions, &config))
            );
        }
    }
}
