// ABOUTME: Shared test utilities for coach insights integration tests
// ABOUTME: Provides session history builders with controllable spacing, loads, and volumes
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::cast_possible_wrap
)]
//! Shared test utilities for `coach_insights`

use chrono::{Duration, NaiveDate};
use coach_insights::models::TrainingSession;

/// Monday 2025-01-06
pub fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

/// Single-set session `offset_days` after the start date
pub fn single_set(offset_days: i64, reps: i32, weight: f64) -> TrainingSession {
    TrainingSession::from_sets(
        start_date() + Duration::days(offset_days),
        vec![reps],
        vec![weight],
    )
}

/// Sessions with the given volumes, spaced `spacing_days` apart
///
/// Each session is one set of 10 reps at `volume / 10`.
pub fn with_volumes(volumes: &[f64], spacing_days: i64) -> Vec<TrainingSession> {
    volumes
        .iter()
        .enumerate()
        .map(|(i, volume)| single_set(i as i64 * spacing_days, 10, volume / 10.0))
        .collect()
}

/// Weekly sessions whose volume rises from 1000 by 50 each week
pub fn weekly_linear_progression(weeks: usize) -> Vec<TrainingSession> {
    let volumes: Vec<f64> = (0..weeks).map(|i| 50.0f64.mul_add(i as f64, 1000.0)).collect();
    with_volumes(&volumes, 7)
}

/// Sessions on the given day offsets with a fixed three-set load
pub fn on_days(offsets: &[i64]) -> Vec<TrainingSession> {
    offsets
        .iter()
        .map(|offset| {
            TrainingSession::from_sets(
                start_date() + Duration::days(*offset),
                vec![5, 5, 5],
                vec![100.0, 100.0, 100.0],
            )
        })
        .collect()
}
