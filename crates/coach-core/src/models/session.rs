// ABOUTME: Training session records supplied by the workout log and their normalized form
// ABOUTME: Defines per-set reps/weights, precomputed volume, and derived intensity and 1RM fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One logged workout for a single exercise
///
/// `reps` and `weights` are positionally paired. Sequences of sessions are
/// expected in ascending date order; nothing downstream reorders them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Number of sets performed
    #[serde(default)]
    pub sets: u32,
    /// Repetitions per set
    #[serde(default)]
    pub reps: Vec<i32>,
    /// Load per set
    #[serde(default)]
    pub weights: Vec<f64>,
    /// Total volume (sum of weight x reps), precomputed by the logger
    pub volume: f64,
    /// Heaviest single-set load
    pub max_weight: f64,
}

impl TrainingSession {
    /// Build a session from paired sets, deriving set count, volume and max weight
    #[must_use]
    pub fn from_sets(date: NaiveDate, reps: Vec<i32>, weights: Vec<f64>) -> Self {
        let volume = reps
            .iter()
            .zip(&weights)
            .map(|(reps, weight)| f64::from(*reps) * weight)
            .sum();
        let max_weight = weights.iter().copied().fold(0.0_f64, f64::max);
        Self {
            date,
            sets: u32::try_from(reps.len().min(weights.len())).unwrap_or(u32::MAX),
            reps,
            weights,
            volume,
            max_weight,
        }
    }

    /// Number of positionally paired sets
    #[must_use]
    pub fn paired_sets(&self) -> usize {
        self.reps.len().min(self.weights.len())
    }
}

/// A training session enriched with derived intensity and estimated one-rep max
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedSession {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Number of sets performed
    pub sets: u32,
    /// Repetitions per set
    pub reps: Vec<i32>,
    /// Load per set
    pub weights: Vec<f64>,
    /// Total session volume
    pub volume: f64,
    /// Heaviest single-set load
    pub max_weight: f64,
    /// Average set load as a percentage of the max load (0-100)
    pub intensity: f64,
    /// Estimated one-rep max from the heaviest set
    pub estimated_one_rep_max: f64,
}

impl NormalizedSession {
    /// Attach derived fields to a raw session
    #[must_use]
    pub fn from_session(session: &TrainingSession, intensity: f64, estimated_one_rep_max: f64) -> Self {
        Self {
            date: session.date,
            sets: session.sets,
            reps: session.reps.clone(),
            weights: session.weights.clone(),
            volume: session.volume,
            max_weight: session.max_weight,
            intensity,
            estimated_one_rep_max,
        }
    }
}
