// ABOUTME: Record normalization deriving intensity and estimated one-rep max per session
// ABOUTME: Implements the averaged Epley/Brzycki 1RM estimate from the heaviest logged set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::statistics;
use coach_core::models::{NormalizedSession, TrainingSession};

/// Epley divisor: `1RM = w * (1 + r / 30)`
const EPLEY_REP_DIVISOR: f64 = 30.0;

/// Brzycki constants: `1RM = w / (1.0278 - 0.0278 * r)`
const BRZYCKI_BASE: f64 = 1.0278;
const BRZYCKI_REP_FACTOR: f64 = 0.0278;

/// Converts raw sessions into sessions with derived fields
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// Normalize a history, preserving length and order
    #[must_use]
    pub fn normalize(sessions: &[TrainingSession]) -> Vec<NormalizedSession> {
        sessions.iter().map(Self::normalize_session).collect()
    }

    /// Normalize one session
    ///
    /// Degenerate sessions (no sets, zero loads) normalize to zero-valued derived fields.
    #[must_use]
    pub fn normalize_session(session: &TrainingSession) -> NormalizedSession {
        let intensity = Self::intensity(&session.weights, session.max_weight);
        let estimated_one_rep_max = Self::heaviest_set(session)
            .map_or(0.0, |(weight, reps)| Self::estimated_one_rep_max(weight, reps));

        NormalizedSession::from_session(session, intensity, estimated_one_rep_max)
    }

    /// Estimate a one-rep max from a single set
    ///
    /// Single-rep sets return the load itself. Otherwise the Epley and Brzycki
    /// estimates are averaged and rounded to the nearest whole unit. Where the
    /// Brzycki denominator is no longer positive (37+ reps) Epley alone is used.
    #[must_use]
    pub fn estimated_one_rep_max(weight: f64, reps: i32) -> f64 {
        if reps <= 0 || weight <= 0.0 {
            return 0.0;
        }
        if reps == 1 {
            return weight;
        }

        let reps = f64::from(reps);
        let epley = weight * (1.0 + reps / EPLEY_REP_DIVISOR);
        let brzycki_denominator = BRZYCKI_REP_FACTOR.mul_add(-reps, BRZYCKI_BASE);
        if brzycki_denominator <= 0.0 {
            return epley.round();
        }
        let brzycki = weight / brzycki_denominator;

        f64::midpoint(epley, brzycki).round()
    }

    /// Average set load as a percentage of the session max, clamped to 0-100
    #[must_use]
    pub fn intensity(weights: &[f64], max_weight: f64) -> f64 {
        if weights.is_empty() || max_weight <= 0.0 {
            return 0.0;
        }
        (statistics::mean(weights) / max_weight * 100.0).clamp(0.0, 100.0)
    }

    /// Pick the set used for the 1RM estimate as `(weight, reps)`
    ///
    /// First set loaded at the recorded max weight; when none matches, the
    /// set with the most reps (first on ties).
    fn heaviest_set(session: &TrainingSession) -> Option<(f64, i32)> {
        let paired = session.paired_sets();
        if paired == 0 {
            return None;
        }

        let sets = || {
            session.weights[..paired]
                .iter()
                .copied()
                .zip(session.reps[..paired].iter().copied())
        };

        sets()
            .find(|(weight, _)| (weight - session.max_weight).abs() < f64::EPSILON)
            .or_else(|| {
                sets().fold(None, |best: Option<(f64, i32)>, candidate| match best {
                    Some(current) if current.1 >= candidate.1 => Some(current),
                    _ => Some(candidate),
                })
            })
    }
}
