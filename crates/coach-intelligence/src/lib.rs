// ABOUTME: Training analytics engine for strength session histories
// ABOUTME: Trend, progression, consistency, plateau, prediction, recommendation, and insight summaries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Intelligence
//!
//! Deterministic, side-effect-free analytics over one exercise's session history.
//! Every analyzer accepts normalized sessions plus an [`AnalyticsConfig`] and
//! falls back to a neutral summary when the history is too short.
//!
//! ## Pipeline
//!
//! - **normalizer**: per-session intensity and estimated one-rep max
//! - **trend**: least-squares volume trend and volatility
//! - **progression**: 1RM improvement, curve shape, next milestone
//! - **consistency**: spacing, streaks, weekly volume, adherence
//! - **plateau**: recent-window stagnation detection
//! - **prediction**: linear volume projections and risk factors
//! - **recommendation**: next-session loads and long-term plan
//! - **insights**: aggregation, composite score, highlights, actions

/// Threshold configuration with environment overrides
pub mod config;

/// Shared numeric helpers
pub mod statistics;

/// Session normalization and one-rep max estimation
pub mod normalizer;

/// Volume trend analysis
pub mod trend;

/// Strength progression analysis
pub mod progression;

/// Training consistency analysis
pub mod consistency;

/// Plateau detection
pub mod plateau;

/// Volume projection
pub mod prediction;

/// Next-session recommendations
pub mod recommendation;

/// Insight aggregation
pub mod insights;

pub use config::{AnalyticsConfig, ConfigError};
pub use consistency::{ConsistencyAnalyzer, ConsistencySummary, ConsistencyTrend};
pub use insights::{generate_insights, generate_insights_with_config, InsightAggregator, InsightResult};
pub use normalizer::RecordNormalizer;
pub use plateau::{PlateauDetector, PlateauSeverity, PlateauSummary};
pub use prediction::{PerformancePredictor, PredictionSummary, RiskFactor};
pub use progression::{ProgressionAnalyzer, ProgressionCurve, ProgressionSummary};
pub use recommendation::{ProgressionType, RecommendationGenerator, RecommendationSummary, RiskLevel};
pub use trend::{TrendAnalyzer, TrendDirection, TrendSummary};
