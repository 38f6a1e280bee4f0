// ABOUTME: Main library entry point for the coach insights training analytics tools
// ABOUTME: Wires session input, configuration, logging, and batch analysis around the analytics engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Insights
//!
//! Training analytics for strength session histories. Given the logged
//! sessions of one exercise, the engine reports the volume trend, one-rep max
//! progression, training consistency, plateau status, volume projections, a
//! next-session recommendation, and a composite score with highlights.
//!
//! ## Architecture
//!
//! - **coach-core**: error types, session models, constants
//! - **coach-intelligence**: the analyzers and the insight aggregator
//! - **input**: JSON session files for one or many exercises
//! - **batch**: parallel analysis across exercises
//! - **config** / **logging**: environment-driven setup for the CLI
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use coach_insights::intelligence::generate_insights;
//! use coach_insights::models::TrainingSession;
//!
//! let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap_or_default();
//! let sessions = vec![TrainingSession::from_sets(date, vec![5, 5], vec![100.0, 100.0])];
//! let result = generate_insights(&sessions);
//! assert_eq!(result.trend.recommendation, "need more data");
//! ```

/// Error types shared across the workspace
pub use coach_core::errors;

/// Training session models
pub use coach_core::models;

/// Application constants
pub use coach_core::constants;

/// Analytics engine
pub use coach_intelligence as intelligence;

/// Parallel multi-exercise analysis
pub mod batch;

/// Environment-based configuration
pub mod config;

/// Session file loading
pub mod input;

/// Structured logging setup
pub mod logging;
