// ABOUTME: Core types and constants for the coach insights workspace
// ABOUTME: Foundation crate with error handling, session models, and shared constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Core
//!
//! Foundation crate providing shared types for the coach insights workspace.
//! Kept dependency-light so the analytics and CLI crates build in parallel.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: Raw and normalized training session records
//! - **constants**: Service names and environment variable keys

/// Unified error handling system with standard error codes
pub mod errors;

/// Training session data models
pub mod models;

/// Application constants organized by domain
pub mod constants;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{NormalizedSession, TrainingSession};
