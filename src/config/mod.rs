// ABOUTME: Configuration management module for the coach insights tools
// ABOUTME: Combines logging settings with analytics thresholds loaded from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: application configuration assembled from environment variables

/// Environment-based application configuration
pub mod environment;

pub use environment::AppConfig;
