// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for coach-cli
// ABOUTME: Provides access to analysis and utility commands

pub mod analyze;
pub mod tools;
