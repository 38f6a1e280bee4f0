// ABOUTME: Data models shared across the coach insights workspace
// ABOUTME: Re-exports raw and normalized training session records
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Raw and normalized training session records
pub mod session;

pub use session::{NormalizedSession, TrainingSession};
