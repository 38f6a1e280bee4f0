// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for coach-cli
// ABOUTME: Writes command results to stdout as compact or pretty JSON

use coach_core::errors::AppResult;
use serde::Serialize;
use std::io::{self, Write};

/// Write a value to stdout as JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> AppResult<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")?;
    stdout.flush()?;
    Ok(())
}
