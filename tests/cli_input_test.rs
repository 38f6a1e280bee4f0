// ABOUTME: Integration tests for session file loading and the coach-cli binary
// ABOUTME: Uses temporary JSON files to exercise single, batch, and error paths end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use coach_insights::errors::ErrorCode;
use coach_insights::input::{load_batch, load_sessions};
use common::weekly_linear_progression;
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;

fn write_json(dir: &TempDir, name: &str, value: &Value) -> String {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string(value).unwrap()).unwrap();
    path.to_string_lossy().into_owned()
}

/// Run the CLI and capture (exit code, stdout, stderr)
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(env!("CARGO_BIN_EXE_coach-cli"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap();

    (
        output.status.code().unwrap_or(-1),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
fn test_load_sessions_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let history = serde_json::to_value(weekly_linear_progression(5)).unwrap();
    let path = write_json(&dir, "squat.json", &history);

    let sessions = load_sessions(Path::new(&path)).unwrap();
    assert_eq!(sessions.len(), 5);
    assert!((sessions[4].volume - 1200.0).abs() < f64::EPSILON);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let error = load_sessions(&dir.path().join("absent.json")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("absent.json"));
}

#[test]
fn test_malformed_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{\"date\": \"2025-01-06\", ").unwrap();

    let error = load_sessions(&path).unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidFormat);
    assert!(error.message.contains("broken.json"));
}

#[test]
fn test_load_batch_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let batch = json!({
        "squat": weekly_linear_progression(6),
        "bench": weekly_linear_progression(3),
    });
    let path = write_json(&dir, "program.json", &batch);

    let histories = load_batch(Path::new(&path)).unwrap();
    assert_eq!(histories.keys().collect::<Vec<_>>(), vec!["bench", "squat"]);
    assert_eq!(histories["squat"].len(), 6);
}

#[test]
fn test_cli_analyze_prints_insights() {
    let dir = tempfile::tempdir().unwrap();
    let history = serde_json::to_value(weekly_linear_progression(8)).unwrap();
    let path = write_json(&dir, "squat.json", &history);

    let (code, stdout, _stderr) = run_cli(&["analyze", "--input", &path]);
    assert_eq!(code, 0);

    let result: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(result["overallScore"], 100);
    assert_eq!(result["trend"]["trend"], "increasing");
    assert_eq!(
        result["recommendations"]["nextSession"]["progressionType"],
        "linear"
    );
}

#[test]
fn test_cli_batch_prints_one_result_per_exercise() {
    let dir = tempfile::tempdir().unwrap();
    let batch = json!({
        "deadlift": weekly_linear_progression(8),
        "press": [],
    });
    let path = write_json(&dir, "program.json", &batch);

    let (code, stdout, _stderr) = run_cli(&["batch", "--input", &path, "--pretty"]);
    assert_eq!(code, 0);

    let results: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(results["deadlift"]["overallScore"], 100);
    assert_eq!(results["press"]["overallScore"], 0);
    assert_eq!(
        results["press"]["keyInsights"][0],
        "No data available for analysis"
    );
}

#[test]
fn test_cli_one_rep_max() {
    let (code, stdout, _stderr) = run_cli(&["one-rm", "--weight", "100", "--reps", "5"]);
    assert_eq!(code, 0);

    let result: Value = serde_json::from_str(stdout.trim()).unwrap();
    assert_eq!(result["estimatedOneRepMax"], 115.0);
}

#[test]
fn test_cli_missing_input_exits_with_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.json");

    let (code, stdout, stderr) = run_cli(&["analyze", "--input", &missing.to_string_lossy()]);
    assert_eq!(code, 66);
    assert!(stdout.is_empty());
    assert!(stderr.contains("nope.json"));
}
