// ABOUTME: Coach CLI - command-line front end for the training analytics engine
// ABOUTME: Analyzes session histories from JSON files and prints insight results as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Full insights for one exercise history
//! coach-cli analyze --input squat.json --pretty
//!
//! # Insights for several exercises at once, analyzed in parallel
//! coach-cli batch --input program.json
//!
//! # Estimated one-rep max for a single set
//! coach-cli one-rm --weight 100 --reps 5
//!
//! # Show the effective configuration
//! coach-cli config
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use coach_core::errors::{AppResult, ErrorResponse};
use coach_insights::config::AppConfig;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "coach-cli",
    about = "Coach Insights training analytics CLI",
    long_about = "Analyze strength training session histories: volume trend, one-rep max progression, consistency, plateaus, projections, and next-session recommendations."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Generate insights for one exercise history (JSON array of sessions)
    Analyze {
        /// Path to the session history file
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Generate insights for several exercises (JSON object of name to sessions)
    Batch {
        /// Path to the batch file
        #[arg(long, short = 'i')]
        input: PathBuf,
    },

    /// Estimate a one-rep max from a single set
    OneRm {
        /// Load lifted
        #[arg(long)]
        weight: f64,

        /// Repetitions completed
        #[arg(long)]
        reps: i32,
    },

    /// Print the effective configuration
    Config,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = ?e.code, "{e}");
            let status = u8::try_from(e.exit_code()).unwrap_or(1);
            let fallback = e.to_string();
            let body = serde_json::to_string(&ErrorResponse::from(e)).unwrap_or(fallback);
            eprintln!("{body}");
            ExitCode::from(status)
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut config = AppConfig::from_env()?;
    if cli.verbose {
        config.logging = config.logging.with_level("debug");
    }
    if let Err(e) = config.logging.init() {
        eprintln!("Warning: logging unavailable: {e}");
    }
    debug!("coach-cli starting");

    match cli.command {
        Command::Analyze { input } => commands::analyze::single(&input, &config, cli.pretty),
        Command::Batch { input } => commands::analyze::batch(&input, &config, cli.pretty),
        Command::OneRm { weight, reps } => commands::tools::one_rep_max(weight, reps, cli.pretty),
        Command::Config => commands::tools::show_config(&config, cli.pretty),
    }
}
