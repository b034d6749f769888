// src/cli.rs

//! CLI argument parsing using `clap`.

use std::str::FromStr;

use clap::{Parser, ValueEnum};

use crate::config::DEFAULT_CATALOG_FILE;
use crate::types::CourseStatus;

/// Command-line arguments for `curriplan`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "curriplan",
    version,
    about = "Validate a course catalog and plan the fewest terms to finish it.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the catalog file (TOML).
    #[arg(long, value_name = "PATH", default_value = DEFAULT_CATALOG_FILE)]
    pub catalog: String,

    /// Status file (TOML) applied on top of the statuses in the catalog.
    #[arg(long, value_name = "PATH")]
    pub status: Option<String>,

    /// Set a course status, e.g. `--set MAT101=approved`. Repeatable;
    /// applied in order after `--status`.
    #[arg(long = "set", value_name = "ID=STATUS", value_parser = parse_assignment)]
    pub set: Vec<StatusAssignment>,

    /// Override `[planner].credit_cap`.
    #[arg(long, value_name = "N")]
    pub credit_cap: Option<u32>,

    /// Plan failed courses as retakes (overrides `[planner].retake_failed`).
    #[arg(long)]
    pub retake_failed: bool,

    /// Write the resulting statuses to this file.
    #[arg(long, value_name = "PATH")]
    pub save_status: Option<String>,

    /// Validate and print the critical path, but skip the schedule search.
    #[arg(long)]
    pub dry_run: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `CURRIPLAN_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

/// One `--set ID=STATUS` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusAssignment {
    pub course: String,
    pub status: CourseStatus,
}

fn parse_assignment(s: &str) -> Result<StatusAssignment, String> {
    let (course, status) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=STATUS, got '{s}'"))?;
    let course = course.trim();
    if course.is_empty() {
        return Err(format!("missing course id in '{s}'"));
    }
    Ok(StatusAssignment {
        course: course.to_string(),
        status: CourseStatus::from_str(status)?,
    })
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
