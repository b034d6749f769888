// src/lib.rs

pub mod cli;
pub mod config;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod graph;
pub mod logging;
pub mod planner;
pub mod report;
pub mod status_store;
pub mod types;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::loader::load_and_validate;
use crate::engine::Engine;
use crate::status_store::{FileStatusStore, StatusStore};

pub use crate::engine::StatusMap;
pub use crate::errors::PlanError;
pub use crate::graph::{Course, CriticalPath};
pub use crate::planner::{PlannerOptions, ScheduleResult, TermCount, TermStep};
pub use crate::types::{AttemptOutcome, CourseStatus, StuckPolicy};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - catalog loading and ingestion
/// - engine construction (cycle validation, critical path)
/// - status file + `--set` overrides
/// - the schedule search (skipped with `--dry-run`)
/// - report output and optional status persistence
pub fn run(args: CliArgs) -> Result<()> {
    let catalog = load_and_validate(&args.catalog)?;
    if !catalog.rejected.is_empty() {
        warn!(
            rejected = catalog.rejected.len(),
            "some catalog entries were dropped"
        );
    }

    let mut engine = Engine::build(catalog.courses)?;

    if let Some(ref path) = args.status {
        let statuses = FileStatusStore::new(path).load()?;
        info!(path = %path, entries = statuses.len(), "applying status file");
        engine.apply_status_map(&statuses)?;
    }

    for assignment in &args.set {
        engine.set_status(&assignment.course, assignment.status)?;
    }

    let mut options = catalog.planner.planner_options();
    if let Some(cap) = args.credit_cap {
        options.credit_cap = cap;
    }
    if args.retake_failed {
        options.retake_failed = true;
    }

    let schedule = if args.dry_run {
        debug!("dry-run: skipping schedule search");
        None
    } else {
        Some(engine.optimal_schedule_with(&options)?)
    };

    print!("{}", report::render(&engine, schedule.as_ref()));

    if let Some(ref path) = args.save_status {
        FileStatusStore::new(path).save(&engine.status_map())?;
    }

    Ok(())
}
