// src/report.rs

//! Plain-text report of engine outputs.

use std::fmt::Write;

use crate::engine::Engine;
use crate::graph::CriticalPath;
use crate::planner::{ScheduleResult, TermCount};
use crate::types::{AttemptOutcome, CourseStatus};

/// Render the catalog summary, critical path and (optionally) a schedule.
pub fn render(engine: &Engine, schedule: Option<&ScheduleResult>) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail.
    let _ = write_report(&mut out, engine, schedule);
    out
}

fn write_report(
    out: &mut String,
    engine: &Engine,
    schedule: Option<&ScheduleResult>,
) -> std::fmt::Result {
    let map = engine.status_map();
    let approved = map.values().filter(|s| **s == CourseStatus::Approved).count();
    let failed = map.values().filter(|s| **s == CourseStatus::Failed).count();

    writeln!(out, "curriplan report")?;
    writeln!(
        out,
        "  courses: {} ({} approved, {} failed, {} not taken)",
        engine.len(),
        approved,
        failed,
        engine.len() - approved - failed
    )?;
    writeln!(out)?;

    write_critical_path(out, &engine.critical_path())?;

    let available = engine.available_courses();
    if !available.is_empty() {
        writeln!(out)?;
        writeln!(out, "available now: {}", available.join(", "))?;
    }

    if let Some(result) = schedule {
        writeln!(out)?;
        write_schedule(out, result)?;
    }

    Ok(())
}

fn write_critical_path(out: &mut String, path: &CriticalPath) -> std::fmt::Result {
    if path.is_empty() {
        return writeln!(out, "critical path: (empty catalog)");
    }
    writeln!(
        out,
        "critical path ({} courses, length {:.2}):",
        path.len(),
        path.length
    )?;
    writeln!(out, "  {}", path.courses.join(" -> "))
}

fn write_schedule(out: &mut String, result: &ScheduleResult) -> std::fmt::Result {
    match result.total {
        TermCount::Terms(n) => writeln!(out, "schedule: {n} term(s)")?,
        TermCount::Unreachable => writeln!(out, "schedule: unreachable")?,
    }

    for step in &result.steps {
        let courses: Vec<String> = step
            .courses
            .iter()
            .map(|c| match c.outcome {
                AttemptOutcome::Approved => c.id.clone(),
                AttemptOutcome::Failed => format!("{} (failed)", c.id),
            })
            .collect();
        writeln!(
            out,
            "  term {:>2} [{:>3} cr]: {}",
            step.term,
            step.credits,
            courses.join(", ")
        )?;
    }

    if !result.oversized.is_empty() {
        writeln!(
            out,
            "  courses above the credit cap: {}",
            result.oversized.join(", ")
        )?;
    }

    writeln!(out, "  states explored: {}", result.explored)
}
