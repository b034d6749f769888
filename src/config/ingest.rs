// src/config/ingest.rs

//! Parse-then-validate boundary between raw catalog entries and courses.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use crate::config::model::RawCourse;
use crate::graph::{Course, RejectReason, RejectedCourse, screen_courses};

/// Result of parsing one raw catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ingested {
    Accepted(Course),
    Rejected(RejectedCourse),
}

/// Parse a single entry. Only checks the entry in isolation; references to
/// other courses are checked by [`ingest`].
pub fn parse_course(id: &str, raw: &RawCourse) -> Ingested {
    let reject = |reason| {
        Ingested::Rejected(RejectedCourse {
            id: id.to_string(),
            reason,
        })
    };

    if id.trim().is_empty() {
        return reject(RejectReason::EmptyId);
    }
    let Some(prerequisites) = raw.prerequisites.clone() else {
        return reject(RejectReason::MissingPrerequisiteList);
    };
    let credits = match raw.credits {
        None => return reject(RejectReason::MissingCredits),
        Some(0) => return reject(RejectReason::ZeroCredits),
        Some(c) => c,
    };

    Ingested::Accepted(Course {
        id: id.to_string(),
        name: raw.name.clone().unwrap_or_else(|| id.to_string()),
        credits,
        origin_term: raw.term.unwrap_or(0),
        prerequisites,
        status: raw.status.unwrap_or_default(),
    })
}

/// Parse every entry and drop those that cannot be part of a graph.
///
/// Returns the accepted courses (in id order) and the rejected entries.
/// Rejections are logged but never fatal.
pub fn ingest(raw: &BTreeMap<String, RawCourse>) -> (Vec<Course>, Vec<RejectedCourse>) {
    let mut parsed = Vec::with_capacity(raw.len());
    let mut rejected = Vec::new();

    for (id, entry) in raw {
        match parse_course(id, entry) {
            Ingested::Accepted(course) => parsed.push(course),
            Ingested::Rejected(r) => rejected.push(r),
        }
    }

    let (accepted, mut structural) = screen_courses(parsed);
    rejected.append(&mut structural);

    for r in &rejected {
        warn!(course = %r.id, reason = %r.reason, "rejected catalog entry");
    }
    debug!(
        accepted = accepted.len(),
        rejected = rejected.len(),
        "catalog ingestion complete"
    );

    (accepted, rejected)
}
