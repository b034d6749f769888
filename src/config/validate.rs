// src/config/validate.rs

use crate::config::ingest::ingest;
use crate::config::model::{Catalog, PlannerSection, RawCatalog};
use crate::errors::{PlanError, Result};

impl TryFrom<RawCatalog> for Catalog {
    type Error = PlanError;

    fn try_from(raw: RawCatalog) -> std::result::Result<Self, Self::Error> {
        validate_planner(&raw.planner)?;
        let (courses, rejected) = ingest(&raw.course);
        Ok(Catalog::new_unchecked(raw.planner, courses, rejected))
    }
}

/// Settings errors fail the load; course errors never do.
fn validate_planner(planner: &PlannerSection) -> Result<()> {
    if planner.credit_cap == 0 {
        return Err(PlanError::ConfigError(
            "[planner].credit_cap must be >= 1 (got 0)".to_string(),
        ));
    }

    if planner.max_search_nodes == 0 {
        return Err(PlanError::ConfigError(
            "[planner].max_search_nodes must be >= 1 (got 0)".to_string(),
        ));
    }

    if planner.max_combinations == 0 {
        return Err(PlanError::ConfigError(
            "[planner].max_combinations must be >= 1 (got 0)".to_string(),
        ));
    }

    if planner.deadline_ms == Some(0) {
        return Err(PlanError::ConfigError(
            "[planner].deadline_ms must be >= 1 when set (got 0)".to_string(),
        ));
    }

    Ok(())
}
