// src/config/loader.rs

use std::path::Path;
use std::time::Duration;

use crate::config::model::{Catalog, PlannerSection, RawCatalog};
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};
use crate::planner::{PlannerOptions, SearchLimits};

/// Read a catalog file and deserialize it. No semantic validation.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<RawCatalog> {
    load_from_path_with(&RealFileSystem, path)
}

/// [`load_from_path`] against an arbitrary [`FileSystem`].
pub fn load_from_path_with(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<RawCatalog> {
    let contents = fs.read_to_string(path.as_ref())?;
    let catalog: RawCatalog = toml::from_str(&contents)?;
    Ok(catalog)
}

/// Read, deserialize and ingest a catalog.
///
/// - Invalid `[planner]` settings fail with `ConfigError`.
/// - Invalid course entries are dropped and listed in `Catalog::rejected`.
///
/// Prerequisite cycles are not detected here; building the
/// [`Engine`](crate::engine::Engine) does that.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<Catalog> {
    load_and_validate_with(&RealFileSystem, path)
}

pub fn load_and_validate_with(fs: &dyn FileSystem, path: impl AsRef<Path>) -> Result<Catalog> {
    let raw = load_from_path_with(fs, path)?;
    Catalog::try_from(raw)
}

/// Catalog file read when no path is given, relative to the working
/// directory.
pub const DEFAULT_CATALOG_FILE: &str = "Curriculum.toml";

impl PlannerSection {
    /// Planner options described by this section.
    pub fn planner_options(&self) -> PlannerOptions {
        PlannerOptions {
            credit_cap: self.credit_cap,
            limits: SearchLimits {
                max_nodes: self.max_search_nodes,
                max_combinations: self.max_combinations,
                deadline: self.deadline_ms.map(Duration::from_millis),
            },
            on_stuck: self.on_stuck,
            first_term: self.first_term,
            retake_failed: self.retake_failed,
        }
    }
}
