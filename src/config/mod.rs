// src/config/mod.rs

//! Catalog loading for curriplan.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Turn raw entries into courses or rejections (`ingest.rs`).
//! - Validate planner settings (`validate.rs`).
//! - Load a catalog file from disk (`loader.rs`).

pub mod ingest;
pub mod loader;
pub mod model;
pub mod validate;

pub use ingest::{Ingested, ingest, parse_course};
pub use loader::{
    DEFAULT_CATALOG_FILE, load_and_validate, load_and_validate_with, load_from_path,
    load_from_path_with,
};
pub use model::{Catalog, PlannerSection, RawCatalog, RawCourse};
