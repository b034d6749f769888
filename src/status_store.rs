// src/status_store.rs

//! Persistence of course status maps.
//!
//! File format:
//!
//! ```toml
//! [status]
//! MAT101 = "approved"
//! MAT102 = "failed"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::engine::StatusMap;
use crate::errors::Result;
use crate::fs::{FileSystem, RealFileSystem};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct StatusFile {
    #[serde(default)]
    status: StatusMap,
}

/// Abstract storage for course statuses.
pub trait StatusStore {
    fn load(&self) -> Result<StatusMap>;
    fn save(&mut self, statuses: &StatusMap) -> Result<()>;
}

/// Stores statuses in a TOML file.
#[derive(Debug, Clone)]
pub struct FileStatusStore {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl FileStatusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(Arc::new(RealFileSystem), path)
    }

    pub fn with_fs(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StatusStore for FileStatusStore {
    /// A missing file is an empty map.
    fn load(&self) -> Result<StatusMap> {
        if !self.fs.exists(&self.path) {
            debug!(path = ?self.path, "status file not found; starting empty");
            return Ok(StatusMap::new());
        }
        let contents = self.fs.read_to_string(&self.path)?;
        let file: StatusFile = toml::from_str(&contents)?;
        debug!(path = ?self.path, entries = file.status.len(), "loaded status file");
        Ok(file.status)
    }

    fn save(&mut self, statuses: &StatusMap) -> Result<()> {
        let file = StatusFile {
            status: statuses.clone(),
        };
        let contents = toml::to_string(&file)?;
        self.fs.write(&self.path, contents.as_bytes())?;
        info!(path = ?self.path, entries = statuses.len(), "stored course statuses (file)");
        Ok(())
    }
}

/// Keeps statuses in memory only.
#[derive(Debug, Clone, Default)]
pub struct MemoryStatusStore {
    statuses: StatusMap,
}

impl MemoryStatusStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StatusStore for MemoryStatusStore {
    fn load(&self) -> Result<StatusMap> {
        Ok(self.statuses.clone())
    }

    fn save(&mut self, statuses: &StatusMap) -> Result<()> {
        self.statuses = statuses.clone();
        debug!(entries = statuses.len(), "stored course statuses (memory)");
        Ok(())
    }
}
