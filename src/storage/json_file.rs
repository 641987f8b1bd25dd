//! File-backed snapshot store: one JSON document at a fixed path.
//! There is no migration logic; content that fails to parse is treated
//! as an absent snapshot and defaults take over.

use std::fs;
use std::path::{Path, PathBuf};

use crate::errors::{AppError, AppResult};
use crate::storage::{AppSnapshot, SnapshotStore};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&self) -> AppResult<Option<AppSnapshot>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .map_err(|e| AppError::Storage(format!("read {}: {}", self.path.display(), e)))?;

        // Incompatible or corrupt content is "no snapshot", not a failure.
        Ok(serde_json::from_str(&content).ok())
    }

    fn save(&self, snapshot: &AppSnapshot) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&self.path, json)
            .map_err(|e| AppError::Storage(format!("write {}: {}", self.path.display(), e)))?;
        Ok(())
    }
}
