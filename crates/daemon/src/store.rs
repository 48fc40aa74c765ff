// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Persistence of the last job list seen, so a restart diffs against the
//! state from before shutdown instead of starting blind.

use chrono::{DateTime, Utc};
use jw_core::Snapshot;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Current stored snapshot schema version
pub const CURRENT_STORE_VERSION: u32 = 1;

/// Errors that can occur in snapshot store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported store version {0}")]
    Version(u32),
}

/// A job list as written to disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredSnapshot {
    /// Schema version
    #[serde(rename = "v")]
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub snapshot: Snapshot,
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the last saved snapshot; `None` if nothing was saved yet.
    pub fn load(&self) -> Result<Option<StoredSnapshot>, StoreError> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let stored: StoredSnapshot = serde_json::from_slice(&bytes)?;
        if stored.version != CURRENT_STORE_VERSION {
            return Err(StoreError::Version(stored.version));
        }
        Ok(Some(stored))
    }

    /// Write `snapshot` atomically (temp file + rename).
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let stored = StoredSnapshot {
            version: CURRENT_STORE_VERSION,
            saved_at: Utc::now(),
            snapshot: snapshot.clone(),
        };
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, serde_json::to_vec(&stored)?)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
