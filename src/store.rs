// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Whole-file JSON persistence for the inventory snapshot

use crate::types::Snapshot;
use serde::Serialize;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Fixed name of the data file
pub const DATA_FILE_NAME: &str = "inventory_data.json";

/// Errors that can occur reading or writing the snapshot.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The file is not a valid snapshot.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The in-memory state could not be encoded.
    #[error("failed to serialize inventory: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The file (or its directory) could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// Path being written.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },

    /// The file could not be deleted.
    #[error("failed to remove {path}: {source}")]
    Remove {
        /// Snapshot path.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: io::Error,
    },
}

/// What [`SnapshotStore::reset`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetOutcome {
    /// The data file was deleted
    Removed,
    /// There was no data file to delete
    Absent,
}

/// Reads and writes the snapshot file
#[derive(Debug, Clone)]
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    /// Store backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store backed by [`DATA_FILE_NAME`] inside `dir`
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DATA_FILE_NAME))
    }

    /// Path of the snapshot file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the snapshot. `Ok(None)` when the file does not exist.
    pub fn load(&self) -> Result<Option<Snapshot>, StoreError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no data file yet");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;
        let snapshot = serde_json::from_str(&content).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), "loaded data file");
        Ok(Some(snapshot))
    }

    /// Overwrite the snapshot file with `snapshot`.
    ///
    /// The new content goes to a sibling `.tmp` file first and is renamed over
    /// the old one, so a failed write never leaves a truncated snapshot.
    pub fn save(&self, snapshot: &Snapshot) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|source| StoreError::Write {
                path: dir.to_path_buf(),
                source,
            })?;
        }

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        snapshot.serialize(&mut ser).map_err(StoreError::Serialize)?;

        let tmp = self.temp_path();
        fs::write(&tmp, &buf).map_err(|source| StoreError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &self.path).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!(path = %self.path.display(), items = snapshot.items.len(), "saved data file");
        Ok(())
    }

    /// Delete the snapshot file, wiping all persisted state
    pub fn reset(&self) -> Result<ResetOutcome, StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(ResetOutcome::Removed),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(ResetOutcome::Absent),
            Err(source) => Err(StoreError::Remove {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".tmp");
        PathBuf::from(name)
    }
}
