// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Reset command - delete the data file and start from nothing

use crate::store::{ResetOutcome, SnapshotStore};
use anyhow::{Context, Result};
use std::path::Path;

/// Remove the data file. Reports failure when there was nothing to remove.
pub fn run(data_file: &Path) -> Result<()> {
    let store = SnapshotStore::new(data_file);
    let outcome = store
        .reset()
        .with_context(|| format!("Failed to reset {}", data_file.display()))?;

    match outcome {
        ResetOutcome::Removed => {
            println!("Removed {}", data_file.display());
            Ok(())
        }
        ResetOutcome::Absent => anyhow::bail!("No data file at {}", data_file.display()),
    }
}
