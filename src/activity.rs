// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Recent activity log, newest first and capped

use crate::types::{ActivityEntry, ActivityKind};
use std::collections::VecDeque;

/// Maximum number of entries kept
pub const ACTIVITY_LIMIT: usize = 10;

/// Bounded, most-recent-first record of mutations
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from persisted entries (front = most recent), keeping the newest
    #[must_use]
    pub fn from_entries(entries: Vec<ActivityEntry>) -> Self {
        let mut entries = VecDeque::from(entries);
        entries.truncate(ACTIVITY_LIMIT);
        Self { entries }
    }

    /// Insert at the front, evicting the oldest entry past the limit
    pub fn record(&mut self, text: impl Into<String>, kind: ActivityKind) {
        self.entries.push_front(ActivityEntry {
            text: text.into(),
            kind,
        });
        self.entries.truncate(ACTIVITY_LIMIT);
    }

    /// Entries, newest first
    pub fn iter(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    /// Most recent entry
    #[must_use]
    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.front()
    }

    /// Entry at `index` (0 = most recent)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ActivityEntry> {
        self.entries.get(index)
    }

    /// Number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been logged
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Copy out for serialization
    #[must_use]
    pub fn to_vec(&self) -> Vec<ActivityEntry> {
        self.entries.iter().cloned().collect()
    }
}
