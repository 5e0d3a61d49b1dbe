// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Stockroom library - stock room ledger for a small retail store
//!
//! This crate provides the inventory state manager: items with generated
//! SKUs, stock in/out with daily totals that roll over at midnight, a
//! bounded activity log, and whole-file JSON persistence.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod activity;
pub mod clock;
pub mod commands;
pub mod config;
pub mod counters;
pub mod inventory;
pub mod sku;
pub mod store;

/// Core data types shared by the state manager and the snapshot file
pub mod types {
    use chrono::NaiveDate;
    use serde::{Deserialize, Serialize};
    use std::collections::BTreeMap;
    use std::fmt;

    // =========================================================================
    // Items
    // =========================================================================

    /// A stocked unit in the store
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Item {
        /// Display name
        pub name: String,
        /// Stock-keeping unit, e.g. `ELE-001`. Never changes once assigned.
        pub sku: String,
        /// Category the SKU prefix is derived from
        pub category: String,
        /// Unit price in the store currency (whole units)
        pub price: i64,
        /// Units on hand
        pub stock: i64,
    }

    impl Item {
        /// Case-insensitive substring match against name or SKU.
        ///
        /// `needle` must already be lowercased.
        #[must_use]
        pub fn matches(&self, needle: &str) -> bool {
            self.name.to_lowercase().contains(needle) || self.sku.to_lowercase().contains(needle)
        }

        /// Stock badge for this item
        #[must_use]
        pub fn status(&self) -> StockStatus {
            StockStatus::for_stock(self.stock)
        }
    }

    /// Stock badge shown next to an item
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "snake_case")]
    pub enum StockStatus {
        /// More than [`StockStatus::HEALTHY_ABOVE`] units
        InStock,
        /// At least one unit but not comfortably stocked
        LowStock,
        /// Nothing on the shelf
        OutOfStock,
    }

    impl StockStatus {
        /// Stock levels above this count as healthy
        pub const HEALTHY_ABOVE: i64 = 20;

        /// Classify a stock level
        #[must_use]
        pub fn for_stock(stock: i64) -> Self {
            if stock > Self::HEALTHY_ABOVE {
                Self::InStock
            } else if stock > 0 {
                Self::LowStock
            } else {
                Self::OutOfStock
            }
        }

        /// Human-readable label
        #[must_use]
        pub fn label(&self) -> &'static str {
            match self {
                Self::InStock => "In Stock",
                Self::LowStock => "Low Stock",
                Self::OutOfStock => "Out of Stock",
            }
        }
    }

    // =========================================================================
    // Activity
    // =========================================================================

    /// What kind of mutation an activity entry records
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub enum ActivityKind {
        /// New item added
        #[serde(rename = "add")]
        Add,
        /// Stock received
        #[serde(rename = "in")]
        StockIn,
        /// Stock sold or removed
        #[serde(rename = "out")]
        StockOut,
        /// Item deleted
        #[serde(rename = "del")]
        Delete,
        /// Item metadata edited
        #[serde(rename = "edit")]
        Edit,
    }

    impl ActivityKind {
        /// Short code used in the snapshot file
        #[must_use]
        pub fn code(&self) -> &'static str {
            match self {
                Self::Add => "add",
                Self::StockIn => "in",
                Self::StockOut => "out",
                Self::Delete => "del",
                Self::Edit => "edit",
            }
        }
    }

    impl fmt::Display for ActivityKind {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.pad(self.code())
        }
    }

    /// One line of the recent activity log
    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    pub struct ActivityEntry {
        /// Free-text description
        pub text: String,
        /// Kind tag
        #[serde(rename = "type")]
        pub kind: ActivityKind,
    }

    // =========================================================================
    // Snapshot
    // =========================================================================

    /// Everything written to the data file
    #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Snapshot {
        /// Day the daily counters apply to; absent means "today"
        #[serde(default)]
        pub date: Option<NaiveDate>,
        /// Units received on `date`
        #[serde(default)]
        pub daily_in: u64,
        /// Units removed on `date`
        #[serde(default)]
        pub daily_out: u64,
        /// Full item collection, in insertion order
        #[serde(default)]
        pub items: Vec<Item>,
        /// Most recent first
        #[serde(default)]
        pub recent_activity: Vec<ActivityEntry>,
        /// Next SKU sequence number per category. Kept so numbers freed by
        /// deletion are not handed out again after a reload.
        #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
        pub sku_counters: BTreeMap<String, u32>,
    }

    // =========================================================================
    // Dashboard
    // =========================================================================

    /// Totals shown on the dashboard
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
    pub struct Dashboard {
        /// Number of distinct items
        pub item_count: usize,
        /// Sum of stock across all items
        pub total_stock: i64,
        /// Items whose stock is below the low-stock threshold
        pub low_stock_items: usize,
        /// Units received today
        pub daily_in: u64,
        /// Units removed today
        pub daily_out: u64,
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::inventory::{InventoryError, InventorySystem};
    pub use crate::types::*;
    pub use anyhow::{Context, Result};
}
