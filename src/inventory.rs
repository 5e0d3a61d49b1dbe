// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Inventory state manager - items, stock movements, daily totals, activity
//!
//! Every mutating operation rewrites the whole snapshot file before it
//! returns. A failed save is reported but the in-memory change is kept, so
//! memory and disk diverge until the next successful save.

use crate::activity::ActivityLog;
use crate::clock::{Clock, SystemClock};
use crate::counters::DailyCounters;
use crate::sku::SkuGenerator;
use crate::store::{SnapshotStore, StoreError};
use crate::types::{ActivityKind, Dashboard, Item, Snapshot};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Why an inventory operation did not go through.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// No item matched the name or SKU.
    #[error("no item matches '{query}'")]
    NotFound {
        /// What was searched for.
        query: String,
    },

    /// Removing would take stock below zero.
    #[error("not enough stock for {sku}: {available} on hand, {requested} requested")]
    InsufficientStock {
        /// Item that was short.
        sku: String,
        /// Units on hand.
        available: i64,
        /// Units asked for.
        requested: u32,
    },

    /// Receiving would push the on-hand count past what can be stored.
    #[error("cannot add {added} units to {sku}: {on_hand} already on hand")]
    StockOverflow {
        /// Item being restocked.
        sku: String,
        /// Units on hand.
        on_hand: i64,
        /// Units offered.
        added: u32,
    },

    /// The change was applied in memory but could not be written to disk.
    #[error("failed to save inventory")]
    Persist(#[from] StoreError),
}

/// The in-memory inventory and its backing snapshot file
pub struct InventorySystem<C: Clock = SystemClock> {
    items: Vec<Item>,
    skus: SkuGenerator,
    activity: ActivityLog,
    counters: DailyCounters,
    store: SnapshotStore,
    clock: C,
}

impl InventorySystem<SystemClock> {
    /// Open the inventory stored at `path` using the wall clock
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_with_clock(path, SystemClock)
    }
}

impl<C: Clock> InventorySystem<C> {
    /// Open the inventory stored at `path`.
    ///
    /// A missing file gives an empty inventory. An unreadable or malformed
    /// file is logged and also gives an empty inventory.
    pub fn open_with_clock(path: impl Into<PathBuf>, clock: C) -> Self {
        let today = clock.today();
        let mut system = Self {
            items: Vec::new(),
            skus: SkuGenerator::new(),
            activity: ActivityLog::new(),
            counters: DailyCounters::new(today),
            store: SnapshotStore::new(path),
            clock,
        };
        system.load();
        system
    }

    fn load(&mut self) {
        match self.store.load() {
            Ok(Some(snapshot)) => self.restore(snapshot),
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "failed to load inventory data, starting empty");
            }
        }
    }

    fn restore(&mut self, snapshot: Snapshot) {
        let today = self.clock.today();
        let saved_on = snapshot.date.unwrap_or(today);
        self.counters = DailyCounters::restore(saved_on, snapshot.daily_in, snapshot.daily_out);
        if self.counters.rollover(today) {
            info!(%saved_on, %today, "day changed since last save, daily stats reset");
        }

        self.skus.clear();
        for (category, next) in &snapshot.sku_counters {
            self.skus.seed(category, *next);
        }
        for item in &snapshot.items {
            self.skus.observe(&item.category, &item.sku);
        }
        self.items = snapshot.items;
        self.activity = ActivityLog::from_entries(snapshot.recent_activity);
    }

    /// Current state as written to disk
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            date: Some(self.counters.date()),
            daily_in: self.counters.stock_in(),
            daily_out: self.counters.stock_out(),
            items: self.items.clone(),
            recent_activity: self.activity.to_vec(),
            sku_counters: self.skus.counters(),
        }
    }

    /// Write the full snapshot
    pub fn save(&self) -> Result<(), InventoryError> {
        self.store.save(&self.snapshot())?;
        Ok(())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Add a new item with a SKU generated from its category.
    ///
    /// Price and stock are taken as-is; input validation is the caller's job.
    pub fn add_item(
        &mut self,
        name: &str,
        category: &str,
        price: i64,
        stock: i64,
    ) -> Result<&Item, InventoryError> {
        let items = &self.items;
        let sku = self
            .skus
            .issue(category, |candidate| items.iter().any(|i| i.sku == candidate));

        info!(%sku, name, "item added");
        self.items.push(Item {
            name: name.to_string(),
            sku,
            category: category.to_string(),
            price,
            stock,
        });
        self.log_activity(format!("New Item: {name}"), ActivityKind::Add);
        self.save()?;

        Ok(&self.items[self.items.len() - 1])
    }

    /// Receive `amount` units of the first item matching `name_or_sku`.
    ///
    /// Fails without touching anything if the new count would overflow.
    pub fn add_stock(&mut self, name_or_sku: &str, amount: u32) -> Result<&Item, InventoryError> {
        let idx = self.require(name_or_sku)?;

        let item = &mut self.items[idx];
        let Some(stock) = item.stock.checked_add(i64::from(amount)) else {
            return Err(InventoryError::StockOverflow {
                sku: item.sku.clone(),
                on_hand: item.stock,
                added: amount,
            });
        };
        item.stock = stock;
        let text = format!("Stock In: {amount}x {}", item.name);

        self.counters.record_in(amount);
        self.log_activity(text, ActivityKind::StockIn);
        self.save()?;

        Ok(&self.items[idx])
    }

    /// Take `amount` units out of the first item matching `name_or_sku`.
    ///
    /// Fails without touching anything if the item has fewer than `amount`.
    pub fn remove_stock(&mut self, name_or_sku: &str, amount: u32) -> Result<&Item, InventoryError> {
        let idx = self.require(name_or_sku)?;

        let item = &mut self.items[idx];
        if item.stock < i64::from(amount) {
            return Err(InventoryError::InsufficientStock {
                sku: item.sku.clone(),
                available: item.stock,
                requested: amount,
            });
        }
        item.stock -= i64::from(amount);
        let text = format!("Stock Out: {amount}x {}", item.name);

        self.counters.record_out(amount);
        self.log_activity(text, ActivityKind::StockOut);
        self.save()?;

        Ok(&self.items[idx])
    }

    /// Remove the first item matching `name_or_sku`, returning it
    pub fn delete_item(&mut self, name_or_sku: &str) -> Result<Item, InventoryError> {
        let idx = self.require(name_or_sku)?;

        let item = self.items.remove(idx);
        info!(sku = %item.sku, "item deleted");
        self.log_activity(format!("Deleted: {}", item.name), ActivityKind::Delete);
        self.save()?;

        Ok(item)
    }

    /// Overwrite name, category, price and stock of the item with exactly `sku`.
    ///
    /// The SKU itself never changes, even when the category does.
    pub fn update_item(
        &mut self,
        sku: &str,
        new_name: &str,
        new_category: &str,
        new_price: i64,
        new_stock: i64,
    ) -> Result<&Item, InventoryError> {
        let idx = self
            .items
            .iter()
            .position(|i| i.sku == sku)
            .ok_or_else(|| InventoryError::NotFound {
                query: sku.to_string(),
            })?;

        let item = &mut self.items[idx];
        let mut text = format!("Updated Item: {}", item.sku);
        if item.name != new_name {
            text.push_str(&format!(" (Name: {} -> {new_name})", item.name));
        }
        if item.category != new_category {
            text.push_str(&format!(" (Category: {} -> {new_category})", item.category));
        }
        if item.price != new_price {
            text.push_str(&format!(" (Price: {} -> {new_price})", item.price));
        }
        if item.stock != new_stock {
            text.push_str(&format!(" (Stock: {} -> {new_stock})", item.stock));
        }

        item.name = new_name.to_string();
        item.category = new_category.to_string();
        item.price = new_price;
        item.stock = new_stock;

        self.log_activity(text, ActivityKind::Edit);
        self.save()?;

        Ok(&self.items[idx])
    }

    /// Push an entry onto the recent activity log
    pub fn log_activity(&mut self, text: impl Into<String>, kind: ActivityKind) {
        self.activity.record(text, kind);
    }

    /// Reset the daily totals if the calendar day has changed.
    ///
    /// Returns true when a reset happened so the caller can redraw.
    pub fn check_daily_reset(&mut self) -> bool {
        let today = self.clock.today();
        let reset = self.counters.rollover(today);
        if reset {
            info!(%today, "daily stats reset");
        }
        reset
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// First item whose name or SKU contains `query`, ignoring case.
    ///
    /// A blank query matches nothing.
    #[must_use]
    pub fn search_item(&self, query: &str) -> Option<&Item> {
        self.find_index(query).map(|idx| &self.items[idx])
    }

    /// Every item whose name or SKU contains `query`; all items for a blank query
    #[must_use]
    pub fn filter_items(&self, query: &str) -> Vec<&Item> {
        let needle = query.trim().to_lowercase();
        self.items.iter().filter(|i| i.matches(&needle)).collect()
    }

    /// Item with exactly this SKU
    #[must_use]
    pub fn get_item_by_sku(&self, sku: &str) -> Option<&Item> {
        self.items.iter().find(|i| i.sku == sku)
    }

    /// Dashboard totals. Items with stock below `low_stock_threshold` count as low.
    #[must_use]
    pub fn dashboard(&self, low_stock_threshold: i64) -> Dashboard {
        Dashboard {
            item_count: self.items.len(),
            total_stock: self
                .items
                .iter()
                .fold(0i64, |acc, i| acc.saturating_add(i.stock)),
            low_stock_items: self
                .items
                .iter()
                .filter(|i| i.stock < low_stock_threshold)
                .count(),
            daily_in: self.counters.stock_in(),
            daily_out: self.counters.stock_out(),
        }
    }

    /// All items in insertion order
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Units received today
    #[must_use]
    pub fn daily_in(&self) -> u64 {
        self.counters.stock_in()
    }

    /// Units removed today
    #[must_use]
    pub fn daily_out(&self) -> u64 {
        self.counters.stock_out()
    }

    /// Day the daily totals belong to
    #[must_use]
    pub fn current_date(&self) -> NaiveDate {
        self.counters.date()
    }

    /// Recent activity, newest first
    #[must_use]
    pub fn recent_activity(&self) -> &ActivityLog {
        &self.activity
    }

    /// Path of the backing data file
    #[must_use]
    pub fn data_file(&self) -> &Path {
        self.store.path()
    }

    fn find_index(&self, query: &str) -> Option<usize> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }
        self.items.iter().position(|i| i.matches(&needle))
    }

    fn require(&self, name_or_sku: &str) -> Result<usize, InventoryError> {
        self.find_index(name_or_sku)
            .ok_or_else(|| InventoryError::NotFound {
                query: name_or_sku.trim().to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::store::DATA_FILE_NAME;
    use tempfile::TempDir;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn open(dir: &TempDir) -> (InventorySystem<ManualClock>, ManualClock) {
        let clock = ManualClock::new(start());
        let system = InventorySystem::open_with_clock(dir.path().join(DATA_FILE_NAME), clock.clone());
        (system, clock)
    }

    #[test]
    fn test_add_item_generates_skus() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);

        let mouse = system.add_item("Mouse", "Electronics", 50_000, 10).unwrap().sku.clone();
        let keyboard = system.add_item("Keyboard", "Electronics", 150_000, 5).unwrap().sku.clone();

        assert_eq!(mouse, "ELE-001");
        assert_eq!(keyboard, "ELE-002");
        assert_eq!(system.recent_activity().latest().unwrap().text, "New Item: Keyboard");
        assert!(system.data_file().exists());
    }

    #[test]
    fn test_add_item_accepts_negative_values() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);

        let item = system.add_item("Refund", "Misc", -5, -1).unwrap();
        assert_eq!(item.price, -5);
        assert_eq!(item.stock, -1);
    }

    #[test]
    fn test_search_is_case_insensitive_on_name_and_sku() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();
        system.add_item("Headset", "Audio", 350_000, 3).unwrap();

        assert_eq!(system.search_item("  mOUSE ").unwrap().sku, "ELE-001");
        assert_eq!(system.search_item("aud-001").unwrap().name, "Headset");
        assert_eq!(system.search_item("e").unwrap().name, "Mouse");
        assert!(system.search_item("speaker").is_none());
        assert!(system.search_item("   ").is_none());
    }

    #[test]
    fn test_stock_in_and_out() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();

        assert_eq!(system.add_stock("Mouse", 5).unwrap().stock, 15);
        assert_eq!(system.daily_in(), 5);

        let err = system.remove_stock("Mouse", 100).unwrap_err();
        assert!(matches!(err, InventoryError::InsufficientStock { available: 15, requested: 100, .. }));
        assert_eq!(system.search_item("Mouse").unwrap().stock, 15);
        assert_eq!(system.daily_out(), 0);

        assert_eq!(system.remove_stock("ele-001", 15).unwrap().stock, 0);
        assert_eq!(system.daily_out(), 15);
        assert_eq!(system.recent_activity().latest().unwrap().text, "Stock Out: 15x Mouse");
    }

    #[test]
    fn test_stock_in_past_max_is_rejected() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Bolt", "Hardware", 100, i64::MAX).unwrap();
        let logged = system.recent_activity().len();

        let err = system.add_stock("Bolt", 1).unwrap_err();
        assert!(matches!(
            err,
            InventoryError::StockOverflow { on_hand: i64::MAX, added: 1, .. }
        ));
        assert_eq!(system.search_item("Bolt").unwrap().stock, i64::MAX);
        assert_eq!(system.daily_in(), 0);
        assert_eq!(system.recent_activity().len(), logged);
    }

    #[test]
    fn test_dashboard_total_saturates() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Bolt", "Hardware", 100, i64::MAX).unwrap();
        system.add_item("Nut", "Hardware", 50, 7).unwrap();

        assert_eq!(system.dashboard(10).total_stock, i64::MAX);
    }

    #[test]
    fn test_sku_counters_survive_reopen() {
        let dir = TempDir::new().unwrap();
        {
            let (mut system, _) = open(&dir);
            system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();
            system.add_item("Keyboard", "Electronics", 150_000, 5).unwrap();
            system.delete_item("ELE-002").unwrap();
            assert_eq!(system.snapshot().sku_counters.get("Electronics"), Some(&3));
        }

        let (mut system, _) = open(&dir);
        let sku = system.add_item("Monitor", "Electronics", 2_000_000, 2).unwrap().sku.clone();
        assert_eq!(sku, "ELE-003");
    }

    #[test]
    fn test_not_found_leaves_state_untouched() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);

        assert!(matches!(system.add_stock("ghost", 1), Err(InventoryError::NotFound { .. })));
        assert!(matches!(system.remove_stock("ghost", 1), Err(InventoryError::NotFound { .. })));
        assert!(matches!(system.delete_item("ghost"), Err(InventoryError::NotFound { .. })));
        assert_eq!(system.daily_in(), 0);
        assert!(system.recent_activity().is_empty());
        assert!(!system.data_file().exists());
    }

    #[test]
    fn test_delete_never_reuses_sku() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();

        let removed = system.delete_item("Mouse").unwrap();
        assert_eq!(removed.sku, "ELE-001");
        assert!(system.search_item("Mouse").is_none());

        let sku = system.add_item("Trackball", "Electronics", 80_000, 2).unwrap().sku.clone();
        assert_eq!(sku, "ELE-002");
    }

    #[test]
    fn test_update_applies_all_fields_and_keeps_sku() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();

        let item = system.update_item("ELE-001", "Gaming Mouse", "Peripherals", 75_000, 12).unwrap();
        assert_eq!(item.sku, "ELE-001");
        assert_eq!(item.name, "Gaming Mouse");
        assert_eq!(item.category, "Peripherals");
        assert_eq!(item.price, 75_000);
        assert_eq!(item.stock, 12);

        let entry = system.recent_activity().latest().unwrap();
        assert_eq!(entry.kind, ActivityKind::Edit);
        assert_eq!(
            entry.text,
            "Updated Item: ELE-001 (Name: Mouse -> Gaming Mouse) (Category: Electronics -> Peripherals) \
             (Price: 50000 -> 75000) (Stock: 10 -> 12)"
        );
    }

    #[test]
    fn test_update_requires_exact_sku() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();

        assert!(system.update_item("ele-001", "X", "Y", 1, 1).is_err());
        assert!(system.update_item("Mouse", "X", "Y", 1, 1).is_err());
        assert_eq!(system.get_item_by_sku("ELE-001").unwrap().name, "Mouse");
    }

    #[test]
    fn test_update_without_changes() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();

        system.update_item("ELE-001", "Mouse", "Electronics", 50_000, 10).unwrap();
        assert_eq!(system.recent_activity().latest().unwrap().text, "Updated Item: ELE-001");
    }

    #[test]
    fn test_daily_reset_on_tick() {
        let dir = TempDir::new().unwrap();
        let (mut system, clock) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();
        system.add_stock("Mouse", 4).unwrap();
        system.remove_stock("Mouse", 1).unwrap();

        assert!(!system.check_daily_reset());
        clock.advance_days(1);
        assert!(system.check_daily_reset());
        assert_eq!(system.daily_in(), 0);
        assert_eq!(system.daily_out(), 0);
        assert_eq!(system.current_date(), clock.today());
        assert!(!system.check_daily_reset());
    }

    #[test]
    fn test_reload_same_day_keeps_counters() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();
        system.add_stock("Mouse", 3).unwrap();

        let (reloaded, _) = open(&dir);
        assert_eq!(reloaded.daily_in(), 3);
        assert_eq!(reloaded.items(), system.items());
        assert_eq!(reloaded.recent_activity(), system.recent_activity());
    }

    #[test]
    fn test_reload_next_day_zeroes_counters() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();
        system.add_stock("Mouse", 3).unwrap();
        system.remove_stock("Mouse", 2).unwrap();

        let clock = ManualClock::new(start());
        clock.advance_days(1);
        let reloaded = InventorySystem::open_with_clock(system.data_file(), clock.clone());
        assert_eq!(reloaded.daily_in(), 0);
        assert_eq!(reloaded.daily_out(), 0);
        assert_eq!(reloaded.current_date(), clock.today());
        assert_eq!(reloaded.items()[0].stock, 11);
    }

    #[test]
    fn test_reload_continues_sku_sequence() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        for name in ["Mouse", "Keyboard", "Monitor"] {
            system.add_item(name, "Electronics", 1, 1).unwrap();
        }

        let (mut reloaded, _) = open(&dir);
        let sku = reloaded.add_item("Webcam", "Electronics", 1, 1).unwrap().sku.clone();
        assert_eq!(sku, "ELE-004");
    }

    #[test]
    fn test_malformed_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DATA_FILE_NAME), "{ not json").unwrap();

        let (system, _) = open(&dir);
        assert!(system.items().is_empty());
        assert!(system.recent_activity().is_empty());
        assert_eq!(system.daily_in(), 0);
    }

    #[test]
    fn test_save_failure_keeps_mutation() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let clock = ManualClock::new(start());
        let mut system = InventorySystem::open_with_clock(blocker.join(DATA_FILE_NAME), clock);

        let err = system.add_item("Mouse", "Electronics", 50_000, 10).unwrap_err();
        assert!(matches!(err, InventoryError::Persist(_)));
        assert_eq!(system.items().len(), 1);
        assert_eq!(system.recent_activity().len(), 1);
    }

    #[test]
    fn test_filter_and_dashboard() {
        let dir = TempDir::new().unwrap();
        let (mut system, _) = open(&dir);
        system.add_item("Mouse", "Electronics", 50_000, 25).unwrap();
        system.add_item("Mousepad", "Accessories", 20_000, 4).unwrap();
        system.add_item("Cable", "Accessories", 10_000, 0).unwrap();
        system.add_stock("Cable", 2).unwrap();

        assert_eq!(system.filter_items("mouse").len(), 2);
        assert_eq!(system.filter_items("").len(), 3);

        let dash = system.dashboard(10);
        assert_eq!(dash.item_count, 3);
        assert_eq!(dash.total_stock, 31);
        assert_eq!(dash.low_stock_items, 2);
        assert_eq!(dash.daily_in, 2);
        assert_eq!(dash.daily_out, 0);
    }
}
