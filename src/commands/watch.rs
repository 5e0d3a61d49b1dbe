// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Watch mode - periodic daily-reset tick with a live dashboard

use super::Output;
use crate::clock::Clock;
use crate::inventory::InventorySystem;
use anyhow::Result;
use std::thread;
use std::time::Duration;
use tracing::{error, info};

/// Show the dashboard, then check for a day change every `interval`.
///
/// Redraws whenever the daily totals reset. Runs until interrupted, or for
/// `ticks` checks when given.
pub fn run<C: Clock>(
    system: &mut InventorySystem<C>,
    out: &Output,
    low_stock_threshold: i64,
    interval: Duration,
    ticks: Option<u64>,
) -> Result<()> {
    super::dashboard::run(&*system, out, low_stock_threshold)?;

    let mut done = 0u64;
    while ticks.map_or(true, |limit| done < limit) {
        thread::sleep(interval);
        done += 1;

        if system.check_daily_reset() {
            info!("daily stats reset triggered");
            if let Err(e) = system.save() {
                error!(error = %e, "failed to save after daily reset");
            }
            super::dashboard::run(&*system, out, low_stock_threshold)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::store::DATA_FILE_NAME;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_tick_resets_and_saves_after_midnight() {
        let dir = TempDir::new().unwrap();
        let clock = ManualClock::new(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        let mut system = InventorySystem::open_with_clock(dir.path().join(DATA_FILE_NAME), clock.clone());
        system.add_item("Mouse", "Electronics", 50_000, 10).unwrap();
        system.add_stock("Mouse", 2).unwrap();

        clock.advance_days(1);
        let out = Output {
            json: true,
            color: false,
            currency: "Rp".into(),
        };
        run(&mut system, &out, 10, Duration::from_millis(1), Some(1)).unwrap();

        assert_eq!(system.daily_in(), 0);
        let saved = std::fs::read_to_string(system.data_file()).unwrap();
        assert!(saved.contains("2026-01-01"));
    }
}
