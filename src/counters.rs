// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Daily stock-in / stock-out totals

use chrono::NaiveDate;

/// Units moved in and out on one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailyCounters {
    date: NaiveDate,
    stock_in: u64,
    stock_out: u64,
}

impl DailyCounters {
    /// Zeroed counters for `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            stock_in: 0,
            stock_out: 0,
        }
    }

    /// Counters as they were persisted, still tagged with their own day
    #[must_use]
    pub fn restore(date: NaiveDate, stock_in: u64, stock_out: u64) -> Self {
        Self {
            date,
            stock_in,
            stock_out,
        }
    }

    /// Day these totals belong to
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Units received
    #[must_use]
    pub fn stock_in(&self) -> u64 {
        self.stock_in
    }

    /// Units removed
    #[must_use]
    pub fn stock_out(&self) -> u64 {
        self.stock_out
    }

    /// Add to the received total
    pub fn record_in(&mut self, amount: u32) {
        self.stock_in = self.stock_in.saturating_add(u64::from(amount));
    }

    /// Add to the removed total
    pub fn record_out(&mut self, amount: u32) {
        self.stock_out = self.stock_out.saturating_add(u64::from(amount));
    }

    /// Move to `today`, zeroing both totals if the day changed.
    ///
    /// Returns true when a reset happened. Used both when a snapshot is loaded
    /// and on every periodic tick.
    pub fn rollover(&mut self, today: NaiveDate) -> bool {
        if today == self.date {
            return false;
        }
        *self = Self::new(today);
        true
    }
}
