// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Source of "today" for daily counters

use chrono::{Local, NaiveDate};
use std::cell::Cell;
use std::rc::Rc;

/// Something that knows the current calendar day
pub trait Clock {
    /// Today's date in the store's local time zone
    fn today(&self) -> NaiveDate;
}

/// Wall clock in local time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Hand-driven clock. Clones share the same date.
#[derive(Debug, Clone)]
pub struct ManualClock {
    date: Rc<Cell<NaiveDate>>,
}

impl ManualClock {
    /// Start at `date`
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Rc::new(Cell::new(date)),
        }
    }

    /// Jump to `date`
    pub fn set(&self, date: NaiveDate) {
        self.date.set(date);
    }

    /// Move forward by whole days
    pub fn advance_days(&self, days: u64) {
        let next = self
            .date
            .get()
            .checked_add_days(chrono::Days::new(days))
            .unwrap_or(NaiveDate::MAX);
        self.date.set(next);
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.date.get()
    }
}
