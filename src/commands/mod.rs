// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod config;
pub mod dashboard;
pub mod item;
pub mod reset;
pub mod stock;
pub mod watch;

use crate::types::{Item, StockStatus};
use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;

/// How command results are rendered
#[derive(Debug, Clone)]
pub struct Output {
    /// Emit JSON instead of text
    pub json: bool,
    /// Colour status badges
    pub color: bool,
    /// Currency symbol for prices
    pub currency: String,
}

impl Output {
    /// Pretty-print `value` as JSON on stdout
    pub fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        let rendered = serde_json::to_string_pretty(value).context("Failed to serialize output")?;
        println!("{rendered}");
        Ok(())
    }

    /// Price with currency symbol and thousands separators
    #[must_use]
    pub fn price(&self, price: i64) -> String {
        format!("{}{}", self.currency, format_thousands(price))
    }

    /// Status label, coloured when enabled
    #[must_use]
    pub fn badge(&self, status: StockStatus) -> String {
        let label = status.label();
        if !self.color {
            return label.to_string();
        }
        match status {
            StockStatus::InStock => label.green().to_string(),
            StockStatus::LowStock => label.yellow().to_string(),
            StockStatus::OutOfStock => label.red().to_string(),
        }
    }

    /// One-line summary of an item
    #[must_use]
    pub fn item_line(&self, item: &Item) -> String {
        format!(
            "{} ({}) [{}] stock: {}, price: {}",
            item.name,
            item.sku,
            item.category,
            item.stock,
            self.price(item.price)
        )
    }

    /// Inventory table, one row per item
    pub fn print_items(&self, items: &[&Item]) {
        println!(
            "{:<24} {:<10} {:<14} {:>7} {:>14}  STATUS",
            "ITEM NAME", "SKU", "CATEGORY", "STOCK", "PRICE"
        );
        for item in items {
            println!(
                "{:<24} {:<10} {:<14} {:>7} {:>14}  {}",
                item.name,
                item.sku,
                item.category,
                item.stock,
                self.price(item.price),
                self.badge(item.status())
            );
        }
    }
}

/// `1234567` -> `1,234,567`
#[must_use]
pub fn format_thousands(n: i64) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if n < 0 {
        out.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
