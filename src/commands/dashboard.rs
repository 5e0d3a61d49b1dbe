// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Dashboard and activity views

use super::{format_thousands, Output};
use crate::clock::Clock;
use crate::inventory::InventorySystem;
use anyhow::Result;

/// Print daily totals and recent activity
pub fn run<C: Clock>(system: &InventorySystem<C>, out: &Output, low_stock_threshold: i64) -> Result<()> {
    let dash = system.dashboard(low_stock_threshold);

    if out.json {
        return out.print_json(&serde_json::json!({
            "date": system.current_date(),
            "dashboard": dash,
            "recent_activity": system.recent_activity().to_vec(),
        }));
    }

    println!("Dashboard ({})", system.current_date().format("%A, %d %b %Y"));
    println!("  Total items:       {}", format_thousands(dash.total_stock));
    println!("  Low stock alerts:  {}", dash.low_stock_items);
    println!("  Today's stock-in:  +{}", dash.daily_in);
    println!("  Today's stock-out: -{}", dash.daily_out);
    println!();
    print_activity(system);
    Ok(())
}

/// Print only the recent activity log
pub fn activity<C: Clock>(system: &InventorySystem<C>, out: &Output) -> Result<()> {
    if out.json {
        return out.print_json(&system.recent_activity().to_vec());
    }
    print_activity(system);
    Ok(())
}

fn print_activity<C: Clock>(system: &InventorySystem<C>) {
    println!("Recent activity:");
    if system.recent_activity().is_empty() {
        println!("  No recent activity.");
        return;
    }
    for entry in system.recent_activity().iter() {
        println!("  [{:<4}] {}", entry.kind, entry.text);
    }
}
