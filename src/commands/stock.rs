// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Stock movement commands

use super::Output;
use crate::inventory::InventorySystem;
use anyhow::Result;

/// Receive stock
pub fn stock_in(system: &mut InventorySystem, out: &Output, query: &str, qty: u32) -> Result<()> {
    let item = system.add_stock(query, qty)?;

    if out.json {
        return out.print_json(item);
    }
    println!("Stock in: +{} {} ({})", qty, item.name, item.sku);
    println!("  on hand: {}", item.stock);
    Ok(())
}

/// Remove stock
pub fn stock_out(system: &mut InventorySystem, out: &Output, query: &str, qty: u32) -> Result<()> {
    let item = system.remove_stock(query, qty)?;

    if out.json {
        return out.print_json(item);
    }
    println!("Stock out: -{} {} ({})", qty, item.name, item.sku);
    println!("  on hand: {}", item.stock);
    Ok(())
}
