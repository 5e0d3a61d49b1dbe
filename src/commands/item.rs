// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Item commands - add, search, list, update and delete

use super::Output;
use crate::inventory::{InventoryError, InventorySystem};
use anyhow::Result;

/// Add a new item
pub fn add(
    system: &mut InventorySystem,
    out: &Output,
    name: &str,
    category: &str,
    price: i64,
    stock: i64,
) -> Result<()> {
    let item = system.add_item(name, category, price, stock)?;

    if out.json {
        return out.print_json(item);
    }
    println!("Added item: {}", item.name);
    println!("  sku: {}", item.sku);
    Ok(())
}

/// Show the first item matching `query`
pub fn search(system: &InventorySystem, out: &Output, query: &str) -> Result<()> {
    let item = system
        .search_item(query)
        .ok_or_else(|| InventoryError::NotFound {
            query: query.trim().to_string(),
        })?;

    if out.json {
        return out.print_json(item);
    }
    println!("{}", out.item_line(item));
    println!("  status: {}", out.badge(item.status()));
    Ok(())
}

/// List items, optionally filtered by name or SKU
pub fn list(system: &InventorySystem, out: &Output, query: Option<&str>) -> Result<()> {
    let items = system.filter_items(query.unwrap_or(""));

    if out.json {
        return out.print_json(&items);
    }
    if system.items().is_empty() {
        println!("No items yet. Use 'stockroom add' to create one.");
        return Ok(());
    }
    if items.is_empty() {
        println!("No items match '{}'", query.unwrap_or("").trim());
        return Ok(());
    }

    out.print_items(&items);
    Ok(())
}

/// Edit an item found by exact SKU; omitted fields keep their current value
pub fn update(
    system: &mut InventorySystem,
    out: &Output,
    sku: &str,
    name: Option<String>,
    category: Option<String>,
    price: Option<i64>,
    stock: Option<i64>,
) -> Result<()> {
    let current = system
        .get_item_by_sku(sku)
        .cloned()
        .ok_or_else(|| InventoryError::NotFound {
            query: sku.to_string(),
        })?;

    let item = system.update_item(
        sku,
        name.as_deref().unwrap_or(&current.name),
        category.as_deref().unwrap_or(&current.category),
        price.unwrap_or(current.price),
        stock.unwrap_or(current.stock),
    )?;

    if out.json {
        return out.print_json(item);
    }
    println!("Updated item: {}", out.item_line(item));
    Ok(())
}

/// Delete the first item matching `query`
pub fn delete(system: &mut InventorySystem, out: &Output, query: &str) -> Result<()> {
    let item = system.delete_item(query)?;

    if out.json {
        return out.print_json(&item);
    }
    println!("Deleted item: {} ({})", item.name, item.sku);
    Ok(())
}
