// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use stockroom::inventory::InventorySystem;
use stockroom::store::DATA_FILE_NAME;

#[derive(Debug, Arbitrary)]
enum Op {
    Add { name: String, category: String, price: i64, stock: u16 },
    In { query: String, amount: u32 },
    Out { query: String, amount: u32 },
    Delete { query: String },
}

// Stock must never go negative and SKUs must stay unique under any sequence.
fuzz_target!(|ops: Vec<Op>| {
    let Ok(dir) = tempfile::tempdir() else { return };
    let mut system = InventorySystem::open(dir.path().join(DATA_FILE_NAME));

    for op in ops.into_iter().take(64) {
        let _ = match op {
            Op::Add { name, category, price, stock } => {
                system.add_item(&name, &category, price, i64::from(stock)).map(|_| ())
            }
            Op::In { query, amount } => system.add_stock(&query, amount % 1_000).map(|_| ()),
            Op::Out { query, amount } => system.remove_stock(&query, amount).map(|_| ()),
            Op::Delete { query } => system.delete_item(&query).map(|_| ()),
        };
    }

    let mut skus: Vec<_> = system.items().iter().map(|i| i.sku.as_str()).collect();
    let total = skus.len();
    skus.sort_unstable();
    skus.dedup();
    assert_eq!(skus.len(), total);
    assert!(system.items().iter().all(|i| i.stock >= 0));
});
