// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
#![no_main]

use libfuzzer_sys::fuzz_target;
use stockroom::inventory::InventorySystem;
use stockroom::store::DATA_FILE_NAME;

// Any bytes on disk must load into a usable inventory, never a panic.
fuzz_target!(|data: &[u8]| {
    let Ok(dir) = tempfile::tempdir() else { return };
    let path = dir.path().join(DATA_FILE_NAME);
    if std::fs::write(&path, data).is_err() {
        return;
    }

    let system = InventorySystem::open(&path);
    assert!(system.recent_activity().len() <= 10);
    let _ = system.search_item("a");
});
