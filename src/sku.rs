// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! SKU generation - `<PREFIX>-<NNN>` per category

use std::collections::{BTreeMap, HashMap};

/// Issues SKUs and tracks the next sequence number for every category
#[derive(Debug, Clone, Default)]
pub struct SkuGenerator {
    next: HashMap<String, u32>,
}

impl SkuGenerator {
    /// Create a generator with no categories seen yet
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uppercased first three characters of the category (or all of it if shorter)
    #[must_use]
    pub fn prefix(category: &str) -> String {
        category.chars().take(3).collect::<String>().to_uppercase()
    }

    /// Format a SKU from its parts
    #[must_use]
    pub fn format(category: &str, seq: u32) -> String {
        format!("{}-{:03}", Self::prefix(category), seq)
    }

    /// Sequence number the next issued SKU in `category` will carry
    #[must_use]
    pub fn peek(&self, category: &str) -> u32 {
        self.next.get(category).copied().unwrap_or(1)
    }

    /// Issue the next SKU for `category`.
    ///
    /// Candidates for which `taken` returns true are skipped; the counter still
    /// advances past them so a number is never handed out twice.
    pub fn issue(&mut self, category: &str, taken: impl Fn(&str) -> bool) -> String {
        let counter = self.next.entry(category.to_string()).or_insert(1);
        loop {
            let sku = Self::format(category, *counter);
            *counter += 1;
            if !taken(&sku) {
                return sku;
            }
        }
    }

    /// Register a SKU that came from storage rather than from [`Self::issue`].
    ///
    /// The category counter is seeded to one past the highest sequence already
    /// in use for it, so reloaded SKUs are never issued again.
    pub fn observe(&mut self, category: &str, sku: &str) {
        let counter = self.next.entry(category.to_string()).or_insert(1);
        if let Some(seq) = parse_sequence(category, sku) {
            *counter = (*counter).max(seq.saturating_add(1));
        }
    }

    /// Raise the counter for `category` to at least `next`. Never lowers it.
    pub fn seed(&mut self, category: &str, next: u32) {
        let counter = self.next.entry(category.to_string()).or_insert(1);
        *counter = (*counter).max(next);
    }

    /// Every category's next sequence number, for persisting
    #[must_use]
    pub fn counters(&self) -> BTreeMap<String, u32> {
        self.next.iter().map(|(k, v)| (k.clone(), *v)).collect()
    }

    /// Forget every category
    pub fn clear(&mut self) {
        self.next.clear();
    }
}

/// Sequence number of a SKU that follows the generated shape for `category`
fn parse_sequence(category: &str, sku: &str) -> Option<u32> {
    let (prefix, digits) = sku.rsplit_once('-')?;
    if prefix != SkuGenerator::prefix(category) || digits.is_empty() {
        return None;
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_truncates_and_uppercases() {
        assert_eq!(SkuGenerator::prefix("Electronics"), "ELE");
        assert_eq!(SkuGenerator::prefix("tv"), "TV");
        assert_eq!(SkuGenerator::prefix("Aud"), "AUD");
        assert_eq!(SkuGenerator::prefix(""), "");
    }

    #[test]
    fn test_issue_sequences_per_category() {
        let mut skus = SkuGenerator::new();
        let free = |_: &str| false;

        assert_eq!(skus.issue("Electronics", free), "ELE-001");
        assert_eq!(skus.issue("Electronics", free), "ELE-002");
        assert_eq!(skus.issue("Audio", free), "AUD-001");
        assert_eq!(skus.peek("Electronics"), 3);
        assert_eq!(skus.peek("Unseen"), 1);
    }

    #[test]
    fn test_issue_skips_taken() {
        let mut skus = SkuGenerator::new();
        let sku = skus.issue("Electrical", |s| s == "ELE-001");
        assert_eq!(sku, "ELE-002");
        assert_eq!(skus.peek("Electrical"), 3);
    }

    #[test]
    fn test_observe_seeds_past_highest() {
        let mut skus = SkuGenerator::new();
        skus.observe("Electronics", "ELE-007");
        skus.observe("Electronics", "ELE-003");
        skus.observe("Audio", "custom-sku");

        assert_eq!(skus.peek("Electronics"), 8);
        assert_eq!(skus.peek("Audio"), 1);
        assert_eq!(skus.issue("Electronics", |_| false), "ELE-008");
    }

    #[test]
    fn test_seed_only_raises() {
        let mut skus = SkuGenerator::new();
        skus.observe("Electronics", "ELE-001");
        skus.seed("Electronics", 5);
        skus.seed("Electronics", 3);

        assert_eq!(skus.peek("Electronics"), 5);
        assert_eq!(skus.counters().get("Electronics"), Some(&5));
    }

    #[test]
    fn test_observe_ignores_foreign_prefix() {
        let mut skus = SkuGenerator::new();
        skus.observe("Audio", "ELE-050");
        assert_eq!(skus.peek("Audio"), 1);
    }
}
