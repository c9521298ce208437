//! Derived relationship queries.
//!
//! # Responsibility
//! - Answer author and magazine relationship questions by scanning the
//!   catalog registries.
//!
//! # Invariants
//! - Every query re-scans the catalog; nothing is cached.
//! - References are matched by identity, not by field values.
//! - Unset references are skipped, never reported.

use std::collections::HashSet;
use std::hash::Hash;

pub mod author_queries;
pub mod magazine_queries;

/// Keeps the first occurrence of each key, preserving order.
pub(crate) fn dedup_first_seen<T, K, F>(items: impl IntoIterator<Item = T>, key: F) -> Vec<T>
where
    K: Eq + Hash,
    F: Fn(&T) -> K,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(key(item)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::dedup_first_seen;

    #[test]
    fn dedup_keeps_first_occurrence_order() {
        let values = vec!["news", "art", "news", "food", "art"];
        let unique = dedup_first_seen(values, |value| *value);
        assert_eq!(unique, vec!["news", "art", "food"]);
    }
}
