//! Deterministic query expansion via a fixed synonym table.
//!
//! Used only to annotate semantic search; base scoring always runs on the
//! original query tokens. A production system would expand queries with an
//! LLM or a learned synonym model behind the same function signature.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

static EXPANSIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    [
        ("ring", "ring jewelry band"),
        ("necklace", "necklace chain pendant jewelry"),
        ("earring", "earrings studs jewelry"),
        ("bracelet", "bracelet bangle jewelry"),
        ("gold", "gold yellow metal luxury"),
        ("silver", "silver sterling white metal"),
        ("diamond", "diamond brilliant sparkle luxury engagement"),
        ("gift", "gift present elegant romantic luxury"),
        ("wedding", "wedding engagement matrimony bridal"),
        ("vintage", "vintage antique classic retro art deco"),
    ]
    .into_iter()
    .collect()
});

/// Expands a query into an enriched term set.
///
/// Lowercases, splits on whitespace, merges each trigger word's expansion
/// terms with the original words, then emits the deduplicated union sorted
/// and space-joined for determinism.
pub fn rewrite_query(query: &str) -> String {
    let query = query.to_lowercase();
    let words: Vec<&str> = query.split_whitespace().collect();

    let mut expanded: BTreeSet<&str> = words.iter().copied().collect();
    for word in &words {
        if let Some(terms) = EXPANSIONS.get(word) {
            expanded.extend(terms.split_whitespace());
        }
    }

    expanded.into_iter().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expands_triggers() {
        // "gold" and "ring" both trigger; union is sorted and deduplicated.
        assert_eq!(
            rewrite_query("gold ring"),
            "band gold jewelry luxury metal ring yellow"
        );
    }

    #[test]
    fn test_no_trigger_sorts_and_dedupes() {
        assert_eq!(rewrite_query("pearl drop pearl"), "drop pearl");
    }

    #[test]
    fn test_deterministic() {
        assert_eq!(rewrite_query("Diamond Gift"), rewrite_query("diamond gift"));
    }

    #[test]
    fn test_empty_query() {
        assert_eq!(rewrite_query(""), "");
    }

    #[test]
    fn test_trigger_must_be_whole_word() {
        // "earrings" is not the trigger "earring"; no expansion fires.
        assert_eq!(rewrite_query("earrings"), "earrings");
    }
}
