//! Keyword token-set matching.
//!
//! The query is lowercased and split on whitespace into a set of distinct
//! tokens; the score is the fraction of those tokens that occur as substrings
//! of the document's searchable text.

use crate::strategy::round3;
use std::collections::HashSet;

/// Scores a single document text against the query.
///
/// Returns 0.0 for an empty query or when no token matches; callers exclude
/// zero-score documents from results.
pub fn score(query: &str, text: &str) -> f32 {
    let query = query.to_lowercase();
    let mut seen = HashSet::new();
    let tokens: Vec<&str> = query
        .split_whitespace()
        .filter(|token| seen.insert(*token))
        .collect();
    if tokens.is_empty() {
        return 0.0;
    }

    let matches = tokens.iter().filter(|token| text.contains(*token)).count();
    round3(matches as f32 / tokens.len() as f32)
}

/// Scores every text against the query.
///
/// Returns `(slot, score)` pairs for texts with score > 0, in scan order.
pub fn keyword_search(texts: &[&str], query: &str) -> Vec<(u32, f32)> {
    texts
        .iter()
        .enumerate()
        .filter_map(|(slot, text)| {
            let s = score(query, text);
            (s > 0.0).then_some((slot as u32, s))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_tokens_match() {
        assert_eq!(score("diamond ring", "diamond solitaire ring"), 1.0);
    }

    #[test]
    fn test_partial_match() {
        assert_eq!(score("diamond necklace", "diamond solitaire ring"), 0.5);
    }

    #[test]
    fn test_no_match_is_zero() {
        assert_eq!(score("sapphire", "diamond solitaire ring"), 0.0);
    }

    #[test]
    fn test_empty_query_is_zero() {
        assert_eq!(score("", "diamond solitaire ring"), 0.0);
        assert_eq!(score("   ", "diamond solitaire ring"), 0.0);
    }

    #[test]
    fn test_duplicate_tokens_count_once() {
        // "ring ring gold" has two distinct tokens; only "ring" matches.
        assert_eq!(score("ring ring gold", "solitaire ring"), 0.5);
    }

    #[test]
    fn test_substring_match_counts() {
        // "earring" contains "ring" as a substring.
        assert_eq!(score("ring", "pearl drop earrings"), 1.0);
    }

    #[test]
    fn test_search_excludes_zero_scores() {
        let texts = vec!["gold chain necklace", "silver tennis bracelet"];
        let results = keyword_search(&texts, "gold");
        assert_eq!(results, vec![(0, 1.0)]);
    }

    #[test]
    fn test_search_preserves_scan_order() {
        let texts = vec!["gold ring", "gold pendant", "pearl earrings"];
        let results = keyword_search(&texts, "gold");
        assert_eq!(results, vec![(0, 1.0), (1, 1.0)]);
    }
}
