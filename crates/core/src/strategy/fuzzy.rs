//! Fuzzy trigram matching with whole-word boosts.
//!
//! Every contiguous 3-character window of the query that occurs anywhere in
//! the document text contributes a small score, which rewards partial and
//! typo-tolerant overlap; whole query words found as substrings add a larger
//! boost. The final score is clamped to [0, 1].

use crate::config;
use crate::strategy::round3;

/// Scores a single document text against the query.
///
/// Windows are taken over characters, not bytes, so multibyte queries never
/// split a codepoint. Returns 0.0 when nothing overlaps.
pub fn score(query: &str, text: &str) -> f32 {
    let query = query.to_lowercase();
    let mut total = 0.0;

    let chars: Vec<char> = query.chars().collect();
    for window in chars.windows(3) {
        let trigram: String = window.iter().collect();
        if text.contains(&trigram) {
            total += config::FUZZY_TRIGRAM_WEIGHT;
        }
    }

    for word in query.split_whitespace() {
        if text.contains(word) {
            total += config::FUZZY_WORD_WEIGHT;
        }
    }

    round3(total.min(1.0))
}

/// Scores every text against the query.
///
/// Returns `(slot, score)` pairs for texts with score > 0, in scan order.
pub fn fuzzy_search(texts: &[&str], query: &str) -> Vec<(u32, f32)> {
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
    fn test_trigram_and_word_boost() {
        // "ring" windows: "rin", "ing" — both present (+0.4); word "ring"
        // present (+0.3).
        assert_eq!(score("ring", "diamond solitaire ring"), 0.7);
    }

    #[test]
    fn test_clamped_to_one() {
        let s = score("diamond solitaire ring", "diamond solitaire ring");
        assert_eq!(s, 1.0);
    }

    #[test]
    fn test_no_overlap_is_zero() {
        assert_eq!(score("xyz", "diamond solitaire ring"), 0.0);
    }

    #[test]
    fn test_short_query_word_only() {
        // Queries shorter than 3 chars have no trigram windows; only the
        // word boost can fire.
        assert_eq!(score("go", "rose gold pendant"), 0.3);
        assert_eq!(score("qq", "rose gold pendant"), 0.0);
    }

    #[test]
    fn test_typo_still_scores() {
        // "rins" windows: "rin" matches, "ins" does not; no whole word.
        let s = score("rins", "diamond solitaire ring");
        assert_eq!(s, 0.2);
    }

    #[test]
    fn test_search_excludes_zero_scores() {
        let texts = vec!["diamond solitaire ring", "qqq"];
        let results = fuzzy_search(&texts, "ring");
        assert_eq!(results, vec![(0, 0.7)]);
    }
}
