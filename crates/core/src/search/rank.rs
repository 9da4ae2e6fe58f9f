//! Ranking: stable descending sort and `top_k` truncation.

use std::cmp::Ordering;

/// Sorts scored `(slot, score)` pairs descending by score and truncates to
/// `top_k`. Returns the ranked pairs and the pre-truncation match count.
///
/// The sort is stable, so documents with equal scores keep their scan order
/// — the store's insertion order. Truncation never reorders.
pub fn rank_and_truncate(mut scored: Vec<(u32, f32)>, top_k: usize) -> (Vec<(u32, f32)>, usize) {
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    let total_hits = scored.len();
    scored.truncate(top_k);
    (scored, total_hits)
}
