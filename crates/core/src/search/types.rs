//! Result and response types for search queries.

use crate::document::MetadataValue;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single search result with relevance score.
///
/// Ephemeral — constructed per query, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// ID of the matched document.
    pub doc_id: String,
    /// Relevance score in [0, 1] under the strategy that produced it.
    pub score: f32,
    /// The matched document's content.
    pub content: String,
    /// The matched document's metadata.
    pub metadata: HashMap<String, MetadataValue>,
}

/// Response from a search query.
///
/// `results` is sorted descending by score, with ties broken by store
/// insertion order; `total_hits` counts matches before `top_k` truncation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Ranked results, at most `top_k` of them.
    pub results: Vec<SearchResult>,
    /// The query as supplied by the caller.
    pub query: String,
    /// Number of matching documents before truncation.
    pub total_hits: usize,
    /// Strategy tag and, for semantic queries, the rewritten query when it
    /// differs from the lowercased original.
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl SearchResponse {
    /// The rewritten query surfaced by the semantic strategy, if any.
    pub fn rewritten_query(&self) -> Option<&str> {
        self.metadata.get("rewritten_query").and_then(|v| v.as_str())
    }
}

/// Per-strategy responses for one query, for side-by-side comparison.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Keyword strategy response.
    pub keyword: SearchResponse,
    /// Fuzzy strategy response.
    pub fuzzy: SearchResponse,
    /// Semantic strategy response.
    pub semantic: SearchResponse,
}
