//! Document store and the strategy-dispatching engine facade.
//!
//! [`StoreData`] keeps documents in insertion order with unique IDs;
//! [`StrategyEngine`] wraps it behind a readers-writer lock and dispatches
//! queries to the scoring strategies. Cloning a `StrategyEngine` produces a
//! new handle to the same shared store.

use crate::config;
use crate::document::Document;
use crate::engine::SearchEngine;
use crate::error::SearchError;
use crate::search::{rank_and_truncate, SearchResponse, SearchResult, StrategyComparison};
use crate::strategy::{
    fuzzy_search, keyword_search, rewrite_query, semantic_search, Jitter, Strategy,
};
use parking_lot::RwLock;
use serde_json::json;
use std::collections::HashMap;
use std::sync::Arc;

/// A stored document together with its cached searchable text.
#[derive(Debug, Clone)]
pub struct Entry {
    /// The document (shared reference).
    pub doc: Arc<Document>,
    /// Lowercased content plus indexed metadata fields, built at index time.
    pub text: String,
}

/// Internal store state, protected by a `RwLock`.
///
/// `entries` is the scan order every strategy iterates; `by_id` maps each
/// document ID to its slot. IDs are unique at all times.
#[derive(Debug, Default)]
pub struct StoreData {
    /// Documents in insertion order.
    pub entries: Vec<Entry>,
    /// ID → slot in `entries`.
    pub by_id: HashMap<String, usize>,
}

impl StoreData {
    /// Inserts or overwrites by ID. An overwrite keeps the document's
    /// original slot, so tie-breaking stays stable across re-index.
    fn upsert(&mut self, doc: Document) {
        let text = doc.searchable_text();
        let entry = Entry {
            doc: Arc::new(doc),
            text,
        };
        match self.by_id.get(&entry.doc.id) {
            Some(&slot) => self.entries[slot] = entry,
            None => {
                self.by_id.insert(entry.doc.id.clone(), self.entries.len());
                self.entries.push(entry);
            }
        }
    }

    /// Removes a document by ID. Returns `true` if it existed.
    fn remove(&mut self, id: &str) -> bool {
        let Some(slot) = self.by_id.remove(id) else {
            return false;
        };
        self.entries.remove(slot);
        for other in self.by_id.values_mut() {
            if *other > slot {
                *other -= 1;
            }
        }
        true
    }
}

/// The search engine facade: a document store plus strategy dispatch.
///
/// All operations acquire either a read or a write lock on the internal
/// [`StoreData`]: searches run concurrently with each other, mutations are
/// serialized against everything.
#[derive(Debug, Clone)]
pub struct StrategyEngine {
    data: Arc<RwLock<StoreData>>,
    default_strategy: Strategy,
    jitter: Jitter,
}

impl Default for StrategyEngine {
    fn default() -> Self {
        Self::new(Strategy::Keyword, Jitter::default())
    }
}

impl StrategyEngine {
    /// Creates an empty engine with the given default strategy and jitter
    /// source.
    pub fn new(default_strategy: Strategy, jitter: Jitter) -> Self {
        Self {
            data: Arc::new(RwLock::new(StoreData::default())),
            default_strategy,
            jitter,
        }
    }

    /// The strategy used by [`SearchEngine::search`].
    pub fn default_strategy(&self) -> Strategy {
        self.default_strategy
    }

    /// Returns the number of stored documents.
    pub fn document_count(&self) -> usize {
        self.data.read().entries.len()
    }

    /// Searches with an explicit strategy.
    ///
    /// Scores every stored document, drops scores <= 0, sorts descending
    /// with ties in insertion order, and truncates to `top_k`. The response
    /// metadata carries the strategy tag and, for semantic queries, the
    /// rewritten query when it differs from the lowercased original.
    pub fn search_with(
        &self,
        strategy: Strategy,
        query: &str,
        top_k: usize,
    ) -> Result<SearchResponse, SearchError> {
        validate_query(query, top_k)?;

        let data = self.data.read();
        let texts: Vec<&str> = data.entries.iter().map(|e| e.text.as_str()).collect();
        let scored = match strategy {
            Strategy::Keyword => keyword_search(&texts, query),
            Strategy::Fuzzy => fuzzy_search(&texts, query),
            Strategy::Semantic => semantic_search(&texts, query, &self.jitter),
        };
        let (ranked, total_hits) = rank_and_truncate(scored, top_k);

        let results = ranked
            .into_iter()
            .map(|(slot, score)| {
                let entry = &data.entries[slot as usize];
                SearchResult {
                    doc_id: entry.doc.id.clone(),
                    score,
                    content: entry.doc.content.clone(),
                    metadata: entry.doc.metadata.clone(),
                }
            })
            .collect();

        let mut metadata = HashMap::new();
        metadata.insert("strategy".to_string(), json!(strategy.as_str()));
        if strategy == Strategy::Semantic {
            let rewritten = rewrite_query(query);
            if rewritten != query.to_lowercase() {
                metadata.insert("rewritten_query".to_string(), json!(rewritten));
            }
        }

        Ok(SearchResponse {
            results,
            query: query.to_string(),
            total_hits,
            metadata,
        })
    }

    /// Runs every strategy for one query, for side-by-side comparison.
    pub fn search_all(&self, query: &str, top_k: usize) -> Result<StrategyComparison, SearchError> {
        Ok(StrategyComparison {
            keyword: self.search_with(Strategy::Keyword, query, top_k)?,
            fuzzy: self.search_with(Strategy::Fuzzy, query, top_k)?,
            semantic: self.search_with(Strategy::Semantic, query, top_k)?,
        })
    }
}

fn validate_query(query: &str, top_k: usize) -> Result<(), SearchError> {
    if top_k == 0 {
        return Err(SearchError::InvalidTopK { got: top_k });
    }
    if top_k > config::MAX_TOP_K {
        return Err(SearchError::TopKTooLarge {
            got: top_k,
            max: config::MAX_TOP_K,
        });
    }
    if query.len() > config::MAX_QUERY_LEN {
        return Err(SearchError::QueryTooLong {
            max: config::MAX_QUERY_LEN,
        });
    }
    Ok(())
}

impl SearchEngine for StrategyEngine {
    fn index(&self, documents: Vec<Document>) {
        let mut data = self.data.write();
        for doc in documents {
            data.upsert(doc);
        }
    }

    fn search(&self, query: &str, top_k: usize) -> Result<SearchResponse, SearchError> {
        self.search_with(self.default_strategy, query, top_k)
    }

    fn delete(&self, doc_ids: &[String]) -> usize {
        let mut data = self.data.write();
        doc_ids.iter().filter(|id| data.remove(id)).count()
    }

    fn clear(&self) {
        let mut data = self.data.write();
        data.entries.clear();
        data.by_id.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::MetadataValue;

    fn engine() -> StrategyEngine {
        StrategyEngine::new(Strategy::Keyword, Jitter::Disabled)
    }

    fn catalog() -> Vec<Document> {
        vec![
            Document::new("001", "Diamond Solitaire Ring"),
            Document::new("002", "Gold Chain Necklace"),
            Document::new("003", "Pearl Drop Earrings"),
            Document::new("004", "Vintage Emerald Ring"),
        ]
    }

    // ── Store CRUD ─────────────────────────────────────────────────────

    #[test]
    fn test_index_and_count() {
        let eng = engine();
        eng.index(catalog());
        assert_eq!(eng.document_count(), 4);
    }

    #[test]
    fn test_reindex_same_id_overwrites() {
        let eng = engine();
        eng.index(catalog());
        eng.index(vec![Document::new("002", "Rose Gold Pendant")]);
        assert_eq!(eng.document_count(), 4);

        let resp = eng.search("pendant", 10).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].doc_id, "002");
        // The old content no longer matches.
        assert_eq!(eng.search("necklace", 10).unwrap().total_hits, 0);
    }

    #[test]
    fn test_reindex_identical_is_idempotent() {
        let eng = engine();
        eng.index(catalog());
        eng.index(vec![Document::new("001", "Diamond Solitaire Ring")]);
        assert_eq!(eng.document_count(), 4);
        let resp = eng.search("diamond", 10).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].doc_id, "001");
    }

    #[test]
    fn test_delete_counts_only_present_ids() {
        let eng = engine();
        eng.index(catalog());
        let ids = vec!["001".to_string(), "nope".to_string(), "003".to_string()];
        assert_eq!(eng.delete(&ids), 2);
        assert_eq!(eng.delete(&ids), 0);
        assert_eq!(eng.document_count(), 2);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let eng = engine();
        eng.index(catalog());
        assert_eq!(eng.delete(&["missing".to_string()]), 0);
        assert_eq!(eng.document_count(), 4);
    }

    #[test]
    fn test_clear_then_search_is_empty() {
        let eng = engine();
        eng.index(catalog());
        eng.clear();
        eng.clear(); // idempotent
        let resp = eng.search("ring", 10).unwrap();
        assert_eq!(resp.total_hits, 0);
        assert!(resp.results.is_empty());
    }

    #[test]
    fn test_delete_preserves_scan_order() {
        let eng = engine();
        eng.index(catalog());
        eng.delete(&["001".to_string()]);
        // "ring" still matches "Pearl Drop Earrings" (substring) and
        // "Vintage Emerald Ring"; both tie, so scan order decides.
        let resp = eng.search("ring", 10).unwrap();
        let ids: Vec<&str> = resp.results.iter().map(|r| r.doc_id.as_str()).collect();
        assert_eq!(ids, vec!["003", "004"]);
    }

    // ── Search semantics ───────────────────────────────────────────────

    #[test]
    fn test_exact_content_query_matches() {
        let eng = engine();
        eng.index(catalog());
        for strategy in [Strategy::Keyword, Strategy::Fuzzy] {
            let resp = eng
                .search_with(strategy, "Diamond Solitaire Ring", 10)
                .unwrap();
            assert!(
                resp.results.iter().any(|r| r.doc_id == "001" && r.score > 0.0),
                "{strategy} strategy missed exact-content query"
            );
        }
    }

    #[test]
    fn test_keyword_worked_example() {
        let eng = engine();
        eng.index(vec![Document::new("1", "Diamond Solitaire Ring")]);
        let resp = eng.search("diamond ring", 5).unwrap();
        assert_eq!(resp.results.len(), 1);
        assert_eq!(resp.results[0].doc_id, "1");
        assert_eq!(resp.results[0].score, 1.0);
    }

    #[test]
    fn test_results_sorted_descending_with_stable_ties() {
        let eng = engine();
        eng.index(vec![
            Document::new("a", "gold ring"),
            Document::new("b", "gold band"),
            Document::new("c", "gold ring polished"),
        ]);
        let resp = eng.search("gold ring", 10).unwrap();
        let scores: Vec<f32> = resp.results.iter().map(|r| r.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
        // "a" and "c" tie at 1.0; insertion order breaks the tie.
        assert_eq!(resp.results[0].doc_id, "a");
        assert_eq!(resp.results[1].doc_id, "c");
    }

    #[test]
    fn test_top_k_truncates_not_reorders() {
        let eng = engine();
        eng.index(catalog());
        let full = eng.search("ring", 10).unwrap();
        let truncated = eng.search("ring", 1).unwrap();
        assert_eq!(truncated.results.len(), 1);
        assert_eq!(truncated.total_hits, full.total_hits);
        assert_eq!(truncated.results[0].doc_id, full.results[0].doc_id);
    }

    #[test]
    fn test_empty_query_is_not_an_error() {
        let eng = engine();
        eng.index(catalog());
        let resp = eng.search("", 10).unwrap();
        assert_eq!(resp.total_hits, 0);
        assert!(resp.results.is_empty());
    }

    #[test]
    fn test_top_k_zero_rejected() {
        let eng = engine();
        assert_eq!(
            eng.search("ring", 0).unwrap_err(),
            SearchError::InvalidTopK { got: 0 }
        );
    }

    #[test]
    fn test_top_k_over_maximum_rejected() {
        let eng = engine();
        assert!(matches!(
            eng.search("ring", config::MAX_TOP_K + 1).unwrap_err(),
            SearchError::TopKTooLarge { .. }
        ));
    }

    #[test]
    fn test_oversized_query_rejected() {
        let eng = engine();
        let query = "x".repeat(config::MAX_QUERY_LEN + 1);
        assert!(matches!(
            eng.search(&query, 10).unwrap_err(),
            SearchError::QueryTooLong { .. }
        ));
    }

    #[test]
    fn test_metadata_fields_are_searchable() {
        let eng = engine();
        let mut metadata = HashMap::new();
        metadata.insert(
            "category".to_string(),
            MetadataValue::String("Bracelets".into()),
        );
        eng.index(vec![Document::with_metadata(
            "004",
            "Silver Tennis",
            metadata,
        )]);
        let resp = eng.search("bracelets", 10).unwrap();
        assert_eq!(resp.results.len(), 1);
    }

    // ── Strategy dispatch and metadata ─────────────────────────────────

    #[test]
    fn test_semantic_reports_rewritten_query() {
        let eng = engine();
        eng.index(catalog());
        let resp = eng.search_with(Strategy::Semantic, "gold ring", 10).unwrap();
        assert_eq!(
            resp.rewritten_query(),
            Some("band gold jewelry luxury metal ring yellow")
        );
        assert_eq!(resp.metadata["strategy"], "semantic");
    }

    #[test]
    fn test_semantic_omits_unchanged_rewrite() {
        let eng = engine();
        eng.index(catalog());
        // No trigger word and already sorted lowercase: rewrite is identity.
        let resp = eng.search_with(Strategy::Semantic, "pearl", 10).unwrap();
        assert_eq!(resp.rewritten_query(), None);
    }

    #[test]
    fn test_semantic_deterministic_when_jitter_disabled() {
        let eng = engine();
        eng.index(catalog());
        let a = eng.search_with(Strategy::Semantic, "diamond ring", 10).unwrap();
        let b = eng.search_with(Strategy::Semantic, "diamond ring", 10).unwrap();
        let scores =
            |r: &SearchResponse| r.results.iter().map(|x| x.score).collect::<Vec<_>>();
        assert_eq!(scores(&a), scores(&b));
    }

    #[test]
    fn test_search_all_returns_every_strategy() {
        let eng = engine();
        eng.index(catalog());
        let cmp = eng.search_all("diamond ring", 10).unwrap();
        assert_eq!(cmp.keyword.metadata["strategy"], "keyword");
        assert_eq!(cmp.fuzzy.metadata["strategy"], "fuzzy");
        assert_eq!(cmp.semantic.metadata["strategy"], "semantic");
        assert!(cmp.keyword.total_hits > 0);
        assert!(cmp.fuzzy.total_hits > 0);
    }

    #[test]
    fn test_clone_shares_the_store() {
        let eng = engine();
        let handle = eng.clone();
        handle.index(catalog());
        assert_eq!(eng.document_count(), 4);
    }
}
