//! Abstract capability contracts for search engine implementations.
//!
//! [`SearchEngine`] is the frozen contract every backend satisfies;
//! [`VectorSearchEngine`] extends it for embedding-backed implementations.
//! Implement `SearchEngine` to plug a new retrieval backend into the lab.

use crate::document::Document;
use crate::error::SearchError;
use crate::search::SearchResponse;

/// The capability set of a search engine backend.
///
/// Every operation is synchronous and runs to completion; implementations
/// exposed to concurrent callers must serialize mutations (`index`, `delete`,
/// `clear`) against reads internally.
pub trait SearchEngine {
    /// Indexes documents, inserting or overwriting by ID.
    fn index(&self, documents: Vec<Document>);

    /// Searches for documents matching the query.
    ///
    /// Returns at most `top_k` results sorted descending by score. An empty
    /// query yields an empty result set; `top_k == 0` is rejected with
    /// [`SearchError::InvalidTopK`].
    fn search(&self, query: &str, top_k: usize) -> Result<SearchResponse, SearchError>;

    /// Deletes documents by ID, returning the number actually removed.
    ///
    /// Unknown IDs are ignored, never errors.
    fn delete(&self, doc_ids: &[String]) -> usize;

    /// Removes every document. Idempotent.
    fn clear(&self);
}

/// Extended contract for vector/embedding-backed search.
///
/// Declared for future backends; no implementation ships with this crate.
/// `embed` must be a deterministic function of its input for a given model
/// version so that stored and query embeddings stay comparable.
pub trait VectorSearchEngine: SearchEngine {
    /// Generates the embedding vector for a text.
    fn embed(&self, text: &str) -> Vec<f32>;

    /// Ranks stored documents by similarity to a pre-computed vector,
    /// without re-embedding the query.
    fn search_by_vector(
        &self,
        vector: &[f32],
        top_k: usize,
    ) -> Result<SearchResponse, SearchError>;
}
