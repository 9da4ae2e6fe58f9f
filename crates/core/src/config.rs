//! Global configuration constants for searchlab.
//!
//! All scoring weights, input validation limits, and server defaults are
//! defined here. These are compile-time constants; runtime configuration is
//! handled via CLI arguments in the server's `main.rs`.

/// Fuzzy score contribution for each 3-character query window found in the
/// document text.
///
/// Rewards partial and typo-tolerant overlap: a query whose trigrams mostly
/// occur in the text scores high even when no full word matches.
pub const FUZZY_TRIGRAM_WEIGHT: f32 = 0.2;

/// Fuzzy score contribution for each whole query word found in the document
/// text (as a substring).
pub const FUZZY_WORD_WEIGHT: f32 = 0.3;

/// Semantic score contribution for each original query word found in the
/// document text.
pub const SEMANTIC_WORD_WEIGHT: f32 = 0.3;

/// Semantic score contribution for each associated term of a matched concept
/// found in the document text.
pub const SEMANTIC_ASSOCIATION_WEIGHT: f32 = 0.15;

/// Half-width of the symmetric jitter applied to nonzero semantic scores.
///
/// Emulates embedding-similarity variance. The jitter source is injectable
/// (see [`crate::strategy::Jitter`]) so tests can disable or seed it.
pub const SEMANTIC_JITTER: f32 = 0.1;

/// Lower clamp bound for jittered semantic scores.
///
/// Any document with a nonzero pre-jitter score lands in
/// [`SEMANTIC_MIN_SCORE`, 1.0] after perturbation.
pub const SEMANTIC_MIN_SCORE: f32 = 0.1;

/// Metadata fields whose string values are folded into a document's
/// searchable text, in this order, after the content itself.
pub const INDEXED_METADATA_FIELDS: &[&str] = &["name", "description", "category"];

/// Default number of results returned by a search when the caller does not
/// specify `top_k`.
pub const DEFAULT_TOP_K: usize = 10;

/// Maximum number of results (`top_k`) per search request.
pub const MAX_TOP_K: usize = 1_000;

/// Maximum length of a query string in bytes.
pub const MAX_QUERY_LEN: usize = 1_024;

/// Maximum length of document content in bytes.
pub const MAX_CONTENT_LEN: usize = 100_000;

/// Maximum number of documents per batch index request.
pub const MAX_BATCH_SIZE: usize = 1_000;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 8000;

/// Per-request timeout in seconds.
pub const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Global rate limit in requests per second.
pub const RATE_LIMIT_RPS: u64 = 100;

/// Maximum number of concurrent in-flight requests.
pub const MAX_CONCURRENT_REQUESTS: usize = 512;

/// Maximum HTTP request body size in bytes (10 MB — uploads included).
pub const MAX_REQUEST_BODY_BYTES: usize = 10 * 1024 * 1024;
