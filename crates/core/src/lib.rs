//! # searchlab-core
//!
//! Embeddable in-memory search engine that ranks documents under three
//! retrieval strategies — keyword matching, fuzzy trigram matching, and
//! mock-semantic scoring with query expansion.
//!
//! This is the core library crate with zero async dependencies — suitable for
//! embedding directly in a server, a CLI, or language bindings.

/// Global configuration constants: scoring weights, limits, and defaults.
pub mod config;
/// Core document types: `Document` struct and `MetadataValue` enum.
pub mod document;
/// Abstract capability contracts: `SearchEngine` and `VectorSearchEngine`.
pub mod engine;
/// Argument validation errors.
pub mod error;
/// Search primitives: result envelopes and ranking.
pub mod search;
/// Document store and the strategy-dispatching engine facade.
pub mod store;
/// Scoring strategies: keyword, fuzzy, semantic, and the query rewriter.
pub mod strategy;
