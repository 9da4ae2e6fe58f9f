//! Argument validation errors.
//!
//! Strategy scoring itself is total — it is defined for every query/document
//! pair and never fails. Errors only arise from invalid caller arguments.

use thiserror::Error;

/// Validation error returned by search operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SearchError {
    /// `top_k` must be at least 1.
    #[error("top_k must be at least 1, got {got}")]
    InvalidTopK {
        /// The rejected value.
        got: usize,
    },
    /// `top_k` exceeded the configured ceiling.
    #[error("top_k exceeds maximum of {max}, got {got}")]
    TopKTooLarge {
        /// The rejected value.
        got: usize,
        /// The configured maximum.
        max: usize,
    },
    /// The query string exceeded the configured byte limit.
    #[error("query exceeds maximum length of {max} bytes")]
    QueryTooLong {
        /// The configured maximum.
        max: usize,
    },
    /// The strategy name did not parse.
    #[error("unknown search strategy '{0}'")]
    UnknownStrategy(String),
}
