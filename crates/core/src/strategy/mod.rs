//! Scoring strategies: keyword, fuzzy, and semantic, plus the query rewriter.
//!
//! Each strategy is a pure function mapping `(query, document text)` to a
//! relevance score in [0, 1]. Documents with a final score <= 0 are omitted
//! from results entirely rather than scored at zero.

/// Fuzzy trigram matching with whole-word boosts.
pub mod fuzzy;
/// Keyword token-set matching.
pub mod keyword;
/// Deterministic query expansion via a fixed synonym table.
pub mod rewrite;
/// Mock-semantic scoring with concept associations and injectable jitter.
pub mod semantic;

pub use fuzzy::fuzzy_search;
pub use keyword::keyword_search;
pub use rewrite::rewrite_query;
pub use semantic::{semantic_search, Jitter};

use crate::error::SearchError;
use std::fmt;
use std::str::FromStr;

/// A retrieval strategy selectable per query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Token-set substring matching; score = matched / total query tokens.
    Keyword,
    /// Trigram overlap plus whole-word boosts, clamped to [0, 1].
    Fuzzy,
    /// Word hits plus concept-association bonuses, perturbed by jitter.
    Semantic,
}

impl Strategy {
    /// All strategies, in comparison display order.
    pub const ALL: [Strategy; 3] = [Strategy::Keyword, Strategy::Fuzzy, Strategy::Semantic];

    /// The wire name used in routes and response method tags.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Keyword => "keyword",
            Strategy::Fuzzy => "fuzzy",
            Strategy::Semantic => "semantic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "keyword" => Ok(Strategy::Keyword),
            "fuzzy" => Ok(Strategy::Fuzzy),
            "semantic" => Ok(Strategy::Semantic),
            other => Err(SearchError::UnknownStrategy(other.to_string())),
        }
    }
}

/// Rounds a score to 3 decimal places, matching the wire precision.
pub(crate) fn round3(score: f32) -> f32 {
    (score * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trip() {
        for strategy in Strategy::ALL {
            assert_eq!(strategy.as_str().parse::<Strategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn test_unknown_strategy() {
        let err = "cosine".parse::<Strategy>().unwrap_err();
        assert_eq!(err, SearchError::UnknownStrategy("cosine".to_string()));
    }

    #[test]
    fn test_round3() {
        assert_eq!(round3(0.6666666), 0.667);
        assert_eq!(round3(0.2 + 0.2 + 0.3), 0.7);
    }
}
