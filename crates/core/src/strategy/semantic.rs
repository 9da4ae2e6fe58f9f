//! Mock-semantic scoring with concept associations and injectable jitter.
//!
//! Emulates embedding-based retrieval without computing embeddings: query
//! words found in the text score a base weight, a concept-association table
//! adds bonuses for related terms, and a small symmetric jitter perturbs the
//! result to mimic similarity variance. The jitter source is injectable so
//! tests can disable it or pin a seed.

use crate::config;
use crate::strategy::round3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Concept-association bonus table, distinct from the rewrite expansion
/// table. If the concept appears anywhere in the lowercased query, each
/// associated term found in the document text adds a bonus.
const ASSOCIATIONS: &[(&str, &[&str])] = &[
    ("engagement", &["ring", "diamond", "solitaire"]),
    ("wedding", &["ring", "gold", "band"]),
    ("gift", &["pendant", "earrings", "bracelet"]),
    ("luxury", &["diamond", "gold", "platinum", "emerald", "sapphire"]),
    ("everyday", &["chain", "stud", "simple"]),
    ("vintage", &["art deco", "antique", "classic"]),
    ("romantic", &["heart", "rose", "pendant"]),
];

/// Source of the semantic score perturbation.
///
/// `Seeded` builds a fresh generator per query, so repeated calls with
/// identical inputs produce identical scores.
#[derive(Debug, Clone, Default)]
pub enum Jitter {
    /// No perturbation; semantic scoring is fully deterministic.
    Disabled,
    /// Deterministic perturbation from a fixed seed.
    Seeded(u64),
    /// Entropy-seeded perturbation.
    #[default]
    Entropy,
}

impl Jitter {
    /// Returns a generator for one query, or `None` when disabled.
    pub fn rng(&self) -> Option<StdRng> {
        match self {
            Jitter::Disabled => None,
            Jitter::Seeded(seed) => Some(StdRng::seed_from_u64(*seed)),
            Jitter::Entropy => Some(StdRng::from_entropy()),
        }
    }
}

/// Pre-jitter score: query word hits plus concept-association bonuses.
pub fn base_score(query: &str, text: &str) -> f32 {
    let query = query.to_lowercase();
    let mut total = 0.0;

    for word in query.split_whitespace() {
        if text.contains(word) {
            total += config::SEMANTIC_WORD_WEIGHT;
        }
    }

    for (concept, related) in ASSOCIATIONS {
        if query.contains(concept) {
            for term in *related {
                if text.contains(term) {
                    total += config::SEMANTIC_ASSOCIATION_WEIGHT;
                }
            }
        }
    }

    total
}

/// Scores every text against the query.
///
/// Documents with a nonzero base score are perturbed by the jitter source and
/// clamped to [`config::SEMANTIC_MIN_SCORE`, 1.0]. Returns `(slot, score)`
/// pairs in scan order.
pub fn semantic_search(texts: &[&str], query: &str, jitter: &Jitter) -> Vec<(u32, f32)> {
    let mut rng = jitter.rng();
    texts
        .iter()
        .enumerate()
        .filter_map(|(slot, text)| {
            let base = base_score(query, text);
            if base <= 0.0 {
                return None;
            }
            let perturbed = match rng.as_mut() {
                Some(rng) => {
                    base + rng.gen_range(-config::SEMANTIC_JITTER..=config::SEMANTIC_JITTER)
                }
                None => base,
            };
            let clamped = perturbed.clamp(config::SEMANTIC_MIN_SCORE, 1.0);
            Some((slot as u32, round3(clamped)))
        })
        .collect()
}
