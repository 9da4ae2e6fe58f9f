//! Mock transcription and vision collaborators.
//!
//! Stand-ins for the external speech-to-text and vision models that convert
//! an uploaded blob into a query before it reaches the engine. Selection is
//! driven by the same injectable [`Jitter`] source as semantic scoring, so
//! tests can pin outcomes; with jitter disabled the first canned answer is
//! always returned.

use rand::seq::SliceRandom;
use searchlab_core::strategy::Jitter;

/// Canned transcriptions returned for any audio upload.
pub const MOCK_TRANSCRIPTIONS: [&str; 5] = [
    "diamond ring",
    "gold necklace",
    "pearl earrings",
    "silver bracelet",
    "vintage emerald",
];

/// Canned feature sets returned for any image upload.
pub const MOCK_FEATURE_SETS: [[&str; 3]; 5] = [
    ["ring", "gold", "diamond"],
    ["necklace", "chain", "pendant"],
    ["earrings", "pearl", "elegant"],
    ["bracelet", "silver", "sparkle"],
    ["ring", "emerald", "vintage"],
];

/// Mock media analysis with an injectable randomness source.
#[derive(Debug, Clone)]
pub struct MediaMocks {
    jitter: Jitter,
}

impl MediaMocks {
    /// Creates media mocks driven by the given jitter source.
    pub fn new(jitter: Jitter) -> Self {
        Self { jitter }
    }

    /// "Transcribes" an audio blob to a query string.
    pub fn transcribe(&self, _audio: &[u8]) -> String {
        let choice = match self.jitter.rng().as_mut() {
            Some(rng) => MOCK_TRANSCRIPTIONS
                .choose(rng)
                .copied()
                .unwrap_or(MOCK_TRANSCRIPTIONS[0]),
            None => MOCK_TRANSCRIPTIONS[0],
        };
        choice.to_string()
    }

    /// "Detects" feature terms in an image blob.
    pub fn detect_features(&self, _image: &[u8]) -> Vec<String> {
        let set = match self.jitter.rng().as_mut() {
            Some(rng) => MOCK_FEATURE_SETS
                .choose(rng)
                .unwrap_or(&MOCK_FEATURE_SETS[0]),
            None => &MOCK_FEATURE_SETS[0],
        };
        set.iter().map(|s| s.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disabled_jitter_returns_first_answers() {
        let media = MediaMocks::new(Jitter::Disabled);
        assert_eq!(media.transcribe(b"blob"), "diamond ring");
        assert_eq!(
            media.detect_features(b"blob"),
            vec!["ring", "gold", "diamond"]
        );
    }

    #[test]
    fn test_seeded_jitter_is_repeatable() {
        let media = MediaMocks::new(Jitter::Seeded(7));
        assert_eq!(media.transcribe(b"a"), media.transcribe(b"b"));
        assert_eq!(media.detect_features(b"a"), media.detect_features(b"b"));
    }

    #[test]
    fn test_transcription_is_a_known_query() {
        let media = MediaMocks::new(Jitter::Entropy);
        let transcription = media.transcribe(b"blob");
        assert!(MOCK_TRANSCRIPTIONS.contains(&transcription.as_str()));
    }
}
