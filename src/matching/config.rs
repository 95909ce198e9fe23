// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PredictionConfig {
    /// Normalized words shorter than this (in chars) are rejected outright.
    pub min_word_chars: usize,
    /// Minimum word length for the substring pass.
    pub min_substring_chars: usize,
    /// Fuzzy pass: maximum length difference and maximum edit distance.
    pub max_edit_distance: usize,
    /// Per-word result cap during the first sentence phase.
    pub sentence_word_cap: usize,
    /// Cosine similarity must exceed this for a keyword to count.
    pub semantic_threshold: f64,
}

impl PredictionConfig {
    pub fn v0() -> Self {
        Self {
            min_word_chars: 2,
            min_substring_chars: 3,
            max_edit_distance: 2,
            sentence_word_cap: 3,
            semantic_threshold: 0.3,
        }
    }
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self::v0()
    }
}
