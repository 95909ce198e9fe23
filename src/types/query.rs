/// Caller text after normalization.
/// Normalization rules:
/// - Trim surrounding whitespace
/// - Lowercase
/// - Split on whitespace runs
#[derive(Debug, Clone)]
pub struct Query {
    pub normalized: String,
    pub terms: Vec<String>,
}

impl Query {
    pub fn new(raw: &str) -> Self {
        let normalized = raw.trim().to_lowercase();
        let terms = normalized
            .split_whitespace()
            .map(|s| s.to_string())
            .collect();

        Self { normalized, terms }
    }

    pub fn is_blank(&self) -> bool {
        self.terms.is_empty()
    }

    /// Length of the normalized text in characters, not bytes.
    pub fn char_len(&self) -> usize {
        self.normalized.chars().count()
    }
}
