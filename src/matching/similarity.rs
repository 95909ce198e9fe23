use std::collections::BTreeMap;

/// Single-character insert/delete/substitute distance, counted over chars.
pub fn edit_distance(a: &str, b: &str) -> usize {
    strsim::levenshtein(a, b)
}

/// Bag-of-words cosine similarity over whitespace tokens.
///
/// Returns 0.0 when either side has no tokens.
pub fn cosine_similarity(a: &str, b: &str) -> f64 {
    // token -> (count in a, count in b); BTreeMap keeps the sum order fixed
    let mut vocabulary: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for token in a.split_whitespace() {
        vocabulary.entry(token).or_default().0 += 1.0;
    }
    for token in b.split_whitespace() {
        vocabulary.entry(token).or_default().1 += 1.0;
    }

    let mut dot = 0.0;
    let mut norm_a = 0.0;
    let mut norm_b = 0.0;
    for (x, y) in vocabulary.values() {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let magnitude = norm_a.sqrt() * norm_b.sqrt();
    if magnitude == 0.0 {
        0.0
    } else {
        dot / magnitude
    }
}
