//! Deterministic text-to-emoji prediction engine.
//!
//! `emoji-core` ranks symbols for a partial word or a full sentence against a
//! static keyword corpus, using exact, prefix, fuzzy and substring matching
//! for words and an additional whole-record bag-of-words pass for sentences.
//! All operations are pure: identical inputs always produce identical
//! outputs, and the knowledge base is never mutated after it is built.
//!
//! The crate-root functions query the built-in corpus. Use
//! [`matching::Predictor`] to query a corpus loaded with
//! [`knowledge::KnowledgeBase::from_path`] or built from records.

pub mod knowledge;
pub mod matching;
pub mod types;

pub use knowledge::{KnowledgeBase, KnowledgeBaseError, SymbolRecord};
pub use matching::{PredictionConfig, Predictor};
pub use types::Symbol;

/// Rank built-in symbols for a single word. See [`Predictor::predict_for_word`].
pub fn predict_for_word(word: &str, max_results: usize) -> Vec<Symbol> {
    Predictor::default().predict_for_word(word, max_results)
}

/// Rank built-in symbols for a sentence. See [`Predictor::predict_for_sentence`].
pub fn predict_for_sentence(sentence: &str, max_results: usize) -> Vec<Symbol> {
    Predictor::default().predict_for_sentence(sentence, max_results)
}

pub fn by_category(category: &str, limit: usize) -> Vec<Symbol> {
    Predictor::default().by_category(category, limit)
}

pub fn popular_symbols() -> &'static [&'static str] {
    Predictor::default().popular_symbols()
}
