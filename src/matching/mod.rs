pub(crate) mod candidates;
pub mod config;
pub(crate) mod sentence;
pub mod similarity;
pub(crate) mod word;

use tracing::debug;

use crate::knowledge::corpus::POPULAR_SYMBOLS;
use crate::knowledge::KnowledgeBase;
use crate::matching::candidates::{CandidateSet, MatchKind};
use crate::types::{Query, Symbol};
pub use config::PredictionConfig;
pub use similarity::{cosine_similarity, edit_distance};

/// Stateless query front-end over a read-only [`KnowledgeBase`].
///
/// Every call recomputes from scratch; a `Predictor` can be shared freely
/// across threads.
#[derive(Debug, Clone)]
pub struct Predictor<'kb> {
    kb: &'kb KnowledgeBase,
    config: PredictionConfig,
}

impl Default for Predictor<'static> {
    fn default() -> Self {
        Self {
            kb: KnowledgeBase::builtin(),
            config: PredictionConfig::v0(),
        }
    }
}

impl<'kb> Predictor<'kb> {
    pub fn new(kb: &'kb KnowledgeBase, config: PredictionConfig) -> Self {
        Self { kb, config }
    }

    /// Rank symbols for a single, possibly partial, word.
    ///
    /// Returns at most `max_results` distinct symbols, best first. Words
    /// shorter than two characters after trimming yield nothing.
    pub fn predict_for_word(&self, word: &str, max_results: usize) -> Vec<Symbol> {
        // Length is judged before lowercasing, which can add characters.
        let trimmed = word.trim();
        if trimmed.is_empty() || trimmed.chars().count() < self.config.min_word_chars {
            return Vec::new();
        }
        let query = Query::new(trimmed);

        let candidates =
            word::collect_word_candidates(self.kb.index(), &self.config, &query, max_results);
        log_candidates("word", &query, &candidates);

        candidates.into_ranked(max_results)
    }

    /// Rank symbols for a full sentence.
    ///
    /// Per-word predictions are claimed first, then every remaining record is
    /// scored against the whole sentence.
    pub fn predict_for_sentence(&self, sentence: &str, max_results: usize) -> Vec<Symbol> {
        let query = Query::new(sentence);
        if query.is_blank() {
            return Vec::new();
        }

        let mut candidates = CandidateSet::new();

        // 1. Per-word phase
        sentence::claim_word_hits(&query, &mut candidates, |term| {
            self.predict_for_word(term, self.config.sentence_word_cap)
        });

        // 2. Whole-record phase
        sentence::claim_record_matches(self.kb, &self.config, &query, &mut candidates);

        log_candidates("sentence", &query, &candidates);

        candidates.into_ranked(max_results)
    }

    /// Symbols in `category`, corpus order, at most `limit`.
    pub fn by_category(&self, category: &str, limit: usize) -> Vec<Symbol> {
        self.kb.records_by_category(category, limit)
    }

    /// Fixed list of commonly used symbols, independent of the corpus.
    pub fn popular_symbols(&self) -> &'static [&'static str] {
        POPULAR_SYMBOLS
    }
}

fn log_candidates(mode: &str, query: &Query, candidates: &CandidateSet) {
    debug!(
        mode,
        query = query.normalized.as_str(),
        candidates = candidates.len(),
        exact = candidates.count(MatchKind::Exact),
        prefix = candidates.count(MatchKind::Prefix),
        fuzzy = candidates.count(MatchKind::Fuzzy),
        semantic = candidates.count(MatchKind::Semantic),
        "ranked candidates"
    );
}
