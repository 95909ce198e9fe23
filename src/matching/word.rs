use crate::knowledge::KeywordIndex;
use crate::matching::candidates::{CandidateSet, MatchKind};
use crate::matching::config::PredictionConfig;
use crate::matching::similarity::edit_distance;
use crate::types::Query;

pub(crate) const EXACT_SCORE: f64 = 100.0;
pub(crate) const PREFIX_BASE_SCORE: f64 = 90.0;
pub(crate) const PREFIX_LENGTH_PENALTY: f64 = 2.0;
pub(crate) const FUZZY_BASE_SCORE: f64 = 80.0;
pub(crate) const FUZZY_DISTANCE_PENALTY: f64 = 10.0;
pub(crate) const SUBSTRING_SCORE: f64 = 70.0;

/// One pass of the word cascade.
pub(crate) trait WordStrategy {
    fn kind(&self) -> MatchKind;

    /// Whether the pass runs, given how many symbols earlier passes claimed.
    fn enabled(&self, _query: &Query, _claimed: usize, _max_results: usize) -> bool {
        true
    }

    fn scan(&self, query: &Query, index: &KeywordIndex, candidates: &mut CandidateSet);
}

pub(crate) struct ExactMatch;

impl WordStrategy for ExactMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Exact
    }

    fn scan(&self, query: &Query, index: &KeywordIndex, candidates: &mut CandidateSet) {
        for symbol in index.get(&query.normalized) {
            candidates.claim(symbol, EXACT_SCORE, self.kind());
        }
    }
}

/// Keywords extending the word. Shorter completions score higher.
///
/// Runs regardless of how many candidates exist already.
pub(crate) struct PrefixMatch;

impl WordStrategy for PrefixMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Prefix
    }

    fn scan(&self, query: &Query, index: &KeywordIndex, candidates: &mut CandidateSet) {
        let word_len = query.char_len();
        for entry in index.iter() {
            let keyword_len = entry.keyword.chars().count();
            if keyword_len <= word_len || !entry.keyword.starts_with(&query.normalized) {
                continue;
            }
            let score =
                PREFIX_BASE_SCORE - PREFIX_LENGTH_PENALTY * (keyword_len - word_len) as f64;
            for symbol in &entry.symbols {
                candidates.claim(symbol, score, self.kind());
            }
        }
    }
}

pub(crate) struct FuzzyMatch {
    pub max_distance: usize,
}

impl WordStrategy for FuzzyMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Fuzzy
    }

    fn enabled(&self, _query: &Query, claimed: usize, max_results: usize) -> bool {
        claimed < max_results
    }

    fn scan(&self, query: &Query, index: &KeywordIndex, candidates: &mut CandidateSet) {
        let word_len = query.char_len();
        for entry in index.iter() {
            let keyword_len = entry.keyword.chars().count();
            if keyword_len.abs_diff(word_len) > self.max_distance {
                continue;
            }
            let distance = edit_distance(&query.normalized, &entry.keyword);
            if distance > self.max_distance {
                continue;
            }
            let score = FUZZY_BASE_SCORE - FUZZY_DISTANCE_PENALTY * distance as f64;
            for symbol in &entry.symbols {
                candidates.claim(symbol, score, self.kind());
            }
        }
    }
}

/// Keywords containing the word somewhere inside them.
pub(crate) struct SubstringMatch {
    pub min_chars: usize,
}

impl WordStrategy for SubstringMatch {
    fn kind(&self) -> MatchKind {
        MatchKind::Semantic
    }

    fn enabled(&self, query: &Query, claimed: usize, max_results: usize) -> bool {
        claimed < max_results && query.char_len() >= self.min_chars
    }

    fn scan(&self, query: &Query, index: &KeywordIndex, candidates: &mut CandidateSet) {
        for entry in index.iter() {
            if entry.keyword == query.normalized || !entry.keyword.contains(&query.normalized) {
                continue;
            }
            for symbol in &entry.symbols {
                candidates.claim(symbol, SUBSTRING_SCORE, self.kind());
            }
        }
    }
}

/// Run the exact → prefix → fuzzy → substring cascade into one pool.
///
/// The caller is responsible for rejecting words below the minimum length.
pub(crate) fn collect_word_candidates(
    index: &KeywordIndex,
    config: &PredictionConfig,
    query: &Query,
    max_results: usize,
) -> CandidateSet {
    let fuzzy = FuzzyMatch {
        max_distance: config.max_edit_distance,
    };
    let substring = SubstringMatch {
        min_chars: config.min_substring_chars,
    };
    let cascade: [&dyn WordStrategy; 4] = [&ExactMatch, &PrefixMatch, &fuzzy, &substring];

    let mut candidates = CandidateSet::new();
    for strategy in cascade {
        if strategy.enabled(query, candidates.len(), max_results) {
            strategy.scan(query, index, &mut candidates);
        }
    }
    candidates
}
