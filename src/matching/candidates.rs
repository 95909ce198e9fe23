use std::cmp::Ordering;
use std::collections::HashSet;

use crate::types::Symbol;

/// Which rule produced a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKind {
    Exact,
    Prefix,
    Fuzzy,
    Semantic,
}

/// Internal: a scored symbol that has not been ranked yet.
#[derive(Debug, Clone)]
pub(crate) struct MatchCandidate {
    pub symbol: Symbol,
    pub score: f64,
    pub kind: MatchKind,
}

/// Per-query candidate pool. The first claim on a symbol wins; later claims
/// for the same symbol are ignored regardless of score.
#[derive(Debug, Default)]
pub(crate) struct CandidateSet {
    candidates: Vec<MatchCandidate>,
    claimed: HashSet<Symbol>,
}

impl CandidateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` when the symbol was not already claimed.
    pub fn claim(&mut self, symbol: &Symbol, score: f64, kind: MatchKind) -> bool {
        if self.claimed.contains(symbol) {
            return false;
        }
        self.claimed.insert(symbol.clone());
        self.candidates.push(MatchCandidate {
            symbol: symbol.clone(),
            score,
            kind,
        });
        true
    }

    pub fn is_claimed(&self, symbol: &Symbol) -> bool {
        self.claimed.contains(symbol)
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn count(&self, kind: MatchKind) -> usize {
        self.candidates.iter().filter(|c| c.kind == kind).count()
    }

    /// Sort by descending score, keeping claim order on ties, and truncate.
    pub fn into_ranked(self, max_results: usize) -> Vec<Symbol> {
        let mut candidates = self.candidates;

        // sort_by is stable: equal scores keep insertion order
        candidates.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        debug_assert!(candidates.windows(2).all(|w| w[0].score >= w[1].score));

        candidates.truncate(max_results);
        candidates.into_iter().map(|c| c.symbol).collect()
    }
}
