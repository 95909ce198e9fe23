use crate::knowledge::{KnowledgeBase, SymbolRecord};
use crate::matching::candidates::{CandidateSet, MatchKind};
use crate::matching::config::PredictionConfig;
use crate::matching::similarity::cosine_similarity;
use crate::types::{Query, Symbol};

pub(crate) const WORD_HIT_SCORE: f64 = 90.0;
pub(crate) const LITERAL_KEYWORD_SCORE: f64 = 80.0;
pub(crate) const COSINE_SCALE: f64 = 60.0;

/// Phase 1: claim each word's own predictions, in sentence order.
pub(crate) fn claim_word_hits<F>(query: &Query, candidates: &mut CandidateSet, mut predict_word: F)
where
    F: FnMut(&str) -> Vec<Symbol>,
{
    for term in &query.terms {
        for symbol in predict_word(term.as_str()) {
            candidates.claim(&symbol, WORD_HIT_SCORE, MatchKind::Exact);
        }
    }
}

/// Phase 2: score every unclaimed record against the whole sentence.
pub(crate) fn claim_record_matches(
    kb: &KnowledgeBase,
    config: &PredictionConfig,
    query: &Query,
    candidates: &mut CandidateSet,
) {
    for record in kb.all_records() {
        if candidates.is_claimed(record.symbol()) {
            continue;
        }
        if let Some(score) = record_score(record, &query.normalized, config.semantic_threshold) {
            candidates.claim(record.symbol(), score, MatchKind::Semantic);
        }
    }
}

/// Mean contribution of the record's matched keywords, or `None` if none matched.
pub(crate) fn record_score(record: &SymbolRecord, sentence: &str, threshold: f64) -> Option<f64> {
    let mut sum = 0.0;
    let mut matched = 0usize;

    for keyword in record.keywords() {
        if sentence.contains(keyword.as_str()) {
            sum += LITERAL_KEYWORD_SCORE;
            matched += 1;
            continue;
        }
        let similarity = cosine_similarity(sentence, keyword);
        if similarity > threshold {
            sum += similarity * COSINE_SCALE;
            matched += 1;
        }
    }

    if matched == 0 {
        None
    } else {
        Some(sum / matched as f64)
    }
}
