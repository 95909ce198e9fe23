use emoji_core::knowledge::{KnowledgeBase, SymbolRecord};
use emoji_core::matching::{PredictionConfig, Predictor};
use emoji_core::types::Symbol;

fn make_kb(entries: &[(&str, &[&str])]) -> KnowledgeBase {
    let records = entries
        .iter()
        .map(|(symbol, keywords)| SymbolRecord::new(*symbol, *keywords, "test").unwrap())
        .collect();
    KnowledgeBase::from_records(records)
}

fn symbols(list: &[Symbol]) -> Vec<&str> {
    list.iter().map(|s| s.as_str()).collect()
}

#[test]
fn test_blank_sentence_rejection() {
    assert!(emoji_core::predict_for_sentence("", 10).is_empty());
    assert!(emoji_core::predict_for_sentence("   ", 10).is_empty());
    assert!(emoji_core::predict_for_sentence("\t\n ", 10).is_empty());
}

#[test]
fn test_builtin_sentence() {
    let result = emoji_core::predict_for_sentence("I love pizza", 10);
    assert!(result.iter().any(|s| s == "❤️"), "got {result:?}");
    assert!(result.iter().any(|s| s == "🍕"), "got {result:?}");
    assert!(result.len() <= 10);
}

#[test]
fn golden_word_hits_in_sentence_order() {
    let kb = make_kb(&[
        ("🍕", &["pizza"]),
        ("🍵", &["green tea", "matcha"]),
        ("❤️", &["love"]),
        ("☀️", &["sunny day"]),
    ]);
    let predictor = Predictor::new(&kb, PredictionConfig::v0());

    // All three are claimed by the per-word phase at 90, so sentence order
    // decides. "tea" reaches 🍵 through the substring pass on "green tea".
    let result = predictor.predict_for_sentence("I love pizza and tea", 10);
    assert_eq!(symbols(&result), vec!["❤️", "🍕", "🍵"]);

    let capped = predictor.predict_for_sentence("I love pizza and tea", 2);
    assert_eq!(symbols(&capped), vec!["❤️", "🍕"]);
}

#[test]
fn golden_record_phase_ranks_below_word_hits() {
    let kb = make_kb(&[("📍", &["at"]), ("🍽️", &["eat"])]);
    let predictor = Predictor::new(&kb, PredictionConfig::v0());

    // "great" fuzzily reaches "eat" in the word phase (90); "at" is only a
    // literal substring of the sentence (80).
    let result = predictor.predict_for_sentence("great", 5);
    assert_eq!(symbols(&result), vec!["🍽️", "📍"]);
}

#[test]
fn golden_cosine_only_record() {
    let kb = make_kb(&[("🆗", &["ok go my"]), ("🆖", &["no no no"])]);
    let predictor = Predictor::new(&kb, PredictionConfig::v0());

    // Two-letter words skip the substring pass and are too short for the
    // fuzzy window, so only the bag-of-words overlap can reach 🆗.
    let result = predictor.predict_for_sentence("my go", 5);
    assert_eq!(symbols(&result), vec!["🆗"]);
}

#[test]
fn golden_record_mean_orders_semantic_hits() {
    // "y g" spans the word boundary, so only the record phase sees it.
    // 🅰️: one literal hit (80). 🅱️: one literal hit and one cosine hit
    // (2 / sqrt 6 * 60), mean below 80.
    let kb = make_kb(&[
        ("🅱️", &["y g", "ok go my"]),
        ("🅰️", &["y g", "qqqqqqqq"]),
    ]);
    let predictor = Predictor::new(&kb, PredictionConfig::v0());

    let result = predictor.predict_for_sentence("my go", 5);
    assert_eq!(symbols(&result), vec!["🅰️", "🅱️"]);
}

#[test]
fn test_repeated_words_do_not_duplicate() {
    let result = emoji_core::predict_for_sentence("pizza pizza pizza", 10);
    let mut seen = std::collections::HashSet::new();
    assert!(result.iter().all(|s| seen.insert(s.clone())));
    assert_eq!(result.first().map(|s| s.as_str()), Some("🍕"));
}

#[test]
fn test_sentence_word_cap_is_configurable() {
    let kb = make_kb(&[("🐶", &["dog"]), ("🐕", &["dog"]), ("🦮", &["dog"])]);
    let config = PredictionConfig {
        sentence_word_cap: 1,
        ..PredictionConfig::v0()
    };

    // With a cap of one only 🐶 comes from the word phase; the others are
    // still found by the record phase as literal hits.
    let result = Predictor::new(&kb, config).predict_for_sentence("my dog", 5);
    assert_eq!(symbols(&result), vec!["🐶", "🐕", "🦮"]);
}

#[test]
fn test_degenerate_sentences_do_not_panic() {
    let long = "happy ".repeat(2_000);
    assert!(emoji_core::predict_for_sentence(&long, 5).len() <= 5);

    assert!(emoji_core::predict_for_sentence("!!! ??? ...", 5).len() <= 5);
    assert!(emoji_core::predict_for_sentence("😀 🍕 🎉", 5).len() <= 5);
}

#[test]
fn golden_mixed_case_keyword_matches_in_record_phase() {
    // Keywords are lowercased on construction, so the literal check against
    // the lowercased sentence still hits. "y g" is invisible to the word phase.
    let kb = make_kb(&[("🍕", &["Pizza Pie", "Y G"])]);
    let predictor = Predictor::new(&kb, PredictionConfig::v0());

    assert_eq!(symbols(&predictor.predict_for_sentence("MY GO", 5)), vec!["🍕"]);
}

#[test]
fn test_unrelated_sentence_matches_nothing() {
    let kb = make_kb(&[("🍕", &["Pizza Pie"])]);
    let predictor = Predictor::new(&kb, PredictionConfig::v0());

    assert!(predictor.predict_for_sentence("hello there", 5).is_empty());
    assert!(predictor.predict_for_word("İ", 5).is_empty());
    assert_eq!(kb.all_records()[0].keywords(), ["pizza pie"]);
}
