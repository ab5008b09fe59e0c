use crate::decision::engine::{pretty_label, DecideError, Rationale, Verdict};
use crate::decision::keywords::KeywordSet;
use crate::decision::tests::fixture::{prediction, Fixture};

#[test]
fn test_top_recyclable_no_trash_hit() {
    let f = Fixture::new();

    let predictions = vec![prediction("beer bottle", 0.9), prediction("broccoli", 0.05)];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Recyclable);
    assert_eq!(decision.matched, predictions[0]);
    assert_eq!(decision.rationale, Rationale::KeywordHit);
}

#[test]
fn test_trash_hit_wins_inside_margin() {
    let f = Fixture::new();

    // 0.1 < 0.8 * 1.2, so the trash hit holds.
    let predictions = vec![prediction("banana", 0.8), prediction("tin can", 0.1)];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Trash);
    assert_eq!(decision.matched, predictions[0]);
    assert_eq!(decision.rationale, Rationale::KeywordHit);
}

#[test]
fn test_recyclable_wins_at_margin_boundary() {
    let f = Fixture::new();

    // Exactly 1.2x the trash confidence clears the margin.
    let predictions = vec![prediction("tin can", 0.6), prediction("banana", 0.5)];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Recyclable);
    assert_eq!(decision.matched, predictions[0]);
    assert_eq!(decision.rationale, Rationale::KeywordHit);
}

#[test]
fn test_recyclable_wins_above_margin() {
    let f = Fixture::new();

    let predictions = vec![prediction("water bottle", 0.9), prediction("banana", 0.2)];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Recyclable);
    assert_eq!(decision.matched, predictions[0]);
}

#[test]
fn test_no_hit_falls_back_to_top_prediction() {
    let f = Fixture::new();

    let predictions = vec![prediction("laptop", 0.7), prediction("keyboard", 0.2)];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Trash);
    assert_eq!(decision.matched, predictions[0]);
    assert_eq!(decision.rationale, Rationale::FallbackTopPrediction);
}

#[test]
fn test_first_match_in_rank_order_wins() {
    let f = Fixture::new();

    // Both labels are recyclable; the higher-ranked one must be matched
    // even though the lower-ranked one appears later with less confidence.
    let predictions = vec![
        prediction("laptop", 0.6),
        prediction("soda can", 0.3),
        prediction("glass jar", 0.1),
    ];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Recyclable);
    assert_eq!(decision.matched, predictions[1]);
}

#[test]
fn test_empty_predictions_is_invalid_input() {
    let f = Fixture::new();

    let result = f.engine.decide(&[]);

    assert!(matches!(result, Err(DecideError::InvalidInput)));
}

#[test]
fn test_empty_keyword_sets_never_match() {
    let f = Fixture::with_keywords(KeywordSet::empty(), KeywordSet::empty());

    let predictions = vec![prediction("beer bottle", 0.9)];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Trash);
    assert_eq!(decision.matched, predictions[0]);
    assert_eq!(decision.rationale, Rationale::FallbackTopPrediction);
}

#[test]
fn test_matching_is_case_insensitive() {
    let f = Fixture::new();

    let predictions = vec![prediction("Beer Bottle", 0.9)];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Recyclable);
}

#[test]
fn test_synonym_list_label_matches() {
    let f = Fixture::new();

    let predictions = vec![prediction("pop bottle, soda bottle", 0.75)];

    let decision = f.engine.decide(&predictions).unwrap();

    assert_eq!(decision.verdict, Verdict::Recyclable);
    assert_eq!(decision.matched, predictions[0]);
}

#[test]
fn test_deterministic_for_identical_input() {
    let f = Fixture::new();

    let predictions = vec![prediction("banana", 0.8), prediction("tin can", 0.1)];

    let first = f.engine.decide(&predictions).unwrap();
    let second = f.engine.decide(&predictions).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_pretty_label_takes_first_synonym() {
    assert_eq!(pretty_label("pop bottle, soda bottle"), "pop bottle");
}

#[test]
fn test_pretty_label_truncates_long_names() {
    let long = "a very long classifier label that keeps going";
    let pretty = pretty_label(long);
    assert_eq!(pretty.chars().count(), 26);
    assert!(pretty.ends_with('…'));
}
