//! Property tests for the matching invariants.

use namelink_match::{
    MatchOptions, StopWords, normalize_name, resolve, select_threshold, similarity,
};
use proptest::prelude::*;

fn entity_name() -> impl Strategy<Value = String> {
    "[A-Za-zÀ-ÿ0-9 .,&()'-]{0,24}"
}

fn candidate_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(entity_name(), 0..8)
}

proptest! {
    #[test]
    fn normalization_is_idempotent(raw in any::<String>()) {
        let once = normalize_name(Some(&raw), None);
        prop_assert_eq!(normalize_name(Some(&once), None), once);
    }

    #[test]
    fn normalization_with_stop_words_is_idempotent(raw in entity_name()) {
        let stop_words: StopWords = ["the", "of", "and", "co"].into_iter().collect();
        let once = normalize_name(Some(&raw), Some(&stop_words));
        prop_assert_eq!(normalize_name(Some(&once), Some(&stop_words)), once);
    }

    #[test]
    fn normalized_names_are_clean_ascii(raw in any::<String>()) {
        let normalized = normalize_name(Some(&raw), None);
        prop_assert!(normalized.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == ' '));
        prop_assert!(!normalized.contains("  "));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn similarity_is_bounded_and_symmetric(a in any::<String>(), b in any::<String>()) {
        let forward = similarity(&a, &b);
        prop_assert!((0.0..=1.0).contains(&forward));
        prop_assert_eq!(forward, similarity(&b, &a));
    }

    #[test]
    fn self_similarity_is_one(raw in entity_name()) {
        let normalized = normalize_name(Some(&raw), None);
        prop_assume!(!normalized.is_empty());
        prop_assert_eq!(similarity(&normalized, &normalized), 1.0);
    }

    #[test]
    fn single_policy_returns_at_most_one(query in entity_name(), candidates in candidate_list()) {
        let result = resolve(Some(&query), &candidates, &MatchOptions::default());
        prop_assert!(result.len() <= 1);
        if let Some(best) = result.best() {
            prop_assert!(best.score >= 0.8);
        }
    }

    #[test]
    fn multiple_policy_is_sorted_and_above_threshold(
        query in entity_name(),
        candidates in candidate_list(),
        dynamic in any::<bool>(),
        floor in 0.0f64..=1.0,
    ) {
        let options = MatchOptions::default()
            .with_allow_multiple(true)
            .with_dynamic_threshold(dynamic)
            .with_floor_threshold(floor);
        let result = resolve(Some(&query), &candidates, &options);
        prop_assert!(result.threshold() >= floor);
        for entry in result.iter() {
            prop_assert!(entry.score >= result.threshold());
            prop_assert_eq!(&candidates[entry.position], &entry.candidate);
        }
        for pair in result.matches().windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
        }
    }

    #[test]
    fn threshold_is_floor_or_observed_score(
        scores in prop::collection::vec(0.0f64..=1.0, 0..12),
        floor in 0.0f64..=1.0,
    ) {
        let threshold = select_threshold(&scores, floor);
        prop_assert!(threshold >= floor);
        prop_assert!(threshold == floor || scores.contains(&threshold));
    }
}
