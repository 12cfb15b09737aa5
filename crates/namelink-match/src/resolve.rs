//! Resolving one query against a candidate list.
//!
//! Each candidate's score is the best similarity over every pair of query
//! variant and candidate variant. Variant sets hold at most three entries,
//! so the exhaustive cross product stays cheap.

use std::cmp::Ordering;

use serde::Serialize;

use crate::options::MatchOptions;
use crate::similarity::similarity;
use crate::threshold::select_threshold;
use crate::variants::{VariantSet, name_variants};

/// A candidate paired with its best similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    /// Candidate as supplied, before normalization.
    pub candidate: String,
    /// Position of the candidate in the input list.
    pub position: usize,
    /// Best similarity in `[0, 1]`.
    pub score: f64,
}

/// Outcome of resolving one query.
///
/// Matches are ordered by descending score; ties keep input order. Under the
/// single-match policy there is at most one entry.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct MatchResult {
    matches: Vec<ScoredCandidate>,
    threshold: f64,
}

impl MatchResult {
    /// A result with no matches.
    pub fn empty(threshold: f64) -> Self {
        Self {
            matches: Vec::new(),
            threshold,
        }
    }

    /// The highest-scoring match, if any.
    pub fn best(&self) -> Option<&ScoredCandidate> {
        self.matches.first()
    }

    pub fn matches(&self) -> &[ScoredCandidate] {
        &self.matches
    }

    /// Cutoff actually applied: the floor, or the inferred dynamic threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScoredCandidate> {
        self.matches.iter()
    }

    pub fn into_matches(self) -> Vec<ScoredCandidate> {
        self.matches
    }
}

/// Candidates with their variant sets computed once.
///
/// Building this up front lets a column of queries reuse the candidate side
/// of the comparison. It is read-only once built and can be shared across
/// threads.
#[derive(Debug, Clone)]
pub struct PreparedCandidates {
    entries: Vec<(String, VariantSet)>,
}

impl PreparedCandidates {
    /// Compute variants for every candidate under `options`.
    pub fn new<S: AsRef<str>>(candidates: &[S], options: &MatchOptions) -> Self {
        let entries = candidates
            .iter()
            .map(|candidate| {
                let candidate = candidate.as_ref();
                (candidate.to_string(), variants_for(Some(candidate), options))
            })
            .collect::<Vec<_>>();
        tracing::debug!(
            candidates = entries.len(),
            normalize = options.normalize_names,
            "prepared candidate variants"
        );
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Resolve `query` against `candidates`.
///
/// An empty candidate list yields an empty result without any scoring. See
/// [`MatchOptions`] for the selection policies.
pub fn resolve<S: AsRef<str>>(
    query: Option<&str>,
    candidates: &[S],
    options: &MatchOptions,
) -> MatchResult {
    if candidates.is_empty() {
        return MatchResult::empty(options.floor_threshold);
    }
    let prepared = PreparedCandidates::new(candidates, options);
    resolve_prepared(query, &prepared, options)
}

/// Resolve `query` against candidates prepared with the same `options`.
pub fn resolve_prepared(
    query: Option<&str>,
    prepared: &PreparedCandidates,
    options: &MatchOptions,
) -> MatchResult {
    if prepared.is_empty() {
        return MatchResult::empty(options.floor_threshold);
    }

    let query_variants = variants_for(query, options);
    let scored: Vec<ScoredCandidate> = prepared
        .entries
        .iter()
        .enumerate()
        .map(|(position, (candidate, variants))| ScoredCandidate {
            candidate: candidate.clone(),
            position,
            score: best_score(&query_variants, variants),
        })
        .collect();

    if options.allow_multiple {
        select_multiple(scored, options)
    } else {
        select_single(scored, options.floor_threshold)
    }
}

fn variants_for(name: Option<&str>, options: &MatchOptions) -> VariantSet {
    if options.normalize_names {
        name_variants(
            name,
            options.stop_words.as_ref(),
            options.acronym_map.as_ref(),
        )
    } else {
        VariantSet::literal(name.unwrap_or_default())
    }
}

fn best_score(query: &VariantSet, candidate: &VariantSet) -> f64 {
    query
        .iter()
        .flat_map(|q| candidate.iter().map(move |c| similarity(q, c)))
        .fold(0.0, f64::max)
}

fn select_single(scored: Vec<ScoredCandidate>, floor: f64) -> MatchResult {
    let mut best: Option<ScoredCandidate> = None;
    for entry in scored {
        // Strict comparison: the first candidate wins a tie.
        if best.as_ref().is_none_or(|current| entry.score > current.score) {
            best = Some(entry);
        }
    }

    match best {
        Some(entry) if entry.score >= floor => MatchResult {
            matches: vec![entry],
            threshold: floor,
        },
        _ => MatchResult::empty(floor),
    }
}

fn select_multiple(scored: Vec<ScoredCandidate>, options: &MatchOptions) -> MatchResult {
    let threshold = if options.dynamic_threshold {
        let scores: Vec<f64> = scored.iter().map(|entry| entry.score).collect();
        select_threshold(&scores, options.floor_threshold)
    } else {
        options.floor_threshold
    };

    let mut matches: Vec<ScoredCandidate> = scored
        .into_iter()
        .filter(|entry| entry.score >= threshold)
        .collect();
    // Stable sort keeps input order among equal scores.
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

    MatchResult { matches, threshold }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variants::AcronymMap;

    fn names(result: &MatchResult) -> Vec<&str> {
        result.iter().map(|m| m.candidate.as_str()).collect()
    }

    #[test]
    fn test_empty_candidates_return_empty() {
        let candidates: Vec<String> = Vec::new();
        let result = resolve(Some("ABN AMRO"), &candidates, &MatchOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_single_best_match() {
        let candidates = ["Ageas", "ABN AMRO Bank", "Intesa San Paolo"];
        let result = resolve(Some("ABN AMRO"), &candidates, &MatchOptions::default());
        assert_eq!(result.len(), 1);
        let best = result.best().unwrap();
        assert_eq!(best.candidate, "ABN AMRO Bank");
        assert_eq!(best.position, 1);
        assert!(best.score >= 0.8, "got {}", best.score);
    }

    #[test]
    fn test_no_candidate_above_floor() {
        let candidates = ["Intesa San Paolo", "Deutsche Bank"];
        let result = resolve(Some("Zurich"), &candidates, &MatchOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let candidates = ["World Bank", "world bank", "WORLD BANK!"];
        let result = resolve(Some("World Bank"), &candidates, &MatchOptions::default());
        assert_eq!(names(&result), vec!["World Bank"]);
        assert_eq!(result.best().unwrap().score, 1.0);
    }

    #[test]
    fn test_multiple_sorted_descending() {
        let candidates = ["World Bank Group", "World Bank", "Deutsche Bank"];
        let options = MatchOptions::default()
            .with_allow_multiple(true)
            .with_floor_threshold(0.85);
        let result = resolve(Some("World Bank"), &candidates, &options);
        assert_eq!(names(&result)[0], "World Bank");
        assert!(names(&result).contains(&"World Bank Group"));
        assert!(!names(&result).contains(&"Deutsche Bank"));
        for pair in result.matches().windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!(result.iter().all(|m| m.score >= result.threshold()));
    }

    #[test]
    fn test_multiple_ties_keep_input_order() {
        let candidates = ["Worldbank", "world bank", "World Bank"];
        let options = MatchOptions::default().with_allow_multiple(true);
        let result = resolve(Some("World Bank"), &candidates, &options);
        let positions: Vec<usize> = result.iter().map(|m| m.position).collect();
        assert_eq!(positions, vec![1, 2, 0]);
        assert_eq!(result.matches()[0].score, result.matches()[1].score);
    }

    #[test]
    fn test_dynamic_threshold_cuts_at_largest_gap() {
        let candidates = ["World Bank", "World Bank Group", "Worldline", "Ageas"];
        let options = MatchOptions::default()
            .with_allow_multiple(true)
            .with_dynamic_threshold(true)
            .with_floor_threshold(0.5);
        let result = resolve(Some("World Bank"), &candidates, &options);
        assert!(!result.is_empty());
        assert_eq!(result.best().unwrap().candidate, "World Bank");
        assert!(result.threshold() >= 0.5);
        assert!(result.iter().all(|m| m.score >= result.threshold()));
        assert!(!names(&result).contains(&"Ageas"));
    }

    #[test]
    fn test_dynamic_threshold_ignored_for_single_policy() {
        let candidates = ["World Bank", "World Bank Group"];
        let options = MatchOptions::default().with_dynamic_threshold(true);
        let result = resolve(Some("World Bank"), &candidates, &options);
        assert_eq!(result.len(), 1);
        assert_eq!(result.threshold(), 0.8);
    }

    #[test]
    fn test_acronym_map_links_abbreviation() {
        let candidates = ["International Monetary Fund", "Inter-American Development Bank"];
        let acronyms: AcronymMap = [("IMF", "International Monetary Fund")]
            .into_iter()
            .collect();
        let options = MatchOptions::default().with_acronym_map(Some(acronyms));
        let result = resolve(Some("IMF"), &candidates, &options);
        let best = result.best().unwrap();
        assert_eq!(best.candidate, "International Monetary Fund");
        assert_eq!(best.score, 1.0);
    }

    #[test]
    fn test_without_normalization_compares_raw() {
        let candidates = ["world bank", "World Bank"];
        let options = MatchOptions::default().with_normalize_names(false);
        let result = resolve(Some("World Bank"), &candidates, &options);
        assert_eq!(result.best().unwrap().position, 1);
        assert_eq!(result.best().unwrap().score, 1.0);
    }

    #[test]
    fn test_blank_query_never_matches() {
        let candidates = ["Ageas", "(unknown)", ""];
        let result = resolve(None, &candidates, &MatchOptions::default());
        assert!(result.is_empty());
        let result = resolve(Some("   "), &candidates, &MatchOptions::default());
        assert!(result.is_empty());
    }
}
