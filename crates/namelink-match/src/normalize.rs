//! Name normalization.
//!
//! Query and candidate names go through the same cleaning transform so that
//! case, punctuation, diacritics, spacing and trailing parenthetical notes do
//! not affect similarity.

use std::collections::BTreeSet;

use deunicode::deunicode;
use serde::{Deserialize, Serialize};

/// Marker that starts a trailing annotation, e.g. `"World Bank (WB)"`.
const ANNOTATION_MARKER: &str = " (";

/// Tokens elided from normalized names.
///
/// Matching is exact and case-sensitive against the already lower-cased
/// tokens, so entries are expected in lower case.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct StopWords {
    words: BTreeSet<String>,
}

impl StopWords {
    /// Create an empty stop-word set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `token` is a stop word.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Add a token.
    pub fn insert(&mut self, token: impl Into<String>) {
        self.words.insert(token.into());
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for StopWords {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Vec<String>> for StopWords {
    fn from(words: Vec<String>) -> Self {
        words.into_iter().collect()
    }
}

impl From<StopWords> for Vec<String> {
    fn from(stop_words: StopWords) -> Self {
        stop_words.words.into_iter().collect()
    }
}

/// Normalize a raw entity name.
///
/// Steps, in order:
/// - absent input becomes the empty string
/// - trim and lowercase
/// - cut at the first `" ("` to drop trailing annotations
/// - fold non-ASCII characters to their closest ASCII spelling
/// - drop punctuation (anything that is not an ASCII letter, digit or space)
/// - collapse whitespace runs to single spaces
/// - remove stop-word tokens, if a set is given
///
/// The result is lowercase ASCII, so normalizing it again yields itself.
pub fn normalize_name(raw: Option<&str>, stop_words: Option<&StopWords>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    let lowered = raw.trim().to_lowercase();
    let head = match lowered.find(ANNOTATION_MARKER) {
        Some(idx) => &lowered[..idx],
        None => lowered.as_str(),
    };

    // Transliteration can emit uppercase letters and symbols (e.g. "Æ" -> "AE"),
    // so lowercase and strip after folding.
    let folded = deunicode(head).to_ascii_lowercase();
    let cleaned: String = folded
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_ascii_whitespace())
        .collect();

    cleaned
        .split_ascii_whitespace()
        .filter(|token| stop_words.is_none_or(|words| !words.contains(token)))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn norm(raw: &str) -> String {
        normalize_name(Some(raw), None)
    }

    #[test]
    fn test_absent_and_blank_input() {
        assert_eq!(normalize_name(None, None), "");
        assert_eq!(norm(""), "");
        assert_eq!(norm("   \t "), "");
    }

    #[test]
    fn test_drops_trailing_annotation() {
        assert_eq!(norm("World Bank (WB)"), "world bank");
        assert_eq!(norm("Ageas (formerly Fortis)"), "ageas");
    }

    #[test]
    fn test_parenthesis_without_space_is_kept_as_text() {
        assert_eq!(norm("Fund(LP)"), "fundlp");
    }

    #[test]
    fn test_removes_punctuation_and_collapses_spaces() {
        assert_eq!(norm("  Banco   Santander,\tS.A. "), "banco santander sa");
        assert_eq!(norm("A.B.C. & Co."), "abc co");
        assert_eq!(norm("ABN-AMRO"), "abnamro");
    }

    #[test]
    fn test_folds_diacritics() {
        assert_eq!(norm("Société Générale"), "societe generale");
        assert_eq!(norm("Zürich Versicherung"), "zurich versicherung");
        assert_eq!(norm("Crédit Agricole"), "credit agricole");
    }

    #[test]
    fn test_stop_words_are_removed() {
        let stop_words: StopWords = ["the", "of"].into_iter().collect();
        assert_eq!(
            normalize_name(Some("The Bank of Italy"), Some(&stop_words)),
            "bank italy"
        );
    }

    #[test]
    fn test_stop_words_are_case_sensitive() {
        let stop_words: StopWords = ["The"].into_iter().collect();
        assert_eq!(
            normalize_name(Some("The Bank"), Some(&stop_words)),
            "the bank"
        );
    }

    #[test]
    fn test_only_stop_words_yields_empty() {
        let stop_words: StopWords = ["the"].into_iter().collect();
        assert_eq!(normalize_name(Some("The"), Some(&stop_words)), "");
    }

    #[test]
    fn test_idempotent_on_samples() {
        for raw in [
            "World Bank (WB)",
            "Société Générale S.A.",
            "  ÆON  Group ",
            "Intesa   San Paolo",
            "Ω-Omega — Holdings",
        ] {
            let once = norm(raw);
            assert_eq!(norm(&once), once, "not idempotent for {raw:?}");
        }
    }
}
