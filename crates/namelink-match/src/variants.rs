//! Alternate spellings of a normalized name.
//!
//! Abbreviation mismatches ("BNP" vs "Banque Nationale de Paris") are the main
//! source of missed links, so each name is expanded into a small set of
//! variants before scoring: the literal normalized form, an acronym-expanded
//! form, and an initials form.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::normalize::{StopWords, normalize_name};

/// Mapping from an uppercase token to its expansion.
///
/// Keys are upper-cased on insertion, so `"wb"` and `"WB"` address the same
/// entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct AcronymMap {
    entries: BTreeMap<String, String>,
}

impl AcronymMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an expansion, returning the one it replaced.
    pub fn insert(
        &mut self,
        acronym: impl AsRef<str>,
        expansion: impl Into<String>,
    ) -> Option<String> {
        self.entries
            .insert(acronym.as_ref().trim().to_uppercase(), expansion.into())
    }

    /// Look up a token, case-insensitively.
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries.get(&token.to_uppercase()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: AsRef<str>, V: Into<String>> FromIterator<(K, V)> for AcronymMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (acronym, expansion) in iter {
            map.insert(acronym, expansion);
        }
        map
    }
}

impl From<BTreeMap<String, String>> for AcronymMap {
    fn from(entries: BTreeMap<String, String>) -> Self {
        entries.into_iter().collect()
    }
}

impl From<AcronymMap> for BTreeMap<String, String> {
    fn from(map: AcronymMap) -> Self {
        map.entries
    }
}

/// Set of alternate forms of one name.
///
/// Always holds the base (literal normalized) form. Iteration is in sorted
/// order so scoring is deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    base: String,
    variants: BTreeSet<String>,
}

impl VariantSet {
    /// A set holding only `base`.
    pub fn literal(base: impl Into<String>) -> Self {
        let base = base.into();
        let mut variants = BTreeSet::new();
        variants.insert(base.clone());
        Self { base, variants }
    }

    /// The literal form every other variant derives from.
    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.variants.contains(variant)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Never true: the base form is always present.
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.variants.iter().map(String::as_str)
    }

    fn insert(&mut self, variant: String) {
        if !variant.is_empty() {
            self.variants.insert(variant);
        }
    }
}

/// Compute the variant set of a raw name.
///
/// - the normalized name is always included
/// - with an acronym map, each token is replaced by its expansion (tokens
///   without one are kept), the result re-normalized and added when it
///   differs from the base form
/// - the initials of the base form are added when non-empty
pub fn name_variants(
    raw: Option<&str>,
    stop_words: Option<&StopWords>,
    acronyms: Option<&AcronymMap>,
) -> VariantSet {
    let base = normalize_name(raw, stop_words);
    let mut set = VariantSet::literal(base.clone());

    if let Some(acronyms) = acronyms {
        let expanded = expand_acronyms(&base, acronyms);
        let expanded = normalize_name(Some(&expanded), stop_words);
        if expanded != base {
            set.insert(expanded);
        }
    }

    set.insert(initials(&base));
    set
}

fn expand_acronyms(base: &str, acronyms: &AcronymMap) -> String {
    base.split_whitespace()
        .map(|token| acronyms.get(token).unwrap_or(token))
        .collect::<Vec<_>>()
        .join(" ")
}

fn initials(base: &str) -> String {
    base.split_whitespace()
        .filter_map(|token| token.chars().next())
        .collect()
}
