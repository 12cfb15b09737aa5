//! Approximate matching of entity names against a reference list.
//!
//! Institution, instrument and geography labels from external sources are
//! linked to canonical entries despite typos, abbreviations, punctuation,
//! diacritics and acronym variation.
//!
//! # Pipeline
//!
//! - **Normalization**: [`normalize_name`] lowercases, folds diacritics,
//!   strips punctuation and trailing annotations
//! - **Variants**: [`name_variants`] adds acronym-expanded and initials forms
//! - **Scoring**: [`similarity`] is Jaro-Winkler, best over all variant pairs
//! - **Selection**: [`resolve`] applies the single or multiple match policy,
//!   optionally with a cutoff from [`select_threshold`]
//! - **Columns**: [`match_column`] resolves each row independently
//!
//! Everything here is pure: no I/O, no shared mutable state. Candidate lists,
//! acronym maps and stop words are supplied by the caller.
//!
//! # Example
//!
//! ```
//! use namelink_match::{MatchOptions, resolve};
//!
//! let candidates = ["Ageas", "ABN AMRO Bank", "Intesa San Paolo"];
//! let result = resolve(Some("ABN AMRO"), &candidates, &MatchOptions::default());
//!
//! let best = result.best().unwrap();
//! assert_eq!(best.candidate, "ABN AMRO Bank");
//! assert!(best.score >= 0.8);
//! ```

#![deny(unsafe_code)]

mod dataset;
mod error;
mod normalize;
mod options;
mod resolve;
mod similarity;
mod threshold;
mod variants;

// === Error Types ===
pub use error::{MatchError, Result};

// === Normalization and Variants ===
pub use normalize::{StopWords, normalize_name};
pub use variants::{AcronymMap, VariantSet, name_variants};

// === Scoring ===
pub use similarity::similarity;
pub use threshold::select_threshold;

// === Resolution ===
pub use dataset::{ColumnSummary, match_column, match_column_parallel};
pub use options::{DEFAULT_FLOOR_THRESHOLD, MatchOptions};
pub use resolve::{MatchResult, PreparedCandidates, ScoredCandidate, resolve, resolve_prepared};
