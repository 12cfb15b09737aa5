//! Match policy configuration.

use serde::{Deserialize, Serialize};

use crate::error::{MatchError, Result};
use crate::normalize::StopWords;
use crate::variants::AcronymMap;

/// Default minimum similarity for a pairing to count as a match.
pub const DEFAULT_FLOOR_THRESHOLD: f64 = 0.8;

/// Options controlling how a query is resolved against candidates.
///
/// One value is built per run and passed explicitly to the resolver and the
/// dataset matcher. Every field has a default, so a partial TOML table is
/// enough to override just what differs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchOptions {
    /// Normalize and expand names before scoring. When false, raw strings
    /// are compared directly.
    pub normalize_names: bool,

    /// Return every candidate above the threshold instead of the single best.
    pub allow_multiple: bool,

    /// Infer the cutoff from the score distribution. Only consulted when
    /// `allow_multiple` is set.
    pub dynamic_threshold: bool,

    /// Minimum similarity for any match.
    pub floor_threshold: f64,

    /// Acronym expansions used to build variants.
    pub acronym_map: Option<AcronymMap>,

    /// Tokens removed during normalization.
    pub stop_words: Option<StopWords>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            normalize_names: true,
            allow_multiple: false,
            dynamic_threshold: false,
            floor_threshold: DEFAULT_FLOOR_THRESHOLD,
            acronym_map: None,
            stop_words: None,
        }
    }
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let options: Self =
            toml::from_str(content).map_err(|source| MatchError::Config { source })?;
        options.validate()?;
        Ok(options)
    }

    /// Check that the floor threshold is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.floor_threshold.is_finite() || !(0.0..=1.0).contains(&self.floor_threshold) {
            return Err(MatchError::InvalidFloorThreshold {
                value: self.floor_threshold,
            });
        }
        Ok(())
    }

    #[must_use]
    pub fn with_normalize_names(mut self, enable: bool) -> Self {
        self.normalize_names = enable;
        self
    }

    #[must_use]
    pub fn with_allow_multiple(mut self, enable: bool) -> Self {
        self.allow_multiple = enable;
        self
    }

    #[must_use]
    pub fn with_dynamic_threshold(mut self, enable: bool) -> Self {
        self.dynamic_threshold = enable;
        self
    }

    #[must_use]
    pub fn with_floor_threshold(mut self, floor: f64) -> Self {
        self.floor_threshold = floor;
        self
    }

    #[must_use]
    pub fn with_acronym_map(mut self, acronyms: Option<AcronymMap>) -> Self {
        self.acronym_map = acronyms;
        self
    }

    #[must_use]
    pub fn with_stop_words(mut self, stop_words: Option<StopWords>) -> Self {
        self.stop_words = stop_words;
        self
    }
}
