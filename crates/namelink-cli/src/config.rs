//! Run configuration for the `match` and `normalize` commands.
//!
//! Values are layered: built-in defaults, then an optional TOML file, then
//! command-line flags.
//!
//! ```toml
//! [matching]
//! allow_multiple = true
//! floor_threshold = 0.75
//!
//! [reference]
//! directory = "reference"
//! acronyms = "reference/acronyms.csv"
//! stop_words = "reference/stop_words.txt"
//! ```
//!
//! Relative paths in the file are resolved against the file's directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use namelink_ingest::{load_acronym_map, load_stop_words};
use namelink_match::MatchOptions;
use serde::Deserialize;

/// Parsed configuration file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub matching: MatchOptions,
    pub reference: ReferenceConfig,
}

/// Where reference data lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReferenceConfig {
    /// Directory of `<table>.csv` reference tables.
    pub directory: Option<PathBuf>,
    /// Acronym expansion CSV.
    pub acronyms: Option<PathBuf>,
    /// Stop word list.
    pub stop_words: Option<PathBuf>,
}

/// Values given on the command line. `None`/`false` leaves the file value.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub allow_multiple: bool,
    pub dynamic_threshold: bool,
    pub no_normalize: bool,
    pub floor_threshold: Option<f64>,
    pub reference_dir: Option<PathBuf>,
    pub acronyms: Option<PathBuf>,
    pub stop_words: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("parse configuration")?;
        Ok(config)
    }

    /// Load a configuration file, resolving its relative paths.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read configuration {}", path.display()))?;
        let mut config = Self::from_toml_str(&content)
            .with_context(|| format!("load configuration {}", path.display()))?;
        if let Some(base) = path.parent() {
            config.reference.resolve_relative_to(base);
        }
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Load `path` if given, otherwise start from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    /// Apply command-line values on top of this configuration.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if overrides.allow_multiple {
            self.matching.allow_multiple = true;
        }
        if overrides.dynamic_threshold {
            self.matching.dynamic_threshold = true;
        }
        if overrides.no_normalize {
            self.matching.normalize_names = false;
        }
        if let Some(floor) = overrides.floor_threshold {
            self.matching.floor_threshold = floor;
        }
        if overrides.reference_dir.is_some() {
            self.reference.directory = overrides.reference_dir;
        }
        if overrides.acronyms.is_some() {
            self.reference.acronyms = overrides.acronyms;
        }
        if overrides.stop_words.is_some() {
            self.reference.stop_words = overrides.stop_words;
        }
        self
    }

    /// Final match options: file reference data merged in, then validated.
    ///
    /// Entries loaded from files are added to any given inline in
    /// `[matching]`; a file entry wins over an inline one for the same acronym.
    pub fn match_options(&self) -> Result<MatchOptions> {
        let mut options = self.matching.clone();

        if let Some(path) = &self.reference.acronyms {
            let loaded = load_acronym_map(path)
                .with_context(|| format!("load acronyms {}", path.display()))?;
            let mut acronyms = options.acronym_map.take().unwrap_or_default();
            for (acronym, expansion) in loaded.iter() {
                acronyms.insert(acronym, expansion);
            }
            options.acronym_map = Some(acronyms);
        }

        if let Some(path) = &self.reference.stop_words {
            let loaded = load_stop_words(path)
                .with_context(|| format!("load stop words {}", path.display()))?;
            let mut stop_words = options.stop_words.take().unwrap_or_default();
            for word in loaded.iter() {
                stop_words.insert(word);
            }
            options.stop_words = Some(stop_words);
        }

        options.validate().context("invalid match options")?;
        Ok(options)
    }
}

impl ReferenceConfig {
    fn resolve_relative_to(&mut self, base: &Path) {
        for path in [&mut self.directory, &mut self.acronyms, &mut self.stop_words]
            .into_iter()
            .flatten()
        {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}
