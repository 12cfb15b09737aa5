//! CLI argument definitions for the name matcher.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "namelink",
    version,
    about = "Link free-text entity names to a canonical reference list",
    long_about = "Link institution, instrument and geography names from external \
                  sources to canonical reference entries.\n\n\
                  Names are normalized, expanded with acronym and initials variants, \
                  and scored with Jaro-Winkler similarity."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Match a column of names against a reference table.
    Match(MatchArgs),

    /// Show the normalized form and variants of names.
    Normalize(NormalizeArgs),

    /// Check a CSV file against a schema contract.
    Validate(ValidateArgs),
}

#[derive(Parser)]
pub struct MatchArgs {
    /// CSV file holding the names to match.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Column of INPUT with the names to match.
    #[arg(long = "column", value_name = "COL")]
    pub column: String,

    /// Reference table holding the canonical names.
    #[arg(long = "reference-table", value_name = "TABLE")]
    pub reference_table: String,

    /// Column of the reference table with the canonical names.
    #[arg(long = "reference-column", value_name = "COL")]
    pub reference_column: String,

    /// Directory of reference tables, one `<table>.csv` each
    /// (default: directory of INPUT).
    #[arg(long = "reference-dir", value_name = "DIR")]
    pub reference_dir: Option<PathBuf>,

    /// TOML configuration file with `[matching]` and `[reference]` sections.
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Return every candidate above the threshold, not just the best.
    #[arg(long = "multiple")]
    pub multiple: bool,

    /// Infer the threshold from the score distribution (with --multiple).
    #[arg(long = "dynamic-threshold")]
    pub dynamic_threshold: bool,

    /// Compare raw strings without normalization or variants.
    #[arg(long = "no-normalize")]
    pub no_normalize: bool,

    /// Minimum similarity for a match, in [0, 1].
    #[arg(long = "floor", value_name = "F")]
    pub floor: Option<f64>,

    #[command(flatten)]
    pub reference: ReferenceArgs,

    /// Resolve rows on all cores.
    #[arg(long = "parallel")]
    pub parallel: bool,

    /// Write per-row results to this CSV file.
    #[arg(long = "output", value_name = "CSV")]
    pub output: Option<PathBuf>,
}

/// Reference vocabularies shared by `match` and `normalize`.
#[derive(Parser, Default)]
pub struct ReferenceArgs {
    /// Acronym expansions, a two-column CSV (acronym, expansion).
    #[arg(long = "acronyms", value_name = "CSV")]
    pub acronyms: Option<PathBuf>,

    /// Stop words, one per line.
    #[arg(long = "stop-words", value_name = "FILE")]
    pub stop_words: Option<PathBuf>,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Names to normalize.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,

    #[command(flatten)]
    pub reference: ReferenceArgs,
}

#[derive(Parser)]
pub struct ValidateArgs {
    /// CSV file to check.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Schema contract (TOML).
    #[arg(long = "contract", value_name = "TOML")]
    pub contract: PathBuf,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
