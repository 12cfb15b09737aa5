use std::path::PathBuf;
use std::time::Duration;

use namelink_match::ColumnSummary;

#[derive(Debug)]
pub struct MatchOutcome {
    pub input: PathBuf,
    pub column: String,
    pub reference: String,
    pub candidates: usize,
    pub threshold: f64,
    pub summary: ColumnSummary,
    pub output: Option<PathBuf>,
    pub elapsed: Duration,
}

#[derive(Debug)]
pub struct NormalizedName {
    pub raw: String,
    pub normalized: String,
    pub variants: Vec<String>,
}
