//! Tabular export of match results.

use polars::prelude::*;

use namelink_match::MatchResult;

use crate::error::{IngestError, Result};

pub const QUERY_COLUMN: &str = "query";
pub const MATCHED_NAME_COLUMN: &str = "matched_name";
pub const MATCH_SCORE_COLUMN: &str = "match_score";
pub const MATCH_COUNT_COLUMN: &str = "match_count";

const SEPARATOR: &str = "; ";

/// Build one output row per query.
///
/// Multiple matches are joined with `"; "` in rank order, scores rendered
/// with four decimals. Rows without a match have null name and score.
pub fn results_frame<Q: AsRef<str>>(
    queries: &[Option<Q>],
    results: &[MatchResult],
) -> Result<DataFrame> {
    if queries.len() != results.len() {
        return Err(IngestError::LengthMismatch {
            expected: queries.len(),
            actual: results.len(),
        });
    }

    let query_values: Vec<Option<&str>> = queries
        .iter()
        .map(|query| query.as_ref().map(|q| q.as_ref()))
        .collect();
    let mut names: Vec<Option<String>> = Vec::with_capacity(results.len());
    let mut scores: Vec<Option<String>> = Vec::with_capacity(results.len());
    let mut counts: Vec<u32> = Vec::with_capacity(results.len());

    for result in results {
        if result.is_empty() {
            names.push(None);
            scores.push(None);
        } else {
            let joined_names: Vec<&str> = result.iter().map(|m| m.candidate.as_str()).collect();
            let joined_scores: Vec<String> =
                result.iter().map(|m| format!("{:.4}", m.score)).collect();
            names.push(Some(joined_names.join(SEPARATOR)));
            scores.push(Some(joined_scores.join(SEPARATOR)));
        }
        counts.push(u32::try_from(result.len()).unwrap_or(u32::MAX));
    }

    let df = DataFrame::new(vec![
        Series::new(QUERY_COLUMN.into(), query_values).into_column(),
        Series::new(MATCHED_NAME_COLUMN.into(), names).into_column(),
        Series::new(MATCH_SCORE_COLUMN.into(), scores).into_column(),
        Series::new(MATCH_COUNT_COLUMN.into(), counts).into_column(),
    ])?;
    Ok(df)
}
