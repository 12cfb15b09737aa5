//! Matching a whole column of queries.
//!
//! Rows are independent: candidate variants are prepared once and shared
//! read-only, and every row is resolved behind its own unwind boundary so a
//! fault in one row is recorded as "no match" instead of aborting the pass.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use rayon::prelude::*;
use serde::Serialize;

use crate::options::MatchOptions;
use crate::resolve::{MatchResult, PreparedCandidates, resolve_prepared};

/// Resolve every row against `candidates`, in input order.
///
/// Returns exactly one result per row.
pub fn match_column<Q, S>(
    rows: &[Option<Q>],
    candidates: &[S],
    options: &MatchOptions,
) -> Vec<MatchResult>
where
    Q: AsRef<str>,
    S: AsRef<str>,
{
    let started = Instant::now();
    let prepared = PreparedCandidates::new(candidates, options);
    let results: Vec<MatchResult> = rows
        .iter()
        .enumerate()
        .map(|(index, query)| {
            resolve_row(index, options.floor_threshold, || {
                resolve_prepared(query.as_ref().map(|q| q.as_ref()), &prepared, options)
            })
        })
        .collect();
    log_pass(&results, prepared.len(), started, false);
    results
}

/// Same as [`match_column`], with rows spread over the rayon thread pool.
///
/// Output order and content are identical to the sequential version.
pub fn match_column_parallel<Q, S>(
    rows: &[Option<Q>],
    candidates: &[S],
    options: &MatchOptions,
) -> Vec<MatchResult>
where
    Q: AsRef<str> + Sync,
    S: AsRef<str>,
{
    let started = Instant::now();
    let prepared = PreparedCandidates::new(candidates, options);
    let results: Vec<MatchResult> = rows
        .par_iter()
        .enumerate()
        .map(|(index, query)| {
            resolve_row(index, options.floor_threshold, || {
                resolve_prepared(query.as_ref().map(|q| q.as_ref()), &prepared, options)
            })
        })
        .collect();
    log_pass(&results, prepared.len(), started, true);
    results
}

/// Run one row's resolution, turning a panic into an empty result.
fn resolve_row<F>(index: usize, floor: f64, resolve: F) -> MatchResult
where
    F: FnOnce() -> MatchResult,
{
    match panic::catch_unwind(AssertUnwindSafe(resolve)) {
        Ok(result) => {
            tracing::trace!(row = index, matches = result.len(), "resolved row");
            result
        }
        Err(payload) => {
            tracing::warn!(
                row = index,
                reason = %panic_reason(payload.as_ref()),
                "row resolution failed, recorded as no match"
            );
            MatchResult::empty(floor)
        }
    }
}

fn panic_reason(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

fn log_pass(results: &[MatchResult], candidates: usize, started: Instant, parallel: bool) {
    let summary = ColumnSummary::from_results(results);
    tracing::debug!(
        rows = summary.rows,
        candidates,
        matched = summary.matched,
        parallel,
        elapsed_ms = started.elapsed().as_millis() as u64,
        "column pass complete"
    );
}

/// Aggregate counts over a column pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColumnSummary {
    /// Rows processed.
    pub rows: usize,
    /// Rows with at least one match.
    pub matched: usize,
    /// Rows with no match.
    pub unmatched: usize,
    /// Rows with more than one match.
    pub multi_matched: usize,
    /// Mean of the best score over matched rows.
    pub mean_best_score: Option<f64>,
}

impl ColumnSummary {
    pub fn from_results(results: &[MatchResult]) -> Self {
        let best_scores: Vec<f64> = results
            .iter()
            .filter_map(|result| result.best().map(|best| best.score))
            .collect();
        let mean_best_score = if best_scores.is_empty() {
            None
        } else {
            Some(best_scores.iter().sum::<f64>() / best_scores.len() as f64)
        };

        Self {
            rows: results.len(),
            matched: best_scores.len(),
            unmatched: results.len() - best_scores.len(),
            multi_matched: results.iter().filter(|result| result.len() > 1).count(),
            mean_best_score,
        }
    }

    /// Share of rows with a match, in `[0, 1]`.
    pub fn match_rate(&self) -> f64 {
        if self.rows == 0 {
            0.0
        } else {
            self.matched as f64 / self.rows as f64
        }
    }
}
