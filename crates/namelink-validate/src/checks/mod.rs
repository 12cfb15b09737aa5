//! Validation check modules.
//!
//! Each module performs one kind of check and returns the issues it finds.

mod allowed;
mod datatype;
mod presence;
mod required;

use polars::prelude::{DataFrame, DataType};

use crate::contract::SchemaContract;
use crate::report::ValidationReport;

/// Maximum number of example values carried by an issue.
pub(crate) const MAX_SAMPLES: usize = 5;

/// Run every check of `contract` against `df`.
pub fn validate_frame(contract: &SchemaContract, df: &DataFrame) -> ValidationReport {
    let mut report = ValidationReport::new();

    // 1. Column set and order
    report.extend(presence::check(contract, df));

    // 2. Required columns are populated
    report.extend(required::check(contract, df));

    // 3. Values parse as the declared type
    report.extend(datatype::check(contract, df));

    // 4. Values are in the allowed list
    report.extend(allowed::check(contract, df));

    tracing::debug!(
        columns = df.width(),
        rows = df.height(),
        errors = report.error_count(),
        warnings = report.warning_count(),
        "validated dataset"
    );
    report
}

/// Cells of a column rendered as text, `None` for nulls.
///
/// Returns `None` when the column is absent; presence is reported separately.
fn text_values(df: &DataFrame, column: &str) -> Option<Vec<Option<String>>> {
    let col = df.column(column).ok()?;
    let text = match col.cast(&DataType::String) {
        Ok(text) => text,
        Err(err) => {
            tracing::warn!(column, error = %err, "column cannot be rendered as text");
            return None;
        }
    };
    let chunked = text.str().ok()?;
    Some(
        chunked
            .iter()
            .map(|value| value.map(str::to_string))
            .collect(),
    )
}

/// Non-blank cells, trimmed.
fn populated(values: &[Option<String>]) -> impl Iterator<Item = &str> {
    values
        .iter()
        .filter_map(|value| value.as_deref())
        .map(str::trim)
        .filter(|value| !value.is_empty())
}
