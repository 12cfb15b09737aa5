//! Column lookup and value extraction.

use std::collections::HashSet;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Find a column by name, falling back to a case-insensitive match.
pub fn resolve_column_name(df: &DataFrame, column: &str) -> Result<String> {
    let names: Vec<String> = df
        .get_columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();

    if let Some(exact) = names.iter().find(|name| name.as_str() == column) {
        return Ok(exact.clone());
    }
    names
        .into_iter()
        .find(|name| name.eq_ignore_ascii_case(column))
        .ok_or_else(|| IngestError::ColumnNotFound {
            column: column.to_string(),
        })
}

/// Every cell of a column as text. Nulls stay `None`.
pub fn column_values(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let name = resolve_column_name(df, column)?;
    let col = df.column(&name)?;
    let series = col.cast(&DataType::String)?.take_materialized_series();
    let chunked = series.str()?;
    Ok(chunked.iter().map(|value| value.map(str::to_string)).collect())
}

/// Distinct non-blank values of a column, trimmed, in first-seen order.
pub fn distinct_values(df: &DataFrame, column: &str) -> Result<Vec<String>> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();
    for value in column_values(df, column)?.into_iter().flatten() {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_string()) {
            values.push(trimmed.to_string());
        }
    }
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        let names = Series::new(
            "Name".into(),
            vec![
                Some("Ageas"),
                None,
                Some(" ABN AMRO Bank "),
                Some("Ageas"),
                Some("  "),
                Some("Intesa San Paolo"),
            ],
        );
        DataFrame::new(vec![names.into_column()]).unwrap()
    }

    #[test]
    fn test_column_values_keep_nulls() {
        let values = column_values(&frame(), "Name").unwrap();
        assert_eq!(values.len(), 6);
        assert_eq!(values[0].as_deref(), Some("Ageas"));
        assert_eq!(values[1], None);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(resolve_column_name(&frame(), "name").unwrap(), "Name");
        assert!(matches!(
            resolve_column_name(&frame(), "label"),
            Err(IngestError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_distinct_values_preserve_order() {
        let values = distinct_values(&frame(), "Name").unwrap();
        assert_eq!(values, vec!["Ageas", "ABN AMRO Bank", "Intesa San Paolo"]);
    }
}
