//! Values must parse as the declared column type.
//!
//! Blank cells are not type errors; population is checked separately.

use chrono::NaiveDate;
use polars::prelude::DataFrame;

use super::{MAX_SAMPLES, populated, text_values};
use crate::contract::{ColumnType, SchemaContract};
use crate::issue::Issue;

pub(super) fn check(contract: &SchemaContract, df: &DataFrame) -> Vec<Issue> {
    let mut issues = Vec::new();

    for spec in &contract.columns {
        if spec.column_type == ColumnType::Text {
            continue;
        }
        let Some(values) = text_values(df, &spec.name) else {
            continue;
        };

        let mut invalid_count = 0u64;
        let mut samples = Vec::new();
        for value in populated(&values) {
            if !parses_as(spec.column_type, value) {
                invalid_count += 1;
                if samples.len() < MAX_SAMPLES {
                    samples.push(value.to_string());
                }
            }
        }

        if invalid_count > 0 {
            issues.push(Issue::TypeMismatch {
                column: spec.name.clone(),
                expected: spec.column_type,
                invalid_count,
                samples,
            });
        }
    }

    issues
}

fn parses_as(column_type: ColumnType, value: &str) -> bool {
    match column_type {
        ColumnType::Text => true,
        ColumnType::Integer => value.parse::<i64>().is_ok(),
        ColumnType::Float => value.parse::<f64>().is_ok_and(f64::is_finite),
        ColumnType::Boolean => matches!(
            value.to_ascii_lowercase().as_str(),
            "true" | "false" | "1" | "0" | "yes" | "no"
        ),
        ColumnType::Date => is_iso_date(value),
    }
}

/// Strict `YYYY-MM-DD` with a real calendar date.
fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract::ColumnSpec;
    use polars::prelude::*;

    #[test]
    fn test_parses_as() {
        assert!(parses_as(ColumnType::Integer, "-42"));
        assert!(!parses_as(ColumnType::Integer, "4.2"));
        assert!(parses_as(ColumnType::Float, "4.2"));
        assert!(parses_as(ColumnType::Float, "1e3"));
        assert!(!parses_as(ColumnType::Float, "NaN"));
        assert!(!parses_as(ColumnType::Float, "1,5"));
        assert!(parses_as(ColumnType::Boolean, "Yes"));
        assert!(parses_as(ColumnType::Boolean, "FALSE"));
        assert!(!parses_as(ColumnType::Boolean, "y"));
        assert!(parses_as(ColumnType::Date, "2024-02-29"));
        assert!(!parses_as(ColumnType::Date, "2023-02-29"));
        assert!(!parses_as(ColumnType::Date, "2024-2-9"));
        assert!(!parses_as(ColumnType::Date, "29/02/2024"));
    }

    #[test]
    fn test_collects_samples() {
        let contract =
            SchemaContract::new(vec![ColumnSpec::new("amount", ColumnType::Float)]).unwrap();
        let values: Vec<Option<&str>> = vec![
            Some("1.5"),
            Some("a"),
            None,
            Some("b"),
            Some(""),
            Some("c"),
            Some("d"),
            Some("e"),
            Some("f"),
        ];
        let df = DataFrame::new(vec![Series::new("amount".into(), values).into_column()]).unwrap();

        let issues = check(&contract, &df);
        assert_eq!(issues.len(), 1);
        let Issue::TypeMismatch {
            invalid_count,
            samples,
            ..
        } = &issues[0]
        else {
            panic!("expected a type mismatch, got {:?}", issues[0]);
        };
        assert_eq!(*invalid_count, 6);
        assert_eq!(samples, &["a", "b", "c", "d", "e"]);
    }

    #[test]
    fn test_native_numeric_column_passes() {
        let contract =
            SchemaContract::new(vec![ColumnSpec::new("rank", ColumnType::Integer)]).unwrap();
        let df = DataFrame::new(vec![Series::new("rank".into(), vec![1i64, 2, 3]).into_column()])
            .unwrap();
        assert!(check(&contract, &df).is_empty());
    }
}
