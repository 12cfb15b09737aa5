//! Values must come from the declared list.

use polars::prelude::DataFrame;

use super::{MAX_SAMPLES, populated, text_values};
use crate::contract::SchemaContract;
use crate::issue::Issue;

pub(super) fn check(contract: &SchemaContract, df: &DataFrame) -> Vec<Issue> {
    let mut issues = Vec::new();

    for spec in &contract.columns {
        let Some(allowed) = spec.allowed_values.as_ref() else {
            continue;
        };
        let Some(values) = text_values(df, &spec.name) else {
            continue;
        };

        let mut invalid_count = 0u64;
        let mut invalid_values: Vec<String> = Vec::new();
        for value in populated(&values) {
            if allowed.iter().any(|a| a == value) {
                continue;
            }
            invalid_count += 1;
            if invalid_values.len() < MAX_SAMPLES && !invalid_values.iter().any(|v| v == value) {
                invalid_values.push(value.to_string());
            }
        }

        if invalid_count > 0 {
            issues.push(Issue::ValueNotAllowed {
                column: spec.name.clone(),
                invalid_count,
                invalid_values,
            });
        }
    }

    issues
}
