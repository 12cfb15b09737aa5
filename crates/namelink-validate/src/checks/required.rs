//! Required columns must be fully populated.

use polars::prelude::DataFrame;

use super::text_values;
use crate::contract::SchemaContract;
use crate::issue::Issue;

pub(super) fn check(contract: &SchemaContract, df: &DataFrame) -> Vec<Issue> {
    let mut issues = Vec::new();

    for spec in contract.columns.iter().filter(|spec| spec.required) {
        let Some(values) = text_values(df, &spec.name) else {
            continue;
        };
        let empty_count = values
            .iter()
            .filter(|value| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .count() as u64;
        if empty_count > 0 {
            issues.push(Issue::RequiredEmpty {
                column: spec.name.clone(),
                empty_count,
            });
        }
    }

    issues
}
