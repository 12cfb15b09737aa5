//! Column set and column order.

use std::collections::HashSet;

use polars::prelude::DataFrame;

use crate::contract::SchemaContract;
use crate::issue::Issue;

/// Report missing and undeclared columns, and the first out-of-order column.
pub(super) fn check(contract: &SchemaContract, df: &DataFrame) -> Vec<Issue> {
    let actual: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect();
    let declared: HashSet<&str> = contract.column_names().collect();
    let present: HashSet<&str> = actual.iter().map(String::as_str).collect();

    let mut issues = Vec::new();

    for name in contract.column_names() {
        if !present.contains(name) {
            issues.push(Issue::MissingColumn {
                column: name.to_string(),
            });
        }
    }

    for name in &actual {
        if !declared.contains(name.as_str()) {
            issues.push(Issue::UndeclaredColumn {
                column: name.clone(),
            });
        }
    }

    // Compare order over the columns both sides share.
    let expected_order: Vec<&str> = contract
        .column_names()
        .filter(|name| present.contains(name))
        .collect();
    let actual_order: Vec<&str> = actual
        .iter()
        .map(String::as_str)
        .filter(|name| declared.contains(name))
        .collect();
    if let Some((position, column)) = expected_order
        .iter()
        .zip(&actual_order)
        .position(|(expected, found)| expected != found)
        .map(|position| (position, expected_order[position]))
    {
        let actual_position = actual_order
            .iter()
            .position(|name| *name == column)
            .unwrap_or(position);
        issues.push(Issue::ColumnOrder {
            column: column.to_string(),
            expected_position: position,
            actual_position,
        });
    }

    issues
}
