//! Validation issue types.
//!
//! Each variant carries only the data its message needs.

use serde::{Deserialize, Serialize};

use crate::contract::ColumnType;

/// Issue severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Severity {
    /// Dataset is rejected
    Error,
    /// Should review
    Warning,
}

impl Severity {
    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Warning => "Warning",
        }
    }
}

/// Validation issue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Issue {
    // Presence checks
    /// Declared column is missing from the dataset
    MissingColumn { column: String },
    /// Dataset has a column the contract does not declare
    UndeclaredColumn { column: String },
    /// Declared columns appear in a different order
    ColumnOrder {
        column: String,
        expected_position: usize,
        actual_position: usize,
    },

    // Population checks
    /// Required column has null or blank cells
    RequiredEmpty { column: String, empty_count: u64 },

    // Type checks
    /// Non-blank values that do not parse as the declared type
    TypeMismatch {
        column: String,
        expected: ColumnType,
        invalid_count: u64,
        samples: Vec<String>,
    },

    // Domain checks
    /// Values outside the allowed list
    ValueNotAllowed {
        column: String,
        invalid_count: u64,
        invalid_values: Vec<String>,
    },
}

impl Issue {
    /// Column the issue is about.
    pub fn column(&self) -> &str {
        match self {
            Issue::MissingColumn { column }
            | Issue::UndeclaredColumn { column }
            | Issue::ColumnOrder { column, .. }
            | Issue::RequiredEmpty { column, .. }
            | Issue::TypeMismatch { column, .. }
            | Issue::ValueNotAllowed { column, .. } => column,
        }
    }

    /// Number of offending cells, for cell-level issues.
    pub fn count(&self) -> Option<u64> {
        match self {
            Issue::MissingColumn { .. }
            | Issue::UndeclaredColumn { .. }
            | Issue::ColumnOrder { .. } => None,
            Issue::RequiredEmpty { empty_count, .. } => Some(*empty_count),
            Issue::TypeMismatch { invalid_count, .. }
            | Issue::ValueNotAllowed { invalid_count, .. } => Some(*invalid_count),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Issue::ColumnOrder { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Issue::MissingColumn { column } => format!("Declared column {column} is missing"),

            Issue::UndeclaredColumn { column } => {
                format!("Column {column} is not declared in the contract")
            }

            Issue::ColumnOrder {
                column,
                expected_position,
                actual_position,
            } => format!(
                "Column {column} is at position {} but declared at position {}",
                actual_position + 1,
                expected_position + 1
            ),

            Issue::RequiredEmpty {
                column,
                empty_count,
            } => format!("Required column {column} has {empty_count} empty values"),

            Issue::TypeMismatch {
                column,
                expected,
                invalid_count,
                samples,
            } => format!(
                "Column {column} has {invalid_count} values that are not {expected}{}",
                sample_suffix(samples)
            ),

            Issue::ValueNotAllowed {
                column,
                invalid_count,
                invalid_values,
            } => {
                let values = if invalid_values.is_empty() {
                    String::new()
                } else {
                    format!(": {}", invalid_values.join(", "))
                };
                format!("Column {column} has {invalid_count} values not in the allowed list{values}")
            }
        }
    }
}

fn sample_suffix(samples: &[String]) -> String {
    if samples.is_empty() {
        String::new()
    } else {
        format!(" (e.g., {})", samples.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    #[test]
    fn test_messages() {
        assert_snapshot!(
            Issue::MissingColumn { column: "lei".into() }.message(),
            @"Declared column lei is missing"
        );
        assert_snapshot!(
            Issue::ColumnOrder {
                column: "amount".into(),
                expected_position: 1,
                actual_position: 2,
            }
            .message(),
            @"Column amount is at position 3 but declared at position 2"
        );
        assert_snapshot!(
            Issue::TypeMismatch {
                column: "amount".into(),
                expected: ColumnType::Float,
                invalid_count: 2,
                samples: vec!["n/a".into(), "1,5".into()],
            }
            .message(),
            @"Column amount has 2 values that are not float (e.g., n/a, 1,5)"
        );
        assert_snapshot!(
            Issue::ValueNotAllowed {
                column: "country".into(),
                invalid_count: 3,
                invalid_values: vec!["XX".into()],
            }
            .message(),
            @"Column country has 3 values not in the allowed list: XX"
        );
    }

    #[test]
    fn test_severity_and_column() {
        let order = Issue::ColumnOrder {
            column: "amount".into(),
            expected_position: 0,
            actual_position: 1,
        };
        assert_eq!(order.severity(), Severity::Warning);
        assert_eq!(order.column(), "amount");
        assert_eq!(order.count(), None);

        let empty = Issue::RequiredEmpty {
            column: "issuer".into(),
            empty_count: 4,
        };
        assert_eq!(empty.severity(), Severity::Error);
        assert_eq!(empty.count(), Some(4));
        assert_eq!(Severity::Warning.label(), "Warning");
    }
}
