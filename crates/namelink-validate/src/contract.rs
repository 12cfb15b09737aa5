//! Declarative schema contracts.
//!
//! A contract lists the columns a dataset must have, in order, with a type
//! and optional constraints per column:
//!
//! ```toml
//! [[columns]]
//! name = "issuer"
//! type = "text"
//! required = true
//!
//! [[columns]]
//! name = "country"
//! type = "text"
//! allowed_values = ["BE", "NL", "IT"]
//! ```

use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidateError};

/// Value type a column must hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    /// Any text.
    #[default]
    Text,
    /// Signed 64-bit integer.
    Integer,
    /// Finite floating point number.
    Float,
    /// `true`/`false`, `1`/`0` or `yes`/`no`, any case.
    Boolean,
    /// ISO calendar date, `YYYY-MM-DD`.
    Date,
}

impl ColumnType {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Boolean => "boolean",
            Self::Date => "date",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Constraints for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub name: String,
    #[serde(rename = "type", default)]
    pub column_type: ColumnType,
    /// Every cell must be non-blank.
    #[serde(default)]
    pub required: bool,
    /// When set, non-blank cells must be one of these values.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed_values: Option<Vec<String>>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            required: false,
            allowed_values: None,
        }
    }

    #[must_use]
    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn with_allowed_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_values = Some(values.into_iter().map(Into::into).collect());
        self
    }
}

/// Ordered set of column specifications.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SchemaContract {
    pub columns: Vec<ColumnSpec>,
}

impl SchemaContract {
    /// Build a contract, rejecting duplicate or blank column names.
    pub fn new(columns: Vec<ColumnSpec>) -> Result<Self> {
        let contract = Self { columns };
        contract.check()?;
        Ok(contract)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let contract: Self =
            toml::from_str(content).map_err(|source| ValidateError::ContractParse { source })?;
        contract.check()?;
        Ok(contract)
    }

    /// Declared column names in order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    pub fn get(&self, name: &str) -> Option<&ColumnSpec> {
        self.columns.iter().find(|c| c.name == name)
    }

    fn check(&self) -> Result<()> {
        let mut seen = BTreeSet::new();
        for spec in &self.columns {
            if spec.name.trim().is_empty() {
                return Err(ValidateError::InvalidContract {
                    reason: "column name is blank".to_string(),
                });
            }
            if !seen.insert(spec.name.as_str()) {
                return Err(ValidateError::InvalidContract {
                    reason: format!("column '{}' declared twice", spec.name),
                });
            }
        }
        Ok(())
    }
}

/// Load a contract from a TOML file.
pub fn load_contract(path: &Path) -> Result<SchemaContract> {
    let content = std::fs::read_to_string(path).map_err(|e| ValidateError::ContractRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    let contract = SchemaContract::from_toml_str(&content)?;
    tracing::debug!(
        path = %path.display(),
        columns = contract.columns.len(),
        "loaded schema contract"
    );
    Ok(contract)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTRACT: &str = r#"
        [[columns]]
        name = "issuer"
        required = true

        [[columns]]
        name = "amount"
        type = "float"

        [[columns]]
        name = "country"
        type = "text"
        allowed_values = ["BE", "NL"]
    "#;

    #[test]
    fn test_parse_contract() {
        let contract = SchemaContract::from_toml_str(CONTRACT).unwrap();
        assert_eq!(
            contract.column_names().collect::<Vec<_>>(),
            vec!["issuer", "amount", "country"]
        );
        let issuer = contract.get("issuer").unwrap();
        assert_eq!(issuer.column_type, ColumnType::Text);
        assert!(issuer.required);
        assert_eq!(contract.get("amount").unwrap().column_type, ColumnType::Float);
        assert_eq!(
            contract.get("country").unwrap().allowed_values.as_deref(),
            Some(&["BE".to_string(), "NL".to_string()][..])
        );
    }

    #[test]
    fn test_rejects_duplicate_columns() {
        let err = SchemaContract::new(vec![
            ColumnSpec::new("lei", ColumnType::Text),
            ColumnSpec::new("lei", ColumnType::Text),
        ])
        .unwrap_err();
        assert!(matches!(err, ValidateError::InvalidContract { .. }));
    }

    #[test]
    fn test_rejects_unknown_type() {
        let err = SchemaContract::from_toml_str(
            r#"
            [[columns]]
            name = "issuer"
            type = "uuid"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, ValidateError::ContractParse { .. }));
    }

    #[test]
    fn test_load_contract_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("contract.toml");
        std::fs::write(&path, CONTRACT).unwrap();
        let contract = load_contract(&path).unwrap();
        assert_eq!(contract.columns.len(), 3);

        let missing = load_contract(&dir.path().join("absent.toml"));
        assert!(matches!(missing, Err(ValidateError::ContractRead { .. })));
    }
}
