//! Candidate supply.
//!
//! The matcher consumes plain, already materialized string lists. A
//! [`CandidateSource`] is how callers obtain them for a reference
//! table/column pair.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::column::distinct_values;
use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};

/// Supplies the canonical names for a reference table column.
///
/// Implementations return distinct values in a stable order; the matcher
/// uses that order to break ties.
pub trait CandidateSource {
    fn candidates(&self, table: &str, column: &str) -> Result<Vec<String>>;
}

/// Reference tables stored as `<root>/<table>.csv`.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    /// Open a reference directory.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(IngestError::DirectoryNotFound { path: root });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn table_path(&self, table: &str) -> PathBuf {
        self.root.join(format!("{table}.csv"))
    }
}

impl CandidateSource for DirectorySource {
    fn candidates(&self, table: &str, column: &str) -> Result<Vec<String>> {
        let path = self.table_path(table);
        if !path.is_file() {
            return Err(IngestError::TableNotFound {
                table: table.to_string(),
            });
        }
        let df = read_csv_table(&path)?;
        let values = distinct_values(&df, column)?;
        tracing::info!(table, column, candidates = values.len(), "loaded candidates");
        Ok(values)
    }
}

/// Preloaded candidate lists keyed by table and column.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    tables: BTreeMap<String, BTreeMap<String, Vec<String>>>,
}

impl InMemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register values for a table column. Blank values and repeats are dropped.
    pub fn insert<I, S>(&mut self, table: &str, column: &str, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut distinct: Vec<String> = Vec::new();
        for value in values {
            let value: String = value.into();
            let trimmed = value.trim();
            if !trimmed.is_empty() && !distinct.iter().any(|v| v == trimmed) {
                distinct.push(trimmed.to_string());
            }
        }
        self.tables
            .entry(table.to_string())
            .or_default()
            .insert(column.to_string(), distinct);
    }
}

impl CandidateSource for InMemorySource {
    fn candidates(&self, table: &str, column: &str) -> Result<Vec<String>> {
        let columns = self
            .tables
            .get(table)
            .ok_or_else(|| IngestError::TableNotFound {
                table: table.to_string(),
            })?;
        columns
            .get(column)
            .cloned()
            .ok_or_else(|| IngestError::ColumnNotFound {
                column: column.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_source() {
        let mut source = InMemorySource::new();
        source.insert("institutions", "name", ["Ageas", "ABN AMRO Bank", "Ageas", " "]);

        assert_eq!(
            source.candidates("institutions", "name").unwrap(),
            vec!["Ageas", "ABN AMRO Bank"]
        );
        assert!(matches!(
            source.candidates("countries", "name"),
            Err(IngestError::TableNotFound { .. })
        ));
        assert!(matches!(
            source.candidates("institutions", "lei"),
            Err(IngestError::ColumnNotFound { .. })
        ));
    }

    #[test]
    fn test_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("institutions.csv"),
            "name,country\nAgeas,BE\nABN AMRO Bank,NL\nAgeas,BE\n",
        )
        .unwrap();

        let source = DirectorySource::new(dir.path()).unwrap();
        assert_eq!(
            source.candidates("institutions", "name").unwrap(),
            vec!["Ageas", "ABN AMRO Bank"]
        );
        assert_eq!(
            source.candidates("institutions", "country").unwrap(),
            vec!["BE", "NL"]
        );
        assert!(matches!(
            source.candidates("instruments", "name"),
            Err(IngestError::TableNotFound { .. })
        ));
    }

    #[test]
    fn test_directory_must_exist() {
        let result = DirectorySource::new("/definitely/not/a/dir");
        assert!(matches!(result, Err(IngestError::DirectoryNotFound { .. })));
    }
}
