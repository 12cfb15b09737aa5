//! Reference vocabularies: acronym expansions and stop words.

use std::path::Path;

use namelink_match::{AcronymMap, StopWords};

use crate::column::column_values;
use crate::csv::read_csv_table;
use crate::error::{IngestError, Result};

const ACRONYM_COLUMN: &str = "acronym";
const EXPANSION_COLUMN: &str = "expansion";

/// Load an acronym map from a CSV file.
///
/// Uses the `acronym` and `expansion` columns when present, otherwise the
/// first two columns. Rows with a blank side are skipped; a repeated acronym
/// replaces the earlier expansion.
pub fn load_acronym_map(path: &Path) -> Result<AcronymMap> {
    let df = read_csv_table(path)?;
    let names: Vec<String> = df
        .get_columns()
        .iter()
        .map(|col| col.name().to_string())
        .collect();
    if names.len() < 2 {
        return Err(IngestError::Format {
            path: path.to_path_buf(),
            reason: format!("expected 2 columns, found {}", names.len()),
        });
    }

    let has_named_columns = names.iter().any(|n| n.eq_ignore_ascii_case(ACRONYM_COLUMN))
        && names.iter().any(|n| n.eq_ignore_ascii_case(EXPANSION_COLUMN));
    let (key_column, value_column) = if has_named_columns {
        (ACRONYM_COLUMN, EXPANSION_COLUMN)
    } else {
        (names[0].as_str(), names[1].as_str())
    };

    let keys = column_values(&df, key_column)?;
    let values = column_values(&df, value_column)?;

    let mut map = AcronymMap::new();
    for (key, value) in keys.into_iter().zip(values) {
        let (Some(key), Some(value)) = (key, value) else {
            continue;
        };
        let (key, value) = (key.trim(), value.trim());
        if key.is_empty() || value.is_empty() {
            continue;
        }
        if let Some(previous) = map.insert(key, value) {
            tracing::warn!(acronym = key, previous = %previous, "duplicate acronym, keeping last");
        }
    }

    tracing::info!(path = %path.display(), entries = map.len(), "loaded acronym map");
    Ok(map)
}

/// Load stop words, one per line.
///
/// Blank lines and `#` comments are ignored. Tokens are lower-cased since
/// they are compared against normalized names.
pub fn load_stop_words(path: &Path) -> Result<StopWords> {
    let content = std::fs::read_to_string(path).map_err(|e| IngestError::read(path, e))?;
    let stop_words: StopWords = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_lowercase)
        .collect();
    tracing::info!(path = %path.display(), words = stop_words.len(), "loaded stop words");
    Ok(stop_words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(dir: &Path, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_acronym_map_by_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "acronyms.csv",
            "expansion,acronym\nWorld Bank,wb\nEuropean Investment Bank,EIB\n,XX\n",
        );
        let map = load_acronym_map(&path).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("WB"), Some("World Bank"));
        assert_eq!(map.get("eib"), Some("European Investment Bank"));
    }

    #[test]
    fn test_load_acronym_map_positional() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "acronyms.csv",
            "short,long\nIMF,International Monetary Fund\nIMF,Intl Monetary Fund\n",
        );
        let map = load_acronym_map(&path).unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("IMF"), Some("Intl Monetary Fund"));
    }

    #[test]
    fn test_load_acronym_map_needs_two_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(dir.path(), "acronyms.csv", "acronym\nWB\n");
        assert!(matches!(
            load_acronym_map(&path),
            Err(IngestError::Format { .. })
        ));
    }

    #[test]
    fn test_load_stop_words() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            dir.path(),
            "stop_words.txt",
            "# legal forms\nThe\n\n  of \nSA\n",
        );
        let words = load_stop_words(&path).unwrap();
        assert_eq!(words.iter().collect::<Vec<_>>(), vec!["of", "sa", "the"]);
    }

    #[test]
    fn test_load_stop_words_missing_file() {
        let result = load_stop_words(Path::new("/definitely/not/here.txt"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
