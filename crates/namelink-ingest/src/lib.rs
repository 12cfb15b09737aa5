//! Data ingestion for entity matching.
//!
//! Loads CSV tables as text columns, supplies candidate lists from
//! reference tables, reads acronym and stop word vocabularies, and turns
//! match results back into a table.

mod column;
mod csv;
mod error;
mod export;
mod reference;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV I/O ===
pub use csv::{read_csv_table, write_csv};

// === Column Access ===
pub use column::{column_values, distinct_values, resolve_column_name};

// === Candidates and Reference Data ===
pub use reference::{load_acronym_map, load_stop_words};
pub use source::{CandidateSource, DirectorySource, InMemorySource};

// === Export ===
pub use export::{
    MATCH_COUNT_COLUMN, MATCH_SCORE_COLUMN, MATCHED_NAME_COLUMN, QUERY_COLUMN, results_frame,
};
