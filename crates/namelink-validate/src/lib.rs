//! Schema contract validation for tabular datasets.
//!
//! A [`SchemaContract`] declares the exact column set, its order, and per
//! column a type, whether it is required, and optionally the allowed
//! values. [`validate_frame`] checks a polars `DataFrame` against it and
//! returns every problem found as an [`Issue`] in a [`ValidationReport`].
//!
//! Data problems never surface as `Err`; only loading a contract can fail.

mod checks;
mod contract;
mod error;
mod issue;
mod report;

// === Error Types ===
pub use error::{Result, ValidateError};

// === Contract ===
pub use contract::{ColumnSpec, ColumnType, SchemaContract, load_contract};

// === Validation ===
pub use checks::validate_frame;
pub use issue::{Issue, Severity};
pub use report::ValidationReport;
