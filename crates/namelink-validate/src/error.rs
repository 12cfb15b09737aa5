//! Error types for contract loading and validation.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised before a dataset can be checked.
///
/// Problems found in the data itself are reported as issues, never as errors.
#[derive(Debug, Error)]
pub enum ValidateError {
    // === Contract Errors ===
    /// Failed to read the contract file.
    #[error("failed to read contract {path}: {source}")]
    ContractRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Contract file is not valid TOML for a schema contract.
    #[error("failed to parse contract: {source}")]
    ContractParse {
        #[source]
        source: toml::de::Error,
    },

    /// Contract parsed but is inconsistent.
    #[error("invalid contract: {reason}")]
    InvalidContract { reason: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for ValidateError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for validation operations.
pub type Result<T> = std::result::Result<T, ValidateError>;
