//! Error types for match configuration.
//!
//! Matching itself never fails: empty candidate lists, missing acronym
//! coverage and sub-threshold scores are all defined outcomes. Errors only
//! arise while building or loading [`MatchOptions`](crate::MatchOptions).

use thiserror::Error;

/// Errors raised while preparing match options.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// Floor threshold is not a finite number in `[0, 1]`.
    #[error("floor threshold must be a finite value in [0, 1], got {value}")]
    InvalidFloorThreshold { value: f64 },

    /// Options document could not be parsed.
    #[error("failed to parse match options: {source}")]
    Config {
        #[source]
        source: toml::de::Error,
    },
}

/// Result type for match configuration.
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MatchError::InvalidFloorThreshold { value: 1.5 };
        assert_eq!(
            err.to_string(),
            "floor threshold must be a finite value in [0, 1], got 1.5"
        );
    }
}
