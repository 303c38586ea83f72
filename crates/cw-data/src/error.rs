//! Error types for dataset loading and validation.

use std::path::PathBuf;

/// Alias for `Result<T, DataError>`.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading the rules dataset.
#[derive(Debug, thiserror::Error)]
pub enum DataError {
    /// The dataset file could not be read.
    #[error("failed to read dataset file '{}': {source}", path.display())]
    Read {
        /// The path that was being read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The dataset JSON is malformed or does not match the schema
    /// (missing required key, wrong type).
    #[error("malformed dataset: {0}")]
    Parse(#[from] serde_json::Error),

    /// The dataset parsed but violates a structural invariant.
    #[error("invalid dataset: {0}")]
    Invalid(String),
}
