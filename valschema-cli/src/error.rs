//! Error types for the CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Main error type for CLI operations.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error loading or assembling the declaration batch.
    #[error("failed to load schemas: {0}")]
    Schema(#[from] valschema::Error),

    /// Validation failed (printed module out of date or missing).
    #[error("validation failed: {0}")]
    Validation(String),

    /// Error reading an input file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
