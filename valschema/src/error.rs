//! Error types for the library.
//!
//! Printing itself is total and never returns an error; only registry
//! construction and JSON loading can fail.

use thiserror::Error;

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a batch of named schemas.
#[derive(Debug, Error)]
pub enum Error {
    /// A schema key appeared more than once in one batch.
    #[error("duplicate schema key '{key}'")]
    DuplicateKey { key: String },

    /// The declaration batch was not valid JSON for the expected shape.
    #[error("failed to read schema declarations: {0}")]
    Json(#[from] serde_json::Error),
}
