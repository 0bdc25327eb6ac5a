//! # valschema-cli
//!
//! CLI library for printing schema-AST batches as validator rule modules.
//!
//! The binary is a thin clap front-end over these modules:
//!
//! - [`commands`] - generate/validate command implementations
//! - [`writer`] - file output and dry-run support
//! - [`error`] - error types and handling

pub mod commands;
pub mod error;
pub mod writer;

pub use commands::{generate, validate, GenerateOutcome};
pub use error::{CliError, CliResult};
pub use writer::{FileWriter, WriteResult};
