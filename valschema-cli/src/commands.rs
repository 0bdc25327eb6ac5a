//! Command implementations, kept free of terminal output so the binary
//! and integration tests share them.

use std::path::Path;

use valschema::{PrintOptions, SchemaRegistry};

use crate::error::{CliError, CliResult};
use crate::writer::{FileWriter, WriteResult};

/// What the generate command produced; the binary decides how to report it.
#[derive(Debug)]
pub enum GenerateOutcome {
    /// No output path was given: the module text goes to stdout.
    Stdout { content: String },

    /// The module was written to (or previewed at) a path.
    File { schemas: usize, result: WriteResult },
}

/// Load a declaration batch from a JSON file.
pub fn load_registry(input: &Path) -> CliResult<SchemaRegistry> {
    let json = std::fs::read_to_string(input).map_err(|source| CliError::Read {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(SchemaRegistry::from_json(&json)?)
}

/// Print a validator module from a schema-AST batch.
pub fn generate(
    input: &Path,
    output: Option<&Path>,
    options: PrintOptions,
    dry_run: bool,
) -> CliResult<GenerateOutcome> {
    let registry = load_registry(input)?;
    let content = registry.print(&options);

    let Some(path) = output else {
        return Ok(GenerateOutcome::Stdout { content });
    };

    let result = FileWriter::new(dry_run).write(path, &content)?;
    Ok(GenerateOutcome::File {
        schemas: registry.len(),
        result,
    })
}

/// Check that a printed module matches what the batch would generate now.
pub fn validate(input: &Path, path: &Path, options: PrintOptions) -> CliResult<()> {
    if !path.exists() {
        return Err(CliError::Validation(format!(
            "module file not found: {}",
            path.display()
        )));
    }

    let existing = std::fs::read_to_string(path)?;
    let registry = load_registry(input)?;
    let content = registry.print(&options);

    if existing.trim() == content.trim() {
        Ok(())
    } else {
        Err(CliError::Validation("module is out of date".to_string()))
    }
}
