//! Output writing with dry-run support.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CliResult;

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// Content was written to disk.
    Written { path: PathBuf, bytes: usize },

    /// Dry run: nothing was written.
    DryRun { path: PathBuf, content: String },
}

/// Writes generated module text, optionally as a dry run.
#[derive(Debug, Clone, Copy)]
pub struct FileWriter {
    dry_run: bool,
}

impl FileWriter {
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write `content` to `path`, creating parent directories as needed.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                path: path.to_path_buf(),
                content: content.to_string(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;

        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_content_and_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/schemas.js");

        let result = FileWriter::new(false)
            .write(&path, "const A = 'x';\n")
            .unwrap();

        assert!(matches!(result, WriteResult::Written { bytes: 15, .. }));
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "const A = 'x';\n"
        );
    }

    #[test]
    fn dry_run_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("schemas.js");

        let result = FileWriter::new(true).write(&path, "x").unwrap();

        assert!(matches!(result, WriteResult::DryRun { .. }));
        assert!(!path.exists());
    }
}
