//! Error types for configuration file handling.
//!
//! Responsibilities:
//! - Define error variants for every failure of load, validate, export and write.
//! - Carry enough context (paths, line numbers, key names) to act on the error.
//!
//! Invariants:
//! - `MissingKey` always names the key upper-cased, as it appears in the file.
//! - Paths are rendered for display at construction; a store without a path
//!   reports `(no file)`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading, validating, exporting or writing a
/// configuration file.
#[derive(Error, Debug)]
pub enum ConfFileError {
    /// A non-comment, non-blank line has no `KEY=VALUE` shape.
    #[error("{path}:{line_number}: expected KEY=VALUE, got {line:?}")]
    Parse {
        path: String,
        line_number: usize,
        line: String,
    },

    /// A required key is absent after loading.
    #[error("{key} not specified in {path}")]
    MissingKey { key: String, path: String },

    /// `write` was called on a store that has no file path.
    #[error("no configuration file path set")]
    NoPath,

    /// `get` was called for a key that is not present.
    #[error("key not found: {0}")]
    KeyNotFound(String),

    #[error("failed to access config file at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An entry cannot be written in a form that reads back to the same entry.
    #[error("cannot write entry {key:?}: {reason}")]
    Unwritable { key: String, reason: &'static str },

    #[error("invalid environment variable name: {0:?}")]
    InvalidEnvironmentName(String),

    #[error("value of {0} contains a NUL byte and cannot be exported")]
    InvalidEnvironmentValue(String),
}

impl ConfFileError {
    pub(crate) fn io(path: &Path, source: std::io::Error) -> Self {
        ConfFileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Renders an optional path the way error messages show it.
pub(crate) fn path_label(path: Option<&Path>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "(no file)".to_string(),
    }
}
