//! Configuration schema supplied by the embedding application.
//!
//! A schema names the backing file, the keys that must be present once the
//! file has been read, and whether the entries are copied into the process
//! environment when the store is opened.

use std::path::{Path, PathBuf};

use crate::parser::normalize_key;

/// Describes where a configuration lives and what it must contain.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfSchema {
    path: Option<PathBuf>,
    required: Vec<String>,
    export_on_load: bool,
}

impl ConfSchema {
    /// Creates a schema backed by `path`. The file does not need to exist.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Creates a schema with no backing file. Such a store starts empty and
    /// cannot be written.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Adds required keys. Keys are stored lower-cased.
    pub fn with_required<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.required
            .extend(keys.into_iter().map(|k| normalize_key(k.as_ref())));
        self
    }

    /// Export all entries to the process environment when the store is opened.
    pub fn with_export_on_load(mut self, export: bool) -> Self {
        self.export_on_load = export;
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn required(&self) -> &[String] {
        &self.required
    }

    pub fn export_on_load(&self) -> bool {
        self.export_on_load
    }

    pub(crate) fn extend_required<S: AsRef<str>>(&mut self, keys: &[S]) {
        self.required
            .extend(keys.iter().map(|k| normalize_key(k.as_ref())));
    }
}
