//! The configuration store.
//!
//! Responsibilities:
//! - Load entries from the schema's file, validate required keys, and
//!   optionally export entries on open.
//! - Provide case-insensitive access to entries.
//! - Write entries back to the file in canonical form.
//!
//! Does NOT handle:
//! - Coordinating access from several processes; the last `write` wins.
//! - Atomic or durable writes; a crash mid-write can leave a truncated file.
//!
//! Invariants:
//! - Every key in `entries` is lower-case.
//! - A failed `load` leaves `entries` as it was.
//! - A store returned by `open` contains every required key.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::Path;

use crate::env::export_entries;
use crate::error::{ConfFileError, path_label};
use crate::parser::{normalize_key, parse_lines, render};
use crate::schema::ConfSchema;

/// A shell-style configuration file held in memory.
#[derive(Debug, Clone)]
pub struct ConfFile {
    schema: ConfSchema,
    entries: BTreeMap<String, String>,
}

impl ConfFile {
    /// Opens the store described by `schema`.
    ///
    /// Reads the file (a missing file yields an empty store), checks the
    /// required keys, and exports the entries to the environment if the
    /// schema asks for it.
    ///
    /// # Errors
    /// Returns the first parse, I/O, missing-key or export error.
    pub fn open(schema: ConfSchema) -> Result<Self, ConfFileError> {
        let mut conf = Self::empty(schema);
        conf.load()?;
        conf.validate_required::<&str>(&[])?;
        if conf.schema.export_on_load() {
            conf.export_to_environment()?;
        }
        Ok(conf)
    }

    /// Creates a store without reading its file or checking required keys.
    pub fn empty(schema: ConfSchema) -> Self {
        Self {
            schema,
            entries: BTreeMap::new(),
        }
    }

    /// Replaces the entries with the contents of the schema's file.
    ///
    /// An unset path or a file that does not exist leaves the store empty.
    pub fn load(&mut self) -> Result<(), ConfFileError> {
        let Some(path) = self.schema.path() else {
            self.entries.clear();
            return Ok(());
        };

        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "Config file not found, starting empty");
                self.entries.clear();
                return Ok(());
            }
            Err(e) => return Err(ConfFileError::io(path, e)),
        };

        let entries = parse_lines(&text, &path.display().to_string())?;
        tracing::debug!(
            path = %path.display(),
            entries = entries.len(),
            "Loaded config file"
        );
        self.entries = entries;
        Ok(())
    }

    /// Checks that every required key is present.
    ///
    /// `extra` is appended to the schema's required keys and stays there for
    /// the life of the store. Keys are checked in order and the first missing
    /// one is reported.
    pub fn validate_required<S: AsRef<str>>(&mut self, extra: &[S]) -> Result<(), ConfFileError> {
        self.schema.extend_required(extra);

        match self
            .schema
            .required()
            .iter()
            .find(|key| !self.entries.contains_key(key.as_str()))
        {
            Some(missing) => Err(ConfFileError::MissingKey {
                key: missing.to_uppercase(),
                path: path_label(self.schema.path()),
            }),
            None => Ok(()),
        }
    }

    /// Sets one process environment variable per entry, named by the
    /// upper-cased key.
    ///
    /// This mutates process-wide state and is not synchronized; do not call
    /// it while other threads access the environment.
    pub fn export_to_environment(&self) -> Result<(), ConfFileError> {
        let count = export_entries(&self.entries)?;
        tracing::debug!(count, "Exported config entries to environment");
        Ok(())
    }

    /// Writes all entries to the schema's file, replacing its contents.
    ///
    /// # Errors
    /// Returns [`ConfFileError::NoPath`] if the schema has no path, and
    /// [`ConfFileError::Unwritable`] before touching the file if an entry
    /// cannot be represented.
    pub fn write(&self) -> Result<(), ConfFileError> {
        let path = self.schema.path().ok_or(ConfFileError::NoPath)?;
        let text = self.render()?;
        std::fs::write(path, text).map_err(|e| ConfFileError::io(path, e))?;
        tracing::debug!(
            path = %path.display(),
            entries = self.entries.len(),
            "Wrote config file"
        );
        Ok(())
    }

    /// Returns the text `write` would produce.
    pub fn render(&self) -> Result<String, ConfFileError> {
        render(&self.entries)
    }

    /// Looks up `key` case-insensitively. Surrounding whitespace in `key`
    /// is ignored.
    pub fn get(&self, key: &str) -> Result<&str, ConfFileError> {
        self.get_opt(key)
            .ok_or_else(|| ConfFileError::KeyNotFound(key.to_string()))
    }

    pub fn get_opt(&self, key: &str) -> Option<&str> {
        self.entries.get(&normalize_key(key)).map(String::as_str)
    }

    /// Inserts or overwrites `key`, returning the previous value.
    ///
    /// The key is stored trimmed and lower-cased, so `set(" Port ", ..)`
    /// and `set("port", ..)` address the same entry.
    pub fn set(&mut self, key: &str, value: impl Into<String>) -> Option<String> {
        self.entries.insert(normalize_key(key), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(&normalize_key(key))
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&normalize_key(key))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries as `(lower_key, value)` in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn path(&self) -> Option<&Path> {
        self.schema.path()
    }

    pub fn required(&self) -> &[String] {
        self.schema.required()
    }

    pub fn schema(&self) -> &ConfSchema {
        &self.schema
    }
}

impl<K: AsRef<str>, V: Into<String>> Extend<(K, V)> for ConfFile {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key.as_ref(), value);
        }
    }
}
