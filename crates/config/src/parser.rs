//! Line-level parsing and rendering of `KEY=VALUE` files.
//!
//! Responsibilities:
//! - Turn file text into a lower-cased key/value map.
//! - Turn a key/value map back into canonical file text.
//!
//! Does NOT handle:
//! - File I/O (see `store.rs`).
//! - Required-key validation (see `store.rs`).
//!
//! Invariants:
//! - Parsed keys are lower-case; rendered keys are upper-case.
//! - Only the first `=` separates key from value; later ones belong to the value.
//! - Rendered output is sorted by key and newline-terminated.

use std::collections::BTreeMap;

use crate::error::ConfFileError;

const STRING_SOURCE: &str = "(string)";

/// Normalizes a key for lookup and storage: surrounding whitespace is
/// trimmed and the rest lower-cased.
pub fn normalize_key(key: &str) -> String {
    key.trim().to_lowercase()
}

/// Parses configuration text into a map keyed by lower-case key.
///
/// Blank lines and lines whose first non-whitespace character is `#` are
/// skipped. Every other line must contain `=`; when a key appears more than
/// once the last value wins.
pub fn parse_str(text: &str) -> Result<BTreeMap<String, String>, ConfFileError> {
    parse_lines(text, STRING_SOURCE)
}

pub(crate) fn parse_lines(
    text: &str,
    source: &str,
) -> Result<BTreeMap<String, String>, ConfFileError> {
    let mut entries = BTreeMap::new();

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim_end();
        if line.is_empty() || line.trim_start().starts_with('#') {
            continue;
        }

        let parse_error = || ConfFileError::Parse {
            path: source.to_string(),
            line_number: index + 1,
            line: line.to_string(),
        };

        let (key, value) = line.split_once('=').ok_or_else(parse_error)?;
        let key = normalize_key(key);
        if key.is_empty() {
            return Err(parse_error());
        }

        if entries.insert(key, value.trim().to_string()).is_some() {
            tracing::warn!(
                source,
                line_number = index + 1,
                "Duplicate key, later value wins"
            );
        }
    }

    Ok(entries)
}

/// Renders entries as file text: one `UPPERKEY=value` line per entry, sorted
/// by key.
///
/// Fails with [`ConfFileError::Unwritable`] if an entry would not read back
/// as the same entry.
pub fn render<'a, I>(entries: I) -> Result<String, ConfFileError>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut sorted: Vec<_> = entries.into_iter().collect();
    sorted.sort_by(|a, b| a.0.cmp(b.0));

    let mut out = String::new();
    for (key, value) in sorted {
        check_writable(key, value)?;
        out.push_str(&key.to_uppercase());
        out.push('=');
        out.push_str(value);
        out.push('\n');
    }
    Ok(out)
}

fn check_writable(key: &str, value: &str) -> Result<(), ConfFileError> {
    let reason = if key.trim().is_empty() {
        Some("key is empty")
    } else if key.contains('=') {
        Some("key contains '='")
    } else if key.contains(['\n', '\r']) {
        Some("key contains a line break")
    } else if key.trim_start().starts_with('#') {
        Some("key starts with '#'")
    } else if key.trim() != key {
        Some("key has surrounding whitespace")
    } else if key.to_uppercase().to_lowercase() != key {
        Some("key changes when written upper-case")
    } else if value.contains(['\n', '\r']) {
        Some("value contains a line break")
    } else if value.trim() != value {
        Some("value has surrounding whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ConfFileError::Unwritable {
            key: key.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}
