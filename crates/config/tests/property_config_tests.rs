//! Property-based tests for reading and writing configuration files.
//!
//! These tests generate random key/value maps and check that what `write`
//! produces is read back unchanged, is stable across writes, and is sorted.
//!
//! Test coverage:
//! - Round-trip: write then open in a fresh store yields the same entries,
//!   or the write is refused when a value would be trimmed on reload
//! - Idempotence: two writes without mutation are byte-identical
//! - Sorting: output lines are ordered by key
//! - Case-insensitivity: any casing of a key reaches the same entry

use std::collections::BTreeMap;

use conffile::{ConfFile, ConfFileError, ConfSchema};
use proptest::prelude::*;
use tempfile::TempDir;

/// Strategy for generating shell-style key names.
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z_][a-zA-Z0-9_]{0,15}".prop_map(String::from)
}

/// Strategy for generating values.
///
/// Values are printable ASCII and may contain `=`, `#`, and leading or
/// trailing spaces.
fn value_strategy() -> impl Strategy<Value = String> {
    "[ -~]{0,40}".prop_map(String::from)
}

/// Strategy for generating values that `write` accepts: no surrounding
/// whitespace.
fn writable_value_strategy() -> impl Strategy<Value = String> {
    "[!-~]([ -~]{0,38}[!-~])?".prop_map(String::from)
}

/// Strategy for generating a whole configuration as (key, value) pairs.
fn entries_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((key_strategy(), value_strategy()), 0..20)
}

/// Strategy for generating a configuration every entry of which is writable.
fn writable_entries_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    proptest::collection::vec((key_strategy(), writable_value_strategy()), 0..20)
}

/// Expected contents after inserting `pairs` in order.
fn expected_map(pairs: &[(String, String)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_lowercase(), v.clone()))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Writing a store and opening the file again reproduces every entry.
    /// Entries whose value would be trimmed on reload are refused instead.
    #[test]
    fn test_write_then_open_roundtrip(pairs in entries_strategy()) {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("app.conf");

        let mut conf = ConfFile::empty(ConfSchema::new(&path));
        conf.extend(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        let expected = expected_map(&pairs);
        if expected.values().any(|v| v.trim() != v) {
            prop_assert!(
                matches!(conf.write(), Err(ConfFileError::Unwritable { .. })),
                "Values with surrounding whitespace should be refused"
            );
            prop_assert!(!path.exists(), "Refused write should not create the file");
            return Ok(());
        }
        conf.write().expect("Failed to write config");

        let reloaded = ConfFile::open(ConfSchema::new(&path)).expect("Failed to reopen config");
        let actual: BTreeMap<String, String> = reloaded
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        prop_assert_eq!(actual, expected);
    }

    /// Two writes with no mutation in between produce identical bytes.
    #[test]
    fn test_write_is_idempotent(pairs in writable_entries_strategy()) {
        let dir = TempDir::new().expect("Failed to create temp directory");
        let path = dir.path().join("app.conf");

        let mut conf = ConfFile::empty(ConfSchema::new(&path));
        conf.extend(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

        conf.write().expect("first write");
        let first = std::fs::read(&path).expect("read after first write");
        conf.write().expect("second write");
        let second = std::fs::read(&path).expect("read after second write");

        prop_assert_eq!(first, second);
    }

    /// Output lines are sorted by lower-case key regardless of insertion order.
    #[test]
    fn test_rendered_lines_are_sorted(pairs in writable_entries_strategy()) {
        let mut conf = ConfFile::empty(ConfSchema::in_memory());
        conf.extend(pairs.iter().rev().map(|(k, v)| (k.as_str(), v.as_str())));

        let text = conf.render().expect("render");
        let keys: Vec<String> = text
            .lines()
            .map(|line| line.split_once('=').map(|(k, _)| k).unwrap_or(line).to_lowercase())
            .collect();

        let mut sorted = keys.clone();
        sorted.sort();
        prop_assert_eq!(keys, sorted);
        prop_assert!(text.is_empty() || text.ends_with('\n'));
    }

    /// Any casing of a key reaches the same entry.
    #[test]
    fn test_keys_are_case_insensitive(key in key_strategy(), value in value_strategy()) {
        let mut conf = ConfFile::empty(ConfSchema::in_memory());
        conf.set(&key, value.clone());

        prop_assert_eq!(conf.get(&key.to_uppercase()).expect("upper"), value.as_str());
        prop_assert_eq!(conf.get(&key.to_lowercase()).expect("lower"), value.as_str());
    }
}
