//! Single-entry commands: `get`, `set`, `unset` and `fmt`.

use anyhow::{Context, Result};
use conffile::{ConfFileError, ConfSchema};

use super::{load_store, open_store};

pub fn run_get(schema: ConfSchema, key: &str) -> Result<()> {
    let conf = open_store(schema)?;
    println!("{}", conf.get(key)?);
    Ok(())
}

pub fn run_set(schema: ConfSchema, key: &str, value: &str) -> Result<()> {
    let mut conf = load_store(schema)?;
    let previous = conf.set(key, value);
    conf.write().context("Failed to write configuration file")?;

    tracing::info!(
        key = %key.to_uppercase(),
        replaced = previous.is_some(),
        "Entry set"
    );
    Ok(())
}

pub fn run_unset(schema: ConfSchema, key: &str) -> Result<()> {
    let mut conf = load_store(schema)?;
    if conf.remove(key).is_none() {
        return Err(ConfFileError::KeyNotFound(key.to_string()).into());
    }
    conf.write().context("Failed to write configuration file")?;

    tracing::info!(key = %key.to_uppercase(), "Entry removed");
    Ok(())
}

/// Rewrites the file in canonical form. A file that does not exist yet is
/// left alone.
pub fn run_fmt(schema: ConfSchema) -> Result<()> {
    let conf = load_store(schema)?;
    match conf.path() {
        Some(path) if path.exists() => {
            conf.write().context("Failed to write configuration file")?;
            tracing::info!(path = %path.display(), entries = conf.len(), "Formatted");
        }
        _ => tracing::info!("Configuration file does not exist, nothing to format"),
    }
    Ok(())
}
