//! CLI command implementations.

pub mod check;
pub mod entries;
pub mod exec;
pub mod list;

use anyhow::{Context, Result};
use conffile::{ConfFile, ConfSchema};

/// Opens the store, enforcing required keys and surfacing parse errors.
pub fn open_store(schema: ConfSchema) -> Result<ConfFile> {
    let path = schema.path().map(|p| p.display().to_string());
    ConfFile::open(schema).with_context(|| {
        format!(
            "Failed to open configuration file {}",
            path.as_deref().unwrap_or("(no file)")
        )
    })
}

/// Reads the store for editing. Required keys are not enforced so that a
/// missing key can be added.
pub fn load_store(schema: ConfSchema) -> Result<ConfFile> {
    let mut conf = ConfFile::empty(schema);
    conf.load()
        .context("Failed to read configuration file for editing")?;
    Ok(conf)
}
