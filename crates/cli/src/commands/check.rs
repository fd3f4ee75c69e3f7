//! `check` command: verify required keys are present.

use anyhow::{Context, Result};
use conffile::ConfSchema;

use super::load_store;

pub fn run(schema: ConfSchema, keys: &[String]) -> Result<()> {
    let mut conf = load_store(schema)?;
    conf.validate_required(keys)
        .context("Configuration is incomplete")?;

    tracing::info!(required = conf.required().len(), "All required keys present");
    println!("OK");
    Ok(())
}
