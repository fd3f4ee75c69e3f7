//! `exec` command: run a program with the configuration in its environment.
//!
//! Invariants:
//! - Entries are exported to this process before the child is spawned, so the
//!   child inherits them along with the rest of the environment.
//! - The child's exit code is returned unchanged; a child killed by a signal
//!   reports 128 + signal number on Unix.

use std::process::Command;

use anyhow::{Context, Result};
use conffile::ConfSchema;

use super::open_store;

/// Runs `program` and returns its exit code.
pub fn run(schema: ConfSchema, program: &str, args: &[String]) -> Result<i32> {
    let conf = open_store(schema)?;
    conf.export_to_environment()
        .context("Failed to export configuration to environment")?;

    tracing::debug!(program, args = args.len(), "Spawning command");
    let status = Command::new(program)
        .args(args)
        .status()
        .with_context(|| format!("Failed to run {program}"))?;

    Ok(exit_code_of(status))
}

#[cfg(unix)]
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code_of(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
