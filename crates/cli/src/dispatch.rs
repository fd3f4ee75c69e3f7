//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the appropriate command handler.
//! - Build the schema from global options once per invocation.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Logging setup or process exit (see `main()`).

use anyhow::Result;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::error::ExitCode;

/// Dispatch CLI commands to their respective handlers.
///
/// Returns the process exit code on success. This is `Success` for every
/// command except `exec`, which passes through the child's code.
pub(crate) fn run_command(cli: Cli) -> Result<i32> {
    let schema = cli.schema()?;

    match cli.command {
        Commands::Get { key } => commands::entries::run_get(schema, &key)?,
        Commands::Set { key, value } => commands::entries::run_set(schema, &key, &value)?,
        Commands::Unset { key } => commands::entries::run_unset(schema, &key)?,
        Commands::List { output } => commands::list::run(schema, output)?,
        Commands::Check { keys } => commands::check::run(schema, &keys)?,
        Commands::Fmt => commands::entries::run_fmt(schema)?,
        Commands::Exec { program, args } => {
            return commands::exec::run(schema, &program, &args);
        }
    }

    Ok(ExitCode::Success.as_i32())
}
