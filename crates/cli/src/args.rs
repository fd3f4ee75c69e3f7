//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Read the config path and required keys from flags or environment.
//! - Build the `ConfSchema` every command opens its store with.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use clap::{Parser, Subcommand, ValueEnum};
use conffile::ConfSchema;
use std::path::PathBuf;

use crate::commands::list::OutputFormat;

#[derive(Parser)]
#[command(name = "conffile")]
#[command(about = "Read and edit shell-style KEY=VALUE configuration files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  conffile -f /etc/default/app list\n  conffile -f app.conf set port 8080\n  conffile -f app.conf -r name -r port check\n  conffile -f app.conf exec -- ./server --verbose\n"
)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(short, long, global = true, env = "CONFFILE_PATH", value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Key that must be present in the file (repeatable)
    #[arg(
        short,
        long = "require",
        global = true,
        env = "CONFFILE_REQUIRED",
        value_delimiter = ',',
        value_name = "KEY"
    )]
    pub required: Vec<String>,

    /// Log output format (logs go to stderr; level is set with RUST_LOG)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Builds the schema described by the global options.
    ///
    /// # Errors
    /// Fails if no config file was given on the command line or in
    /// `CONFFILE_PATH`.
    pub fn schema(&self) -> anyhow::Result<ConfSchema> {
        let path = self
            .file
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("No configuration file given. Use --file or set CONFFILE_PATH")
            })?;

        Ok(ConfSchema::new(path).with_required(&self.required))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the value of a key
    Get {
        /// Key to look up (case-insensitive)
        key: String,
    },

    /// Set a key and write the file back
    Set {
        /// Key to set (case-insensitive)
        key: String,

        /// New value
        #[arg(allow_hyphen_values = true)]
        value: String,
    },

    /// Remove a key and write the file back
    Unset {
        /// Key to remove (case-insensitive)
        key: String,
    },

    /// List all entries in key order
    List {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Shell)]
        output: OutputFormat,
    },

    /// Check that required keys are present
    Check {
        /// Additional keys to require
        keys: Vec<String>,
    },

    /// Rewrite the file in canonical form (sorted, upper-case keys, no comments)
    Fmt,

    /// Export entries to the environment and run a command
    Exec {
        /// Command to run
        program: String,

        /// Arguments passed to the command
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
