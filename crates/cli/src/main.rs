//! conffile - command-line interface for shell-style configuration files.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Initialize logging on stderr.
//! - Run the selected command and translate errors into structured exit codes.
//!
//! Does NOT handle:
//! - Parsing or writing configuration files (see `crates/config`).
//!
//! Invariants:
//! - stdout carries only command output; logs and errors go to stderr.

mod args;
mod commands;
mod dispatch;
mod error;

use args::{Cli, LogFormat};
use clap::Parser;
use dispatch::run_command;
use error::ExitCodeExt;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let registry = tracing_subscriber::registry().with(filter);
    match cli.log_format {
        LogFormat::Text => registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init(),
    }

    let exit_code = match run_command(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            e.exit_code().as_i32()
        }
    };

    std::process::exit(exit_code);
}
