//! `list` command and its output formats.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use conffile::{ConfFile, ConfSchema};
use serde::Serialize;

use super::open_store;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `KEY=value` lines, the same form the file is written in
    Shell,
    /// JSON array of `{"key", "value"}` objects in key order, keys upper-case
    Json,
    /// Aligned two-column table
    Table,
}

#[derive(Serialize)]
struct EntryDisplay<'a> {
    key: String,
    value: &'a str,
}

pub fn run(schema: ConfSchema, format: OutputFormat) -> Result<()> {
    let conf = open_store(schema)?;
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_entries(&mut out, &conf, format)?;
    Ok(())
}

pub fn write_entries<W: Write>(out: &mut W, conf: &ConfFile, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Shell => {
            out.write_all(conf.render()?.as_bytes())?;
        }
        OutputFormat::Json => {
            let entries: Vec<EntryDisplay> = conf
                .iter()
                .map(|(key, value)| EntryDisplay {
                    key: key.to_uppercase(),
                    value,
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if conf.is_empty() {
                writeln!(out, "No entries.")?;
                return Ok(());
            }
            let width = conf
                .iter()
                .map(|(key, _)| key.to_uppercase().chars().count())
                .max()
                .unwrap_or(0)
                .max("KEY".len());
            writeln!(out, "{:<width$}  VALUE", "KEY")?;
            for (key, value) in conf.iter() {
                writeln!(out, "{:<width$}  {}", key.to_uppercase(), value)?;
            }
        }
    }
    Ok(())
}
