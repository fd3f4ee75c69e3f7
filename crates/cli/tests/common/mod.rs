//! Shared test utilities for conffile integration tests.
//!
//! Invariants / Assumptions:
//! - Every command built here ignores `CONFFILE_*` and `RUST_LOG` from the host.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Returns a hermetic `conffile` command.
pub fn conffile_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("conffile");
    cmd.env_remove("CONFFILE_PATH")
        .env_remove("CONFFILE_REQUIRED")
        .env_remove("RUST_LOG");
    cmd
}

/// Returns a hermetic `conffile` command pointed at `path`.
pub fn conffile_cmd_for(path: &Path) -> Command {
    let mut cmd = conffile_cmd();
    cmd.arg("--file").arg(path);
    cmd
}

/// Creates a temp directory holding `app.conf` with `contents`.
#[allow(dead_code)]
pub fn setup_conf(contents: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let path = temp_dir.path().join("app.conf");
    std::fs::write(&path, contents).expect("Failed to write config file");
    (temp_dir, path)
}
