//! Shell-style configuration files.
//!
//! This crate reads and writes simple `KEY=VALUE` configuration files of the
//! kind found under `/etc/default`: keys are case-insensitive, `#` starts a
//! comment line, and files are written back with upper-case keys in sorted
//! order.
//!
//! ```no_run
//! use conffile::{ConfFile, ConfSchema};
//!
//! let schema = ConfSchema::new("/etc/default/myapp").with_required(["name", "port"]);
//! let mut conf = ConfFile::open(schema)?;
//! println!("{}", conf.get("name")?);
//! conf.set("port", "8080");
//! conf.write()?;
//! # Ok::<(), conffile::ConfFileError>(())
//! ```

mod env;
mod error;
mod parser;
mod schema;
mod store;

pub use env::{export_entries, validate_env_name};
pub use error::ConfFileError;
pub use parser::{normalize_key, parse_str, render};
pub use schema::ConfSchema;
pub use store::ConfFile;
