//! Export of configuration entries into the process environment.
//!
//! Responsibilities:
//! - Copy entries into the environment under their upper-cased names.
//! - Reject names and values the platform cannot represent, before any
//!   variable is set.
//!
//! Does NOT handle:
//! - Restoring previous values; exported variables stay set.
//!
//! Invariants:
//! - Either every entry is exported or none is.
//! - Existing variables with the same name are overwritten.

use crate::error::ConfFileError;

/// Checks that `name` can be used as an environment variable name.
pub fn validate_env_name(name: &str) -> Result<(), ConfFileError> {
    if name.is_empty() || name.contains(['=', '\0']) {
        return Err(ConfFileError::InvalidEnvironmentName(name.to_string()));
    }
    Ok(())
}

/// Sets one environment variable per entry, named by the upper-cased key.
///
/// The process environment is global; callers must not run this while other
/// threads read or write environment variables.
pub fn export_entries<'a, I>(entries: I) -> Result<usize, ConfFileError>
where
    I: IntoIterator<Item = (&'a String, &'a String)>,
{
    let mut vars = Vec::new();
    for (key, value) in entries {
        let name = key.to_uppercase();
        validate_env_name(&name)?;
        if value.contains('\0') {
            return Err(ConfFileError::InvalidEnvironmentValue(name));
        }
        vars.push((name, value));
    }

    for (name, value) in &vars {
        tracing::trace!(name = %name, "Exporting environment variable");
        // SAFETY: names and values were checked above, and the caller
        // guarantees no concurrent environment access.
        unsafe {
            std::env::set_var(name, value);
        }
    }

    Ok(vars.len())
}
