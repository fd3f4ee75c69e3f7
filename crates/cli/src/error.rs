//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map `ConfFileError` variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Exit status of programs started by `exec` (passed through unchanged).

use conffile::ConfFileError;

/// Structured exit codes for conffile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O failures, bad arguments, unwritable entries.
    GeneralError = 1,

    /// Parse error - the file contains a line that is not `KEY=VALUE`.
    ///
    /// Scripts should fix the file; retrying will not help.
    ParseError = 2,

    /// A required key is missing from the file.
    MissingKey = 3,

    /// The requested key is not present.
    NotFound = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfFileError> for ExitCode {
    fn from(err: &ConfFileError) -> Self {
        match err {
            ConfFileError::Parse { .. } => ExitCode::ParseError,
            ConfFileError::MissingKey { .. } => ExitCode::MissingKey,
            ConfFileError::KeyNotFound(_) => ExitCode::NotFound,
            ConfFileError::NoPath
            | ConfFileError::Io { .. }
            | ConfFileError::Unwritable { .. }
            | ConfFileError::InvalidEnvironmentName(_)
            | ConfFileError::InvalidEnvironmentValue(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no `ConfFileError` is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfFileError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::ParseError.as_i32(), 2);
        assert_eq!(ExitCode::MissingKey.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
    }

    #[test]
    fn test_from_conffile_error() {
        let parse = ConfFileError::Parse {
            path: "a.conf".to_string(),
            line_number: 1,
            line: "x".to_string(),
        };
        assert_eq!(ExitCode::from(&parse), ExitCode::ParseError);

        let missing = ConfFileError::MissingKey {
            key: "A".to_string(),
            path: "a.conf".to_string(),
        };
        assert_eq!(ExitCode::from(&missing), ExitCode::MissingKey);

        let not_found = ConfFileError::KeyNotFound("a".to_string());
        assert_eq!(ExitCode::from(&not_found), ExitCode::NotFound);

        assert_eq!(ExitCode::from(&ConfFileError::NoPath), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), ConfFileError> = Err(ConfFileError::KeyNotFound("a".to_string()));
        let err = result.context("Failed to read key").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_plain_anyhow_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
