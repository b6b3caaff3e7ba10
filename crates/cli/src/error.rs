//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Codes 2 and 3 are reserved.

use rancher_client::ClientError;

/// Structured exit codes for rancher-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O failures, bad flags, configuration problems.
    GeneralError = 1,

    /// No record type matches the requested name.
    ///
    /// Scripts should check the name against `rancher-cli schemas`.
    UnknownType = 4,

    /// The document failed to parse or decode, or carried unknown fields in strict mode.
    ///
    /// Scripts should fix the input and not retry.
    ValidationFailed = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::UnknownType(_) => ExitCode::UnknownType,
            e if e.is_validation_error() => ExitCode::ValidationFailed,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ClientError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
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
        assert_eq!(ExitCode::UnknownType.as_i32(), 4);
        assert_eq!(ExitCode::ValidationFailed.as_i32(), 5);
    }

    #[test]
    fn test_from_client_error_unknown_type() {
        let err = ClientError::UnknownType("nope".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::UnknownType);
    }

    #[test]
    fn test_from_client_error_validation() {
        let err = ClientError::UnknownFields {
            type_name: "cluster",
            fields: vec!["bogus".to_string()],
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationFailed);

        let err = ClientError::NotAnObject {
            type_name: "cluster",
            found: "array",
        };
        assert_eq!(ExitCode::from(&err), ExitCode::ValidationFailed);

        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(
            ExitCode::from(&ClientError::Json(json_err)),
            ExitCode::ValidationFailed
        );
    }

    #[test]
    fn test_from_client_error_unsupported_format() {
        let err = ClientError::UnsupportedFormat("a.toml".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::GeneralError);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let result: Result<(), ClientError> = Err(ClientError::UnknownType("x".to_string()));
        let err = result.context("Failed to resolve record type").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::UnknownType);
    }

    #[test]
    fn test_non_client_error_is_general() {
        let err = anyhow::anyhow!("disk on fire");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
