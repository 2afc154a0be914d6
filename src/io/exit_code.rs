//! Exit codes for CLI operations following Unix conventions.
//!
//! # Exit Code Semantics
//!
//! - `0`: Success - operation completed (an empty diagram is still a success)
//! - `1`: General error - unspecified failure
//! - `3-125`: Specific recoverable errors
//! - `126-255`: Reserved by shell

use crate::error::GraphError;

/// Standard exit codes for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded (code 0)
    Success = 0,

    /// Unspecified error occurred (code 1)
    GeneralError = 1,

    /// Failed to parse files (code 4)
    ParseError = 4,

    /// File I/O error (code 5)
    IoError = 5,

    /// Configuration error (code 6)
    ConfigError = 6,

    /// Operation not supported (code 8)
    UnsupportedOperation = 8,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl ExitCode {
    /// Convert a `GraphError` to the appropriate exit code.
    pub fn from_error(error: &GraphError) -> Self {
        match error {
            GraphError::ParseError { .. } => ExitCode::ParseError,
            GraphError::FileRead { .. } => ExitCode::IoError,
            GraphError::ConfigError { .. } => ExitCode::ConfigError,
            GraphError::UnsupportedFileType { .. } => ExitCode::UnsupportedOperation,
            GraphError::General(_) => ExitCode::GeneralError,
        }
    }
}
