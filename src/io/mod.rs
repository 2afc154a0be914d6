//! Input/Output handling for the CLI.
//!
//! This module provides:
//! - Output format selection (PlantUML text, JSON)
//! - Consistent error handling and exit codes

pub mod exit_code;
pub mod format;

pub use exit_code::ExitCode;
pub use format::{ErrorDetails, JsonResponse, OutputFormat};
