//! Error types for the diagram extraction system
//!
//! Name resolution and relationship extraction never fail: every step has a
//! syntactic fallback. The errors here belong to the surroundings (reading
//! files, building parsers, loading configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for host operations
#[derive(Error, Debug)]
pub enum GraphError {
    /// File system errors
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Parsing errors
    #[error("Failed to parse {language} file '{path}': {reason}")]
    ParseError {
        path: PathBuf,
        language: String,
        reason: String,
    },

    #[error("Unsupported file type '{extension}' for file '{path}'. Supported types: {supported}")]
    UnsupportedFileType {
        path: PathBuf,
        extension: String,
        supported: String,
    },

    /// Configuration errors
    #[error("Invalid configuration: {reason}")]
    ConfigError { reason: String },

    /// General errors for cases where we need to preserve existing behavior
    #[error("{0}")]
    General(String),
}

impl GraphError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> String {
        match self {
            Self::FileRead { .. } => "FILE_READ_ERROR",
            Self::ParseError { .. } => "PARSE_ERROR",
            Self::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            Self::ConfigError { .. } => "CONFIG_ERROR",
            Self::General(_) => "GENERAL_ERROR",
        }
        .to_string()
    }

    /// Get recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<&'static str> {
        match self {
            Self::FileRead { .. } => vec![
                "Check that the file exists and you have read permissions",
                "Ensure the file is not locked by another process",
            ],
            Self::UnsupportedFileType { .. } => vec![
                "Only C# sources are analyzed",
                "Add the extension to `extensions` in .umlgraph/settings.toml",
            ],
            Self::ConfigError { .. } => vec![
                "Run 'umlgraph init --force' to regenerate the configuration",
                "Check UMLGRAPH_* environment variables for typos",
            ],
            Self::ParseError { .. } => {
                vec!["The file could not be turned into a syntax tree; check its encoding"]
            }
            _ => vec![],
        }
    }
}

/// Errors specific to parsing operations
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to initialize {language} parser: {reason}")]
    ParserInit { language: String, reason: String },

    #[error("Parser produced no syntax tree")]
    NoTree,
}

/// Result type alias for host operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Result type alias for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Helper trait for adding context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context(self, msg: &str) -> Result<T, GraphError>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn context(self, msg: &str) -> Result<T, GraphError> {
        self.map_err(|e| GraphError::General(format!("{msg}: {e}")))
    }
}
