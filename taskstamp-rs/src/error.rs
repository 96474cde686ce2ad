//! Error types and exit codes for taskstamp.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
    pub const INVALID_ARGUMENT: i32 = 3;
    pub const PARTIAL_FAILURE: i32 = 4;
}

/// Main error type for taskstamp operations.
#[derive(Error, Debug)]
pub enum TaskError {
    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Vault not found at: {0}")]
    VaultNotFound(PathBuf),

    #[error("Invalid date format '{0}'. Use YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {path}: {message}")]
    FileRead { path: PathBuf, message: String },

    #[error("Failed to write {path}: {message}")]
    FileWrite { path: PathBuf, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Glob pattern error: {0}")]
    GlobPattern(#[from] glob::PatternError),
}

impl TaskError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            TaskError::ConfigNotFound(_) | TaskError::ConfigError(_) | TaskError::VaultNotFound(_) => {
                exit_code::CONFIG_ERROR
            }
            TaskError::InvalidDate(_) | TaskError::InvalidArgument(_) => exit_code::INVALID_ARGUMENT,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for taskstamp operations.
pub type Result<T> = std::result::Result<T, TaskError>;

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    Success,
    PartialFailure,
}

impl ExitCode {
    /// Convert to exit code integer.
    pub fn code(self) -> i32 {
        match self {
            ExitCode::Success => exit_code::SUCCESS,
            ExitCode::PartialFailure => exit_code::PARTIAL_FAILURE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(TaskError::ConfigError("x".into()).exit_code(), exit_code::CONFIG_ERROR);
        assert_eq!(
            TaskError::VaultNotFound(PathBuf::from("/nope")).exit_code(),
            exit_code::CONFIG_ERROR
        );
        assert_eq!(TaskError::InvalidDate("2025-13-01".into()).exit_code(), exit_code::INVALID_ARGUMENT);
        let io = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        assert_eq!(TaskError::from(io).exit_code(), exit_code::GENERAL_ERROR);
    }

    #[test]
    fn test_invalid_date_message() {
        let err = TaskError::InvalidDate("tomorrow".into());
        assert_eq!(err.to_string(), "Invalid date format 'tomorrow'. Use YYYY-MM-DD");
    }
}
