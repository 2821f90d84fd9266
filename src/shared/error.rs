use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - BOM written, no vulnerability at or above the threshold
    Success = 0,
    /// The assembled BOM holds vulnerabilities at or above `--fail-on`
    FindingsAboveThreshold = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable input, file I/O error, bad config, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::FindingsAboveThreshold => write!(f, "Findings Above Threshold (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while assembling, encoding or writing a BOM.
///
/// Only input-shape, serialization and I/O problems surface here.
/// Missing fields and unknown algorithms never become errors.
#[derive(Debug, Error)]
pub enum BomError {
    #[error("Invalid scanner input: {details}\n\n💡 Hint: The scanner output must be a JSON object, usually of the form {{\"findings\": {{...}}}}")]
    InvalidInput { details: String },

    #[error("Failed to serialize BOM: {details}")]
    Serialization { details: String },

    #[error("Failed to parse BOM document: {details}\n\n💡 Hint: Only CycloneDX JSON documents can be decoded")]
    Deserialization { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Validation error for configuration and builder input
    #[error("Validation error: {message}")]
    Validation { message: String },
}
