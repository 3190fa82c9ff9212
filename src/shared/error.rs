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
    /// Success
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (engine error, storage error, file I/O error, etc.)
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
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for trust analysis.
///
/// Uses thiserror to derive Display and Error traits automatically.
/// Variants that surface through the REST API keep their message on a
/// single plain line; variants that only reach the CLI carry a hint.
#[derive(Debug, Error)]
pub enum TrustLensError {
    /// Rejected product submission (bad name, URL, or description)
    #[error("Invalid product submission: {message}")]
    Validation { message: String },

    /// Lookup by an id that matches no stored product
    #[error("Product not found")]
    ProductNotFound,

    /// Database failure; the underlying cause stays out of API responses
    #[error("Storage operation failed")]
    Storage {
        #[source]
        source: anyhow::Error,
    },

    #[error("Invalid configuration: {message}\n\n💡 Hint: {hint}")]
    Config { message: String, hint: String },

    #[error("Failed to write report: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ReportWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}

impl TrustLensError {
    /// Wrap an adapter failure as a storage error.
    pub fn storage(source: anyhow::Error) -> Self {
        TrustLensError::Storage { source }
    }
}
