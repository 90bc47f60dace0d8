//! Error types for the seqdb CLI
//!
//! Errors are user-facing; messages say what went wrong and what to check.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// Error type for CLI operations
#[derive(Error, Debug)]
pub enum CliError {
    /// File system operation failed
    #[error("File operation failed: {0}. Check the path and file permissions.")]
    Io(#[from] std::io::Error),

    /// A flag value could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Statistics serialization failed
    #[error("Failed to serialize statistics: {0}")]
    Json(#[from] serde_json::Error),

    /// Error from the common utilities
    #[error(transparent)]
    Common(#[from] seqdb_common::SeqdbError),

    /// Generic anyhow error wrapper
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
