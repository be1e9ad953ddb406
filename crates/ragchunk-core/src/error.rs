//! Error types for chunking.

use thiserror::Error;

/// Result type alias using ChunkError.
pub type Result<T> = std::result::Result<T, ChunkError>;

/// Errors that can occur while configuring or running a chunker.
#[derive(Error, Debug)]
pub enum ChunkError {
    /// Invalid argument provided.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChunkError {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a stable error code for reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
        }
    }
}

/// Reject a zero window or cap.
pub fn ensure_positive(name: &str, value: usize) -> Result<()> {
    if value == 0 {
        return Err(ChunkError::invalid_argument(format!(
            "{} must be greater than 0",
            name
        )));
    }
    Ok(())
}
