//! Error types for presubmit-checks.
//!
//! This module defines all errors that can occur during operation.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in presubmit-checks.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Subprocess errors
    // =========================================================================
    /// An empty argv was handed to the executor.
    #[error("Empty command line")]
    EmptyCommand,

    /// The subprocess could not be launched or waited on.
    #[error("Failed to launch '{command}'")]
    Launch {
        /// The command that could not be launched.
        command: String,
        /// Source error.
        #[source]
        source: std::io::Error,
    },

    // =========================================================================
    // Internal errors
    // =========================================================================
    /// Internal error (should never happen).
    #[error("Internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl Error {
    /// Creates a new launch error for the given command.
    pub fn launch(command: impl Into<String>, source: std::io::Error) -> Self {
        Self::Launch {
            command: command.into(),
            source,
        }
    }

    /// Creates a new internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}
