/*!
 * Error types for the cuecheck application.
 *
 * This module contains custom error types for different parts of the
 * application, using the thiserror crate for ergonomic error definitions.
 * Note the deliberate gaps: the normalizer, the aligner, and the renderer
 * are total functions and carry no error type at all.
 */

use thiserror::Error;

/// Errors that can occur while reading a script document
#[derive(Error, Debug)]
pub enum ScriptError {
    /// The underlying stream could not be read
    #[error("Failed to read script document: {0}")]
    Io(#[from] std::io::Error),

    /// The configured speaker header pattern is not a valid regex
    #[error("Invalid speaker header pattern: {0}")]
    SpeakerPattern(String),
}

/// Main application error type that wraps all other errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Error from script parsing
    #[error("Script error: {0}")]
    Script(#[from] ScriptError),

    /// The requested speaker does not appear in the script
    #[error("Speaker '{0}' does not appear in the script")]
    UnknownSpeaker(String),

    /// Error in the configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Any other error
    #[error("Unknown error: {0}")]
    Unknown(String),
}

// Utility functions for error conversion
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unknown(error.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        Self::Script(ScriptError::Io(error))
    }
}
