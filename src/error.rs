//! Error types for amp-message.

use thiserror::Error;

/// Main error type for all amp-message operations.
#[derive(Debug, Error)]
pub enum AmpError {
    /// JSON serialization failed for a value passed to the JSON
    /// argument constructor.
    #[error("JSON encode error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A message holds more arguments than one frame can carry.
    ///
    /// The frame header stores the argument count in 4 bits, so a
    /// single message is limited to 15 arguments.
    #[error("message has {given} arguments, frame limit is {max}")]
    ArgOverflow { given: usize, max: usize },

    /// Malformed frame buffer or malformed tagged element.
    #[error("decode error: {0}")]
    Decode(String),
}

/// Result type alias using AmpError.
pub type Result<T> = std::result::Result<T, AmpError>;
