//! Unified error types for love-theorem.
//!
//! This module provides a single [`LoveTheoremError`] enum covering every
//! failure the library can report. Only two kinds come out of the analysis
//! itself:
//!
//! - [`EmptyInput`](LoveTheoremError::EmptyInput) - the transcript produced no
//!   messages at all
//! - [`InsufficientParticipants`](LoveTheoremError::InsufficientParticipants) -
//!   fewer than two distinct senders
//!
//! The remaining variants belong to the outer surfaces (reading files, writing
//! JSON/CSV, picking an output format).
//!
//! Malformed transcript lines are never errors: the parser drops them.

use std::io;

use thiserror::Error;

/// A specialized [`Result`] type for love-theorem operations.
///
/// # Example
///
/// ```rust
/// use love_theorem::error::Result;
/// use love_theorem::Message;
///
/// fn my_function() -> Result<Vec<Message>> {
///     Ok(vec![])
/// }
/// ```
pub type Result<T> = std::result::Result<T, LoveTheoremError>;

/// The error type for all love-theorem operations.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoveTheoremError {
    /// The transcript yielded zero messages with a valid timestamp.
    #[error("No messages could be read from the transcript")]
    EmptyInput,

    /// Fewer than two distinct senders were found.
    ///
    /// `found` is the number of distinct senders that were present (0 or 1).
    #[error("Need a two-person conversation, found {found} participant(s)")]
    InsufficientParticipants {
        /// Number of distinct senders in the input
        found: usize,
    },

    /// An I/O error occurred while reading a transcript or writing output.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[cfg(feature = "json-output")]
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing error.
    #[cfg(feature = "csv-output")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// UTF-8 encoding error.
    #[error("UTF-8 encoding error in {context}: {source}")]
    Utf8 {
        /// Description of where the error occurred
        context: String,
        /// The underlying UTF-8 error
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An output format or file extension was not recognized.
    #[error("Invalid {format} format: {message}")]
    InvalidFormat {
        /// What kind of format was expected
        format: &'static str,
        /// Description of what's wrong
        message: String,
    },
}

impl From<std::string::FromUtf8Error> for LoveTheoremError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        LoveTheoremError::Utf8 {
            context: "output conversion".to_string(),
            source: err,
        }
    }
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl LoveTheoremError {
    /// Creates an insufficient-participants error.
    pub fn insufficient_participants(found: usize) -> Self {
        LoveTheoremError::InsufficientParticipants { found }
    }

    /// Creates an invalid format error.
    pub fn invalid_format(format: &'static str, message: impl Into<String>) -> Self {
        LoveTheoremError::InvalidFormat {
            format,
            message: message.into(),
        }
    }

    /// Returns `true` if this is an empty-input error.
    pub fn is_empty_input(&self) -> bool {
        matches!(self, LoveTheoremError::EmptyInput)
    }

    /// Returns `true` if the input did not contain two participants.
    pub fn is_insufficient_participants(&self) -> bool {
        matches!(self, LoveTheoremError::InsufficientParticipants { .. })
    }

    /// Returns `true` if this is an IO error.
    pub fn is_io(&self) -> bool {
        matches!(self, LoveTheoremError::Io(_))
    }

    /// Returns `true` if this is an invalid format error.
    pub fn is_invalid_format(&self) -> bool {
        matches!(self, LoveTheoremError::InvalidFormat { .. })
    }

    /// Text suitable for showing to the person who uploaded the transcript.
    ///
    /// The two analysis failures get friendly wording; everything else falls
    /// back to the `Display` output.
    pub fn user_message(&self) -> String {
        match self {
            LoveTheoremError::EmptyInput => {
                "Could not read any messages. Make sure the file is a WhatsApp chat export."
                    .to_string()
            }
            LoveTheoremError::InsufficientParticipants { .. } => {
                "Need a two-person conversation to calculate a score.".to_string()
            }
            other => other.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
