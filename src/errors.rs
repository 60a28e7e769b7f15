//! Error types
//!
//! Every failure the engine or its I/O layer can report. Degenerate
//! similarity (two empty word sets) is deliberately absent: it scores 0.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TextRankError>;

/// Errors produced while summarizing a document
#[derive(Debug, Error)]
pub enum TextRankError {
    /// Summary percentage outside `(0, 100]`
    #[error("invalid summary percentage {0}: must be greater than 0 and at most 100")]
    InvalidPercentage(f64),

    /// Tokenization produced no sentences
    #[error("document contains no sentences")]
    EmptyDocument,

    /// Selection count outside `[1, available]`
    #[error("cannot select {requested} sentences from {available}")]
    InvalidCount { requested: usize, available: usize },

    /// A ranking or formatting parameter is out of range
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// Source unreadable or sink unwritable
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input is not valid UTF-8
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// Summary could not be encoded as JSON
    #[error("failed to encode summary as JSON: {0}")]
    Encode(#[from] serde_json::Error),

    /// Configuration file failed to parse
    #[error("invalid configuration in {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl TextRankError {
    /// Build an [`TextRankError::InvalidParameter`]
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }

    /// Process exit status for this error kind (always nonzero)
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidPercentage(_) | Self::InvalidParameter { .. } => 2,
            Self::EmptyDocument => 3,
            Self::Io { .. } => 4,
            Self::Decode { .. } => 5,
            Self::Config { .. } => 6,
            Self::InvalidCount { .. } | Self::Encode(_) => 1,
        }
    }
}
