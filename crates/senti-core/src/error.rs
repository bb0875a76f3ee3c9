//! Centralized error types for senti.

use thiserror::Error;

/// Main error type for senti operations.
#[derive(Error, Debug)]
pub enum SentiError {
    #[error("Lexicon not found: {0}")]
    LexiconNotFound(String),

    #[error("Malformed lexicon entry at line {line}: {reason}")]
    MalformedLexicon { line: usize, reason: String },

    #[error("Lexicon is empty")]
    EmptyLexicon,

    #[error("Lexicon download failed: {0}")]
    Download(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal scoring fault. Scoring is total over strings, so this is not
    /// produced by the bundled analyzer.
    #[error("Scoring failed: {0}")]
    Scoring(String),
}

/// Result type for senti operations.
pub type SentiResult<T> = Result<T, SentiError>;

impl SentiError {
    /// Create a malformed lexicon error.
    pub fn malformed(line: usize, reason: impl Into<String>) -> Self {
        Self::MalformedLexicon {
            line,
            reason: reason.into(),
        }
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
