//! Application error types.
//!
//! Covers the I/O side of the crate: reading corpus sources, loading and
//! writing the compiled document, and configuration. Query failures are
//! values of [`crate::bible::LookupError`] instead.

use std::path::PathBuf;

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types with specific context for actionable debugging
#[derive(Debug, Error)]
pub enum Error {
    /// IO error with path context
    #[error("IO error at {path:?}: {source}")]
    Io {
        /// The underlying IO error.
        source: std::io::Error,
        /// File path where the error occurred, if known.
        path: Option<PathBuf>,
    },

    /// JSON (de)serialization error with path context
    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        /// The underlying serde error.
        source: serde_json::Error,
        /// File being read or written, if known.
        path: Option<PathBuf>,
    },

    /// Corpus source problem (nothing to ingest, bad input directory)
    #[error("Corpus error: {0}")]
    Corpus(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },
}

impl Error {
    /// Create an IO error with path context
    pub fn io(source: std::io::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Io { source, path: path.into() }
    }

    /// Create a JSON error with path context
    pub fn json(source: serde_json::Error, path: impl Into<Option<PathBuf>>) -> Self {
        Self::Json { source, path: path.into() }
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}
