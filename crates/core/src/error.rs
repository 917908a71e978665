//! Error types for report construction and export
//!
//! Every failure in the report pipeline is a `ReportError`.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//! The `Display` text of the validation variants is part of the public
//! contract: callers match on it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for report operations
pub type ReportResult<T> = std::result::Result<T, ReportError>;

/// Error types for the report generator
#[derive(Debug, Error)]
pub enum ReportError {
    /// A string field is outside its allowed length range
    #[error("The {owner}:{field} must have a length between {min} and {max} characters. Was {actual} -> {value}")]
    InvalidLength {
        /// Entity owning the field (e.g. "TestCase")
        owner: String,
        /// Field name (e.g. "name")
        field: String,
        /// Minimum allowed length (inclusive)
        min: usize,
        /// Maximum allowed length (inclusive)
        max: usize,
        /// Actual length in characters
        actual: usize,
        /// The rejected value
        value: String,
    },

    /// A key does not match the required pattern
    #[error("{owner} keys need to be structured following this pattern: {pattern}")]
    InvalidPattern {
        /// Entity owning the key (e.g. "Constant")
        owner: String,
        /// The regular expression the key must match
        pattern: String,
    },

    /// A node cannot be attached to its parent
    #[error("{0}")]
    InvalidArgument(String),

    /// Artifact source is missing or not a regular file
    #[error("File does not exist or path does not point to a file: {}", path.display())]
    ArtifactNotFound {
        /// The path that was checked
        path: PathBuf,
    },

    /// I/O error (reading artifacts, writing reports)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Schema could not be loaded or compiled
    #[error("Schema error: {0}")]
    Schema(String),

    /// Archive operation failed
    #[error("Archive error: {0}")]
    Archive(String),

    /// Archive entry could not be inflated
    #[error("Compression error: {0}")]
    Compression(String),

    /// Requested entry is not part of the archive
    #[error("Missing entry in report archive: {0}")]
    MissingEntry(String),

    /// Configuration could not be read or is invalid
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ReportError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }

    /// Create a schema error
    pub fn schema(msg: impl Into<String>) -> Self {
        Self::Schema(msg.into())
    }

    /// Create an archive error
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }

    /// Create a compression error
    pub fn compression(msg: impl Into<String>) -> Self {
        Self::Compression(msg.into())
    }

    /// Create a missing entry error
    pub fn missing_entry(name: impl Into<String>) -> Self {
        Self::MissingEntry(name.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// True for the "file does not exist" family of errors.
    ///
    /// Artifact constructors report a missing file either as
    /// `ArtifactNotFound` (checked up front) or as an `Io` error with
    /// `NotFound` kind (file vanished between check and read).
    pub fn is_not_found(&self) -> bool {
        match self {
            ReportError::ArtifactNotFound { .. } => true,
            ReportError::Io(e) => e.kind() == io::ErrorKind::NotFound,
            _ => false,
        }
    }
}
