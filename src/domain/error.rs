//! Error types for the archive front end.
//!
//! This module defines the centralized error type [`ArchiveError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Most of these errors never reach the user: the loader catches and logs them so the
//! page degrades to its static skeleton. Only CLI-level failures (configuration, output
//! files) are reported with a non-zero exit code.

use thiserror::Error;

/// The main error type for archive front end operations.
///
/// # Examples
///
/// ```
/// use archive_front::ArchiveError;
///
/// fn validate_source(source: &str) -> Result<(), ArchiveError> {
///     if source.is_empty() {
///         return Err(ArchiveError::Config("source must not be empty".to_string()));
///     }
///     Ok(())
/// }
/// assert!(validate_source("").is_err());
/// ```
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// A resource read failed at the transport level.
    ///
    /// The request never produced a response (connection refused, missing file,
    /// DNS failure). The string names the resource and the underlying cause.
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// A resource answered with a non-success status.
    #[error("Resource {resource} returned status {status}")]
    Status {
        /// Resource path relative to the archive root.
        resource: String,
        /// Status code reported by the source.
        status: u16,
    },

    /// A resource payload is not valid JSON for its schema.
    #[error("Parse error in {resource}: {source}")]
    Parse {
        /// Resource path relative to the archive root.
        resource: String,
        /// Underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A presenter could not write its output.
    #[error("Render error: {0}")]
    Render(String),
}

/// A specialized `Result` type for archive front end operations.
pub type Result<T> = std::result::Result<T, ArchiveError>;
