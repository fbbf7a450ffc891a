//! Resource source abstraction.
//!
//! This module defines the [`ResourceSource`] trait that abstracts over where the
//! archive's static resources live. The loader only needs one operation: read a
//! resource by its path relative to the archive root and report whether the read
//! succeeded.
//!
//! # Implementations
//!
//! - [`DirectorySource`](super::DirectorySource): a local build of the static site
//! - [`HttpSource`](super::HttpSource): a deployed static site

use crate::domain::error::{ArchiveError, Result};
use async_trait::async_trait;

/// Outcome of a read that reached the source.
///
/// A transport failure is an `Err` from [`ResourceSource::fetch`]; a read that got
/// an answer, successful or not, is a `Fetched`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched {
    /// Resource path relative to the archive root.
    pub resource: String,
    /// Status code as reported by the source (HTTP status, or 200/404 for files).
    pub status: u16,
    /// Raw payload.
    pub body: String,
}

impl Fetched {
    /// Whether the status is in the 2xx success range.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// The [`ArchiveError::Status`] for this read, or `None` on success.
    #[must_use]
    pub fn status_error(&self) -> Option<ArchiveError> {
        (!self.is_success()).then(|| ArchiveError::Status {
            resource: self.resource.clone(),
            status: self.status,
        })
    }
}

/// Read-only access to the archive's static resources.
#[async_trait]
pub trait ResourceSource: Send + Sync {
    /// Reads one resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the read could not be performed at all. A resource
    /// that the source reports as missing is an `Ok` with a non-success status.
    async fn fetch(&self, resource: &str) -> Result<Fetched>;

    /// Human-readable location for logs.
    fn describe(&self) -> String;
}
