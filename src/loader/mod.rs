//! Loading layer for the archive's static resources.
//!
//! # Modules
//!
//! - `source`: [`ResourceSource`] trait abstracting where resources live
//! - `directory`: local directory source
//! - `http`: deployed-site source over HTTP
//! - `archive`: concurrent, failure-tolerant snapshot assembly

pub mod archive;
pub mod directory;
pub mod http;
pub mod source;

pub use archive::{load_archive, try_load_archive, ResourcePaths};
pub use directory::DirectorySource;
pub use http::HttpSource;
pub use source::{Fetched, ResourceSource};

use crate::domain::error::Result;

/// Opens the source named by `location`.
///
/// `http://` and `https://` locations use [`HttpSource`]; anything else is read
/// as a directory path (with `~` expanded).
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn open_source(location: &str) -> Result<Box<dyn ResourceSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        Ok(Box::new(HttpSource::new(location)?))
    } else {
        let path = crate::infrastructure::expand_tilde(location);
        Ok(Box::new(DirectorySource::new(path)))
    }
}
