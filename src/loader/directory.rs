//! Resource source backed by a local directory.

use super::source::{Fetched, ResourceSource};
use crate::domain::error::{ArchiveError, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Reads resources from a directory holding a build of the static site.
///
/// A missing file is reported as status 404 so it behaves like a deployed site;
/// any other I/O failure is a transport error.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl ResourceSource for DirectorySource {
    async fn fetch(&self, resource: &str) -> Result<Fetched> {
        let path = self.root.join(resource.trim_start_matches("./"));
        tracing::debug!(path = ?path, "reading resource file");

        match tokio::fs::read_to_string(&path).await {
            Ok(body) => Ok(Fetched {
                resource: resource.to_string(),
                status: 200,
                body,
            }),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Fetched {
                resource: resource.to_string(),
                status: 404,
                body: String::new(),
            }),
            Err(e) => Err(ArchiveError::Fetch(format!("{}: {e}", path.display()))),
        }
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}
