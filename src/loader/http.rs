//! Resource source backed by a deployed static site.

use super::source::{Fetched, ResourceSource};
use crate::domain::error::{ArchiveError, Result};
use async_trait::async_trait;

/// Reads resources over HTTP relative to a base URL.
#[derive(Debug, Clone)]
pub struct HttpSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    /// Creates a source rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ArchiveError::Config(format!("failed to build HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    fn url_for(&self, resource: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            resource.trim_start_matches("./")
        )
    }
}

#[async_trait]
impl ResourceSource for HttpSource {
    async fn fetch(&self, resource: &str) -> Result<Fetched> {
        let url = self.url_for(resource);
        tracing::debug!(url = %url, "requesting resource");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ArchiveError::Fetch(format!("{url}: {e}")))?;
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| ArchiveError::Fetch(format!("{url}: {e}")))?;

        Ok(Fetched {
            resource: resource.to_string(),
            status,
            body,
        })
    }

    fn describe(&self) -> String {
        self.base_url.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_and_resource_with_one_slash() {
        let source = HttpSource::new("https://archive.example/").unwrap();
        assert_eq!(
            source.url_for("./api/stats.json"),
            "https://archive.example/api/stats.json"
        );
        let bare = HttpSource::new("https://archive.example").unwrap();
        assert_eq!(
            bare.url_for("api/articles/index.json"),
            "https://archive.example/api/articles/index.json"
        );
    }
}
