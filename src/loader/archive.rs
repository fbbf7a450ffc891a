//! Concurrent, failure-tolerant loading of the archive snapshot.
//!
//! Both resources are requested together. A transport failure on one side is
//! logged and read as "absent" without cancelling the other read; the snapshot
//! is only built when both reads came back with a success status and both
//! payloads parse. Every failure degrades to `None`.

use super::source::{Fetched, ResourceSource};
use crate::domain::error::{ArchiveError, Result};
use crate::domain::{ArchiveSnapshot, ArticleIndex, Stats};
use futures_util::future::join;
use serde::de::DeserializeOwned;

/// Default path of the article index relative to the archive root.
pub const DEFAULT_INDEX_PATH: &str = "api/articles/index.json";

/// Default path of the stats document relative to the archive root.
pub const DEFAULT_STATS_PATH: &str = "api/stats.json";

/// Resource paths the loader reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourcePaths {
    pub index: String,
    pub stats: String,
}

impl Default for ResourcePaths {
    fn default() -> Self {
        Self {
            index: DEFAULT_INDEX_PATH.to_string(),
            stats: DEFAULT_STATS_PATH.to_string(),
        }
    }
}

/// Loads the archive snapshot, logging and swallowing every failure.
///
/// Returns `None` when either resource is unavailable, reports a non-success
/// status, or fails to parse. The caller keeps running with an unpopulated page.
#[tracing::instrument(skip_all, fields(source = %source.describe()))]
pub async fn load_archive(
    source: &dyn ResourceSource,
    paths: &ResourcePaths,
) -> Option<ArchiveSnapshot> {
    match try_load_archive(source, paths).await {
        Ok(Some(snapshot)) => {
            tracing::info!(articles = snapshot.articles.len(), "loaded archive");
            Some(snapshot)
        }
        Ok(None) => None,
        Err(e) => {
            tracing::error!(error = %e, "failed to load archive data");
            None
        }
    }
}

/// Loads the archive snapshot, surfacing parse failures as errors.
///
/// Transport failures and non-success statuses yield `Ok(None)`, matching the
/// "skip population" behaviour; only a malformed payload from a successful
/// read is an `Err`.
///
/// # Errors
///
/// Returns [`ArchiveError::Parse`] when a payload is not valid for its schema.
pub async fn try_load_archive(
    source: &dyn ResourceSource,
    paths: &ResourcePaths,
) -> Result<Option<ArchiveSnapshot>> {
    let (index, stats) = join(source.fetch(&paths.index), source.fetch(&paths.stats)).await;

    let index = absent_on_error(index);
    let stats = absent_on_error(stats);

    let (Some(index), Some(stats)) = (index, stats) else {
        tracing::warn!("archive resources unavailable, leaving page unpopulated");
        return Ok(None);
    };

    let failures: Vec<ArchiveError> = [&index, &stats]
        .into_iter()
        .filter_map(Fetched::status_error)
        .collect();
    if !failures.is_empty() {
        for err in &failures {
            tracing::warn!(error = %err, "archive resource returned an error status");
        }
        return Ok(None);
    }

    let index: ArticleIndex = parse(&index)?;
    let stats: Stats = parse(&stats)?;

    Ok(Some(ArchiveSnapshot::new(stats, index.articles)))
}

fn absent_on_error(result: Result<Fetched>) -> Option<Fetched> {
    match result {
        Ok(fetched) => Some(fetched),
        Err(e) => {
            tracing::warn!(error = %e, "resource read failed");
            None
        }
    }
}

fn parse<T: DeserializeOwned>(fetched: &Fetched) -> Result<T> {
    serde_json::from_str(&fetched.body).map_err(|source| ArchiveError::Parse {
        resource: fetched.resource.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::collections::HashMap;

    enum Canned {
        Ok(&'static str),
        Status(u16),
        Fail,
    }

    struct CannedSource(HashMap<&'static str, Canned>);

    #[async_trait]
    impl ResourceSource for CannedSource {
        async fn fetch(&self, resource: &str) -> Result<Fetched> {
            let fetched = |status, body: &str| Fetched {
                resource: resource.to_string(),
                status,
                body: body.to_string(),
            };
            match self.0.get(resource) {
                Some(Canned::Ok(body)) => Ok(fetched(200, body)),
                Some(Canned::Status(code)) => Ok(fetched(*code, "")),
                Some(Canned::Fail) | None => Err(ArchiveError::Fetch("offline".into())),
            }
        }

        fn describe(&self) -> String {
            "canned".to_string()
        }
    }

    const INDEX: &str = r#"{"articles":[{"slug":"a","title":"A","confidence_score":0.4}]}"#;
    const STATS: &str = r#"{"article_count":1,"categories":[{"category":"Science","count":1}]}"#;

    fn source(index: Canned, stats: Canned) -> CannedSource {
        CannedSource(HashMap::from([
            (DEFAULT_INDEX_PATH, index),
            (DEFAULT_STATS_PATH, stats),
        ]))
    }

    #[tokio::test]
    async fn both_resources_build_snapshot() {
        let src = source(Canned::Ok(INDEX), Canned::Ok(STATS));
        let snapshot = load_archive(&src, &ResourcePaths::default()).await.unwrap();
        assert_eq!(snapshot.articles.len(), 1);
        assert_eq!(snapshot.stats.article_count, 1);
    }

    #[tokio::test]
    async fn one_transport_failure_skips_population() {
        let src = source(Canned::Ok(INDEX), Canned::Fail);
        assert!(load_archive(&src, &ResourcePaths::default()).await.is_none());
    }

    #[tokio::test]
    async fn error_status_skips_population() {
        let src = source(Canned::Status(500), Canned::Ok(STATS));
        let result = try_load_archive(&src, &ResourcePaths::default()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn both_error_statuses_skip_population() {
        let src = source(Canned::Status(404), Canned::Status(503));
        let result = try_load_archive(&src, &ResourcePaths::default()).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn malformed_payload_is_parse_error() {
        let src = source(Canned::Ok(INDEX), Canned::Ok("{not json"));
        let result = try_load_archive(&src, &ResourcePaths::default()).await;
        assert!(matches!(result, Err(ArchiveError::Parse { .. })));
        assert!(load_archive(&src, &ResourcePaths::default()).await.is_none());
    }
}
