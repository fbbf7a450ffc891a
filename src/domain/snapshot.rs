//! The in-memory archive snapshot assembled after a successful load.

use super::article::Article;
use super::lenient;
use super::stats::Stats;
use serde::{Deserialize, Serialize};

/// Contents of `index.json`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ArticleIndex {
    #[serde(default, deserialize_with = "lenient::list")]
    pub articles: Vec<Article>,
}

/// Stats and articles loaded once per session.
///
/// Built by the loader and never mutated afterwards; the application state keeps
/// it behind an `Arc` and hands out shared references to renderers and search.
#[derive(Debug, Clone, Default)]
pub struct ArchiveSnapshot {
    pub stats: Stats,
    pub articles: Vec<Article>,
}

impl ArchiveSnapshot {
    #[must_use]
    pub const fn new(stats: Stats, articles: Vec<Article>) -> Self {
        Self { stats, articles }
    }

    /// Returns the article with the highest confidence score.
    ///
    /// Missing scores count as zero. Ties keep the earliest article because the
    /// fold only replaces the current best on a strictly greater score.
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_front::domain::{ArchiveSnapshot, Article, Stats};
    ///
    /// let articles = [50.0, 90.0, 90.0, 30.0]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, score)| {
    ///         let mut a = Article::new(format!("a{i}"), format!("Article {i}"));
    ///         a.confidence_score = Some(*score);
    ///         a
    ///     })
    ///     .collect();
    /// let snapshot = ArchiveSnapshot::new(Stats::default(), articles);
    /// assert_eq!(snapshot.featured().unwrap().slug, "a1");
    /// ```
    #[must_use]
    pub fn featured(&self) -> Option<&Article> {
        let (first, rest) = self.articles.split_first()?;
        Some(rest.iter().fold(first, |best, current| {
            if current.raw_score() > best.raw_score() {
                current
            } else {
                best
            }
        }))
    }
}
