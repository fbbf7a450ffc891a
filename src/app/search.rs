//! Substring search over the loaded article list.
//!
//! Matching is a case-insensitive substring test against the title, excerpt
//! and category; any one field matching is enough. The scan is linear and
//! keeps the original article order.

use crate::domain::Article;

/// Returns the articles matching `query`, in index order.
///
/// The query is trimmed first; an empty query matches nothing.
///
/// # Examples
///
/// ```
/// use archive_front::app::search::search_articles;
/// use archive_front::domain::Article;
///
/// let mut safety = Article::new("safety", "Alignment notes");
/// safety.excerpt = Some("A primer on AI safety".to_string());
/// let articles = vec![
///     Article::new("ethics", "ai ethics"),
///     Article::new("bread", "Sourdough"),
///     safety,
/// ];
///
/// let hits = search_articles(&articles, "AI");
/// let slugs: Vec<&str> = hits.iter().map(|a| a.slug.as_str()).collect();
/// assert_eq!(slugs, ["ethics", "safety"]);
/// ```
#[must_use]
pub fn search_articles<'a>(articles: &'a [Article], query: &str) -> Vec<&'a Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    articles
        .iter()
        .filter(|article| matches_article(article, &needle))
        .collect()
}

/// Tests one article against an already lowercased needle.
fn matches_article(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle)
        || article
            .excerpt
            .as_deref()
            .is_some_and(|excerpt| excerpt.to_lowercase().contains(needle))
        || article.category.to_lowercase().contains(needle)
}
