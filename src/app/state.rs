//! Application state: the loaded archive plus transient UI state.
//!
//! [`AppState`] is the single owner of the archive snapshot. It is installed
//! once, on the first successful load, and afterwards only read: renderers and
//! the search engine receive it explicitly instead of reaching for globals.
//!
//! # State Components
//!
//! - **Snapshot**: stats + articles, shared behind an `Arc`
//! - **Query**: current search input text
//! - **Featured**: what the featured slot shows right now
//! - **Notifier**: the single toast slot
//! - **Settings**: article page URL and animation timing

use crate::app::animation::DEFAULT_COUNTER_DURATION_MS;
use crate::app::notifier::{Notifier, ToastTimings};
use crate::app::search::search_articles;
use crate::domain::{ArchiveSnapshot, Article};
use crate::ui::viewmodel::{CategoryView, FeaturedView, StatsView};
use chrono::Duration;
use std::sync::Arc;

/// Default page that renders one article.
pub const DEFAULT_ARTICLE_PAGE: &str = "article.html";

/// Settings that shape render instructions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSettings {
    /// Page the featured card's action links to.
    pub article_page: String,
    /// Count-up duration for stat counters.
    pub counter_duration: Duration,
    /// Toast phase durations.
    pub toast_timings: ToastTimings,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            article_page: DEFAULT_ARTICLE_PAGE.to_string(),
            counter_duration: Duration::milliseconds(DEFAULT_COUNTER_DURATION_MS),
            toast_timings: ToastTimings::default(),
        }
    }
}

/// Central application state container.
#[derive(Debug, Clone)]
pub struct AppState {
    snapshot: Option<Arc<ArchiveSnapshot>>,

    /// Current search input text.
    pub query: String,

    /// Content of the featured slot.
    pub featured: Option<FeaturedView>,

    /// The toast slot.
    pub notifier: Notifier,

    pub settings: ViewSettings,
}

/// Render instructions for a freshly installed snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialRender {
    pub stats: Option<StatsView>,
    pub categories: CategoryView,
    pub featured: Option<FeaturedView>,
}

impl AppState {
    #[must_use]
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            snapshot: None,
            query: String::new(),
            featured: None,
            notifier: Notifier::new(settings.toast_timings),
            settings,
        }
    }

    /// The loaded archive, if any.
    #[must_use]
    pub fn snapshot(&self) -> Option<&Arc<ArchiveSnapshot>> {
        self.snapshot.as_ref()
    }

    /// Loaded articles; empty before the archive loads.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        self.snapshot
            .as_deref()
            .map(|s| s.articles.as_slice())
            .unwrap_or_default()
    }

    /// Installs the archive snapshot and computes the initial render.
    ///
    /// The snapshot is write-once: a second call is ignored and returns `None`.
    pub fn install_snapshot(&mut self, snapshot: ArchiveSnapshot) -> Option<InitialRender> {
        if self.snapshot.is_some() {
            tracing::warn!("archive snapshot already installed, ignoring reload");
            return None;
        }

        let snapshot = Arc::new(snapshot);
        let render = InitialRender {
            stats: StatsView::from_stats(Some(&snapshot.stats), self.settings.counter_duration),
            categories: CategoryView::from_stats(&snapshot.stats),
            featured: FeaturedView::from_article(snapshot.featured(), &self.settings.article_page),
        };

        self.featured.clone_from(&render.featured);
        self.snapshot = Some(snapshot);
        Some(render)
    }

    /// Runs the search engine for the current query.
    ///
    /// Returns `None` when the query is blank or no articles are loaded, in
    /// which case nothing should change on screen.
    #[must_use]
    pub fn run_search(&self) -> Option<SearchOutcome> {
        let query = self.query.trim();
        if query.is_empty() || self.articles().is_empty() {
            return None;
        }

        let hits = search_articles(self.articles(), query);
        let first = hits.first().and_then(|article| {
            FeaturedView::from_article(Some(article), &self.settings.article_page)
                .map(|view| view.with_highlights(query))
        });

        Some(SearchOutcome {
            query: query.to_string(),
            total: hits.len(),
            first,
        })
    }
}

/// What one search produced.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// The trimmed query.
    pub query: String,
    /// Number of matching articles.
    pub total: usize,
    /// Featured view for the first match.
    pub first: Option<FeaturedView>,
}
