//! View models: the render instructions presenters apply.
//!
//! Each renderer in this module takes domain data and produces a small record
//! of what to display. View models contain no markup and no escaping; the
//! presenter that applies them decides how text reaches the screen.
//!
//! ```text
//! Stats     → StatsView     (counters + footer sentence)
//! [Category] → CategoryView (name → "<n> articles")
//! Article   → FeaturedView  (badge, title, excerpt, sources, action link)
//! message   → ToastView
//! ```

use crate::app::animation::CounterAnimation;
use crate::domain::{Article, CategoryCount, ConfidenceClass, StatKind, Stats};
use crate::ui::format::{format_percent, group_thousands};
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Label on the featured card's action control.
pub const READ_ARTICLE_LABEL: &str = "Read Article";

/// One stat counter to animate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterView {
    pub kind: StatKind,
    pub animation: CounterAnimation,
}

/// Stat counters and the footer sentence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    /// Counters with a nonzero target. Zero counts leave their element as is.
    pub counters: Vec<CounterView>,
    /// "<count> articles indexed".
    pub footer_text: String,
}

impl StatsView {
    /// Builds the stats instruction. `None` stats produce no instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_front::domain::{StatKind, Stats};
    /// use archive_front::ui::StatsView;
    /// use chrono::Duration;
    ///
    /// let stats = Stats { article_count: 1200, ..Stats::default() };
    /// let view = StatsView::from_stats(Some(&stats), Duration::milliseconds(1500)).unwrap();
    /// assert_eq!(view.counters.len(), 1);
    /// assert_eq!(view.target_for(StatKind::Sources), 0);
    /// assert_eq!(view.footer_text, "1,200 articles indexed");
    /// ```
    #[must_use]
    pub fn from_stats(stats: Option<&Stats>, duration: Duration) -> Option<Self> {
        let stats = stats?;

        let counters = StatKind::ALL
            .iter()
            .map(|&kind| (kind, stats.count_for(kind)))
            .filter(|&(_, value)| value != 0)
            .map(|(kind, value)| CounterView {
                kind,
                animation: CounterAnimation::new(value, duration),
            })
            .collect();

        Some(Self {
            counters,
            footer_text: format!("{} articles indexed", group_thousands(stats.article_count)),
        })
    }

    /// Target value for a stat kind, 0 when it has no counter.
    #[must_use]
    pub fn target_for(&self, kind: StatKind) -> u64 {
        self.counters
            .iter()
            .find(|c| c.kind == kind)
            .map_or(0, |c| c.animation.target)
    }
}

/// Category name to count mapping applied to topic cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryView {
    counts: HashMap<String, u64>,
}

impl CategoryView {
    /// Builds the mapping; later duplicates of a name win.
    #[must_use]
    pub fn from_categories(categories: &[CategoryCount]) -> Self {
        let counts = categories
            .iter()
            .map(|c| (c.category.clone(), c.count))
            .collect();
        Self { counts }
    }

    /// Convenience over [`Self::from_categories`] for a stats record.
    #[must_use]
    pub fn from_stats(stats: &Stats) -> Self {
        Self::from_categories(&stats.categories)
    }

    /// Replacement count text for the card named `card_name`.
    ///
    /// Names match exactly. Unknown names and zero counts return `None`, which
    /// leaves the card unchanged.
    #[must_use]
    pub fn count_text_for(&self, card_name: &str) -> Option<String> {
        self.counts
            .get(card_name)
            .filter(|&&count| count != 0)
            .map(|count| format!("{count} articles"))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// The featured card's action control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleLink {
    pub label: String,
    pub href: String,
}

impl ArticleLink {
    /// Link to `page?slug=<percent-encoded slug>`.
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_front::ui::ArticleLink;
    ///
    /// let link = ArticleLink::for_slug("article.html", "ai & you");
    /// assert_eq!(link.href, "article.html?slug=ai%20%26%20you");
    /// ```
    #[must_use]
    pub fn for_slug(article_page: &str, slug: &str) -> Self {
        Self {
            label: READ_ARTICLE_LABEL.to_string(),
            href: format!("{article_page}?slug={}", urlencoding::encode(slug)),
        }
    }
}

/// Everything the featured slot shows for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeaturedView {
    pub slug: String,
    pub category: String,
    /// Normalized confidence, e.g. "87%".
    pub confidence_text: String,
    pub confidence_class: ConfidenceClass,
    pub title: String,
    pub excerpt: String,
    /// "<n> verified sources".
    pub sources_text: String,
    pub action: ArticleLink,
    /// Character ranges of the title that matched the active search query.
    pub title_highlights: Vec<(usize, usize)>,
}

impl FeaturedView {
    /// Builds the featured instruction. `None` produces no instruction.
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_front::domain::Article;
    /// use archive_front::ui::FeaturedView;
    ///
    /// let mut article = Article::new("qc", "Quantum Computing");
    /// article.confidence_score = Some(0.87);
    /// let view = FeaturedView::from_article(Some(&article), "article.html").unwrap();
    /// assert_eq!(view.confidence_text, "87%");
    /// assert_eq!(view.badge_text(), "87% Confidence");
    /// assert_eq!(view.sources_text, "0 verified sources");
    /// ```
    #[must_use]
    pub fn from_article(article: Option<&Article>, article_page: &str) -> Option<Self> {
        let article = article?;
        Some(Self {
            slug: article.slug.clone(),
            category: article.category.clone(),
            confidence_text: format_percent(article.confidence_percent()),
            confidence_class: article.confidence_class(),
            title: article.title.clone(),
            excerpt: article.excerpt_or_empty().to_string(),
            sources_text: format!("{} verified sources", article.source_count),
            action: ArticleLink::for_slug(article_page, &article.slug),
            title_highlights: Vec::new(),
        })
    }

    /// Marks the title ranges matching `query`, case-insensitively.
    #[must_use]
    pub fn with_highlights(mut self, query: &str) -> Self {
        self.title_highlights = match_ranges(&self.title, query);
        self
    }

    /// Badge text, e.g. "87% Confidence".
    #[must_use]
    pub fn badge_text(&self) -> String {
        format!("{} Confidence", self.confidence_text)
    }
}

/// A transient notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastView {
    pub id: u64,
    pub message: String,
}

/// A suggestion chip offered under the search input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Chip text.
    pub label: String,
    /// Query run when the chip is chosen.
    pub query: String,
}

/// Finds non-overlapping, case-insensitive occurrences of `query` in `text`.
///
/// Ranges are `(start, end)` character indices with exclusive end.
///
/// # Examples
///
/// ```
/// use archive_front::ui::viewmodel::match_ranges;
///
/// assert_eq!(match_ranges("AI and ai", "ai"), vec![(0, 2), (7, 9)]);
/// assert!(match_ranges("ethics", "").is_empty());
/// ```
#[must_use]
pub fn match_ranges(text: &str, query: &str) -> Vec<(usize, usize)> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }

    let lowered: Vec<String> = text.chars().map(|c| c.to_lowercase().collect()).collect();
    let mut ranges = Vec::new();
    let mut start = 0;

    while start < lowered.len() {
        let mut window = String::new();
        let mut end = start;
        while end < lowered.len() && window.len() < needle.len() {
            window.push_str(&lowered[end]);
            end += 1;
        }
        if window == needle {
            ranges.push((start, end));
            start = end;
        } else {
            start += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn duration() -> Duration {
        Duration::milliseconds(1500)
    }

    #[test]
    fn absent_stats_produce_no_instruction() {
        assert!(StatsView::from_stats(None, duration()).is_none());
    }

    #[test]
    fn missing_counters_resolve_to_zero() {
        let stats: Stats = serde_json::from_str(r#"{"source_count": 40}"#).unwrap();
        let view = StatsView::from_stats(Some(&stats), duration()).unwrap();
        assert_eq!(view.target_for(StatKind::Articles), 0);
        assert_eq!(view.target_for(StatKind::Sources), 40);
        assert_eq!(view.target_for(StatKind::Categories), 0);
        assert_eq!(view.counters.len(), 1);
        assert_eq!(view.footer_text, "0 articles indexed");
    }

    #[test]
    fn category_text_only_for_exact_nonzero_matches() {
        let view = CategoryView::from_categories(&[
            CategoryCount { category: "Science".into(), count: 12 },
            CategoryCount { category: "Empty".into(), count: 0 },
        ]);
        assert_eq!(view.count_text_for("Science").as_deref(), Some("12 articles"));
        assert_eq!(view.count_text_for("science"), None);
        assert_eq!(view.count_text_for(" Science"), None);
        assert_eq!(view.count_text_for("Empty"), None);
        assert_eq!(view.count_text_for("History"), None);
    }

    #[test]
    fn featured_view_tolerates_missing_fields() {
        let article: Article = serde_json::from_str(r#"{"slug":"bare"}"#).unwrap();
        let view = FeaturedView::from_article(Some(&article), "article.html").unwrap();
        assert_eq!(view.excerpt, "");
        assert_eq!(view.confidence_text, "0%");
        assert_eq!(view.confidence_class, ConfidenceClass::Medium);
        assert_eq!(view.sources_text, "0 verified sources");
        assert_eq!(view.action.href, "article.html?slug=bare");
    }

    #[test]
    fn confidence_display_examples() {
        for (raw, shown) in [(0.87, "87%"), (87.0, "87%"), (1.0, "1%")] {
            let mut article = Article::new("s", "t");
            article.confidence_score = Some(raw);
            let view = FeaturedView::from_article(Some(&article), "article.html").unwrap();
            assert_eq!(view.confidence_text, shown, "raw score {raw}");
        }
    }

    #[test]
    fn slug_is_percent_encoded() {
        let link = ArticleLink::for_slug("article.html", "a/b?c=d");
        assert_eq!(link.href, "article.html?slug=a%2Fb%3Fc%3Dd");
        assert_eq!(link.label, READ_ARTICLE_LABEL);
    }

    #[test]
    fn highlights_are_case_insensitive_character_ranges() {
        assert_eq!(match_ranges("ai ethics", "AI"), vec![(0, 2)]);
        assert_eq!(match_ranges("Café AI", "ai"), vec![(5, 7)]);
        assert_eq!(match_ranges("aaaa", "aa"), vec![(0, 2), (2, 4)]);
        assert!(match_ranges("ethics", "xyz").is_empty());
    }
}
