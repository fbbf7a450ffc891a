//! Summary statistics published alongside the article index.

use super::lenient;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Contents of `stats.json`.
///
/// All counters default to zero and `categories` to empty when absent or `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    #[serde(default, deserialize_with = "lenient::count")]
    pub article_count: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub source_count: u64,
    #[serde(default, deserialize_with = "lenient::count")]
    pub category_count: u64,
    #[serde(default, deserialize_with = "lenient::list")]
    pub categories: Vec<CategoryCount>,
}

/// Number of articles filed under one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::count")]
    pub count: u64,
}

/// The stat counters a landing page can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Articles,
    Sources,
    Categories,
}

impl StatKind {
    /// Every kind, in display order.
    pub const ALL: [Self; 3] = [Self::Articles, Self::Sources, Self::Categories];

    /// Tag used on display elements (`data-stat`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Sources => "sources",
            Self::Categories => "categories",
        }
    }

    /// Human label for terminal output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Articles => "Articles",
            Self::Sources => "Sources",
            Self::Categories => "Categories",
        }
    }
}

impl Stats {
    /// Resolves the counter for a stat kind.
    #[must_use]
    pub const fn count_for(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::Articles => self.article_count,
            StatKind::Sources => self.source_count,
            StatKind::Categories => self.category_count,
        }
    }

    /// Builds the category name to count mapping. Later duplicates win.
    #[must_use]
    pub fn category_map(&self) -> HashMap<&str, u64> {
        self.categories
            .iter()
            .map(|c| (c.category.as_str(), c.count))
            .collect()
    }
}
