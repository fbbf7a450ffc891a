//! Article domain model and confidence score normalization.
//!
//! Articles come from the archive's `index.json`. The source data is loosely
//! typed, so every field is optional on the wire: absent, `null` or mistyped
//! values default to an empty string or zero.

use super::lenient;
use serde::{Deserialize, Serialize};

/// Display values at or above this percentage are classed as high confidence.
const HIGH_CONFIDENCE_THRESHOLD: f64 = 80.0;

/// One article record from the archive index.
///
/// # Fields
///
/// - `slug`: Unique identifier used in the article page URL
/// - `title`: Headline shown on the featured card
/// - `excerpt`: Optional short summary
/// - `category`: Topic label
/// - `confidence_score`: Either a 0-1 fraction or a 0-100 percentage
/// - `source_count`: Number of verified sources backing the article
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, deserialize_with = "lenient::text")]
    pub slug: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::optional_text")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::score")]
    pub confidence_score: Option<f64>,
    #[serde(default, deserialize_with = "lenient::count")]
    pub source_count: u64,
}

/// Qualitative confidence band shown as a badge modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceClass {
    High,
    Medium,
}

impl ConfidenceClass {
    /// CSS class / theme key for this band.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
        }
    }
}

impl Article {
    /// Creates an article with only the identifier and title set.
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_front::domain::Article;
    ///
    /// let article = Article::new("ai-ethics", "AI Ethics");
    /// assert_eq!(article.raw_score(), 0.0);
    /// assert!(article.excerpt.is_none());
    /// ```
    #[must_use]
    pub fn new(slug: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            title: title.into(),
            excerpt: None,
            category: String::new(),
            confidence_score: None,
            source_count: 0,
        }
    }

    /// Raw confidence score with a missing value read as zero.
    #[must_use]
    pub fn raw_score(&self) -> f64 {
        self.confidence_score.unwrap_or(0.0)
    }

    /// Excerpt text, empty when absent.
    #[must_use]
    pub fn excerpt_or_empty(&self) -> &str {
        self.excerpt.as_deref().unwrap_or("")
    }

    /// Confidence as a percentage for display.
    ///
    /// Scores strictly below 1 are treated as fractions and scaled to a rounded
    /// percentage; anything else is already a percentage. A genuine score of
    /// exactly 1 therefore displays as `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_front::domain::Article;
    ///
    /// let mut article = Article::new("a", "A");
    /// article.confidence_score = Some(0.87);
    /// assert_eq!(article.confidence_percent(), 87.0);
    /// article.confidence_score = Some(87.0);
    /// assert_eq!(article.confidence_percent(), 87.0);
    /// article.confidence_score = Some(1.0);
    /// assert_eq!(article.confidence_percent(), 1.0);
    /// ```
    #[must_use]
    pub fn confidence_percent(&self) -> f64 {
        let raw = self.raw_score();
        if raw < 1.0 {
            (raw * 100.0).round()
        } else {
            raw
        }
    }

    /// Confidence band, judged on the normalized percentage.
    #[must_use]
    pub fn confidence_class(&self) -> ConfidenceClass {
        if self.confidence_percent() >= HIGH_CONFIDENCE_THRESHOLD {
            ConfidenceClass::High
        } else {
            ConfidenceClass::Medium
        }
    }
}
