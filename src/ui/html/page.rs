//! The landing page document model.
//!
//! [`LandingPage`] mirrors the elements of the archive's landing page: stat
//! counters tagged by kind, topic cards, the search box with its suggestion
//! chips, the featured slot, the footer count and the toast slot. The HTML
//! presenter mutates it and serializes it with [`LandingPage::to_html`].

use super::components;
use crate::app::ToastState;
use crate::domain::error::{ArchiveError, Result};
use crate::domain::StatKind;
use crate::ui::viewmodel::{FeaturedView, Suggestion, ToastView};
use std::fmt::Write;

/// Text a topic card shows before category counts arrive.
pub const PLACEHOLDER_COUNT: &str = "\u{2014} articles";

/// One stat counter element (`.stat-number[data-stat]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatElement {
    pub kind: StatKind,
    pub text: String,
    /// Target value once counts are known (`data-count`).
    pub data_count: Option<u64>,
}

/// One topic card (`.topic-card`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicCard {
    pub name: String,
    pub count_text: String,
}

/// The toast slot's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastSlot {
    pub toast: ToastView,
    pub state: ToastState,
}

/// The landing page document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LandingPage {
    pub title: String,
    pub stats: Vec<StatElement>,
    pub topics: Vec<TopicCard>,
    pub suggestions: Vec<Suggestion>,
    pub query: String,
    pub featured: Option<FeaturedView>,
    pub footer_count: Option<String>,
    pub toast: Option<ToastSlot>,
    pub redirect: Option<String>,
    pub scroll_to_results: bool,
}

impl LandingPage {
    /// The static skeleton: zeroed counters, placeholder topic cards, empty slots.
    #[must_use]
    pub fn skeleton(title: impl Into<String>, topics: &[String], suggestions: &[Suggestion]) -> Self {
        Self {
            title: title.into(),
            stats: StatKind::ALL
                .iter()
                .map(|&kind| StatElement {
                    kind,
                    text: "0".to_string(),
                    data_count: None,
                })
                .collect(),
            topics: topics
                .iter()
                .map(|name| TopicCard {
                    name: name.clone(),
                    count_text: PLACEHOLDER_COUNT.to_string(),
                })
                .collect(),
            suggestions: suggestions.to_vec(),
            query: String::new(),
            featured: None,
            footer_count: None,
            toast: None,
            redirect: None,
            scroll_to_results: false,
        }
    }

    /// Stat element for `kind`.
    pub fn stat_mut(&mut self, kind: StatKind) -> Option<&mut StatElement> {
        self.stats.iter_mut().find(|s| s.kind == kind)
    }

    /// Serializes the page to a complete HTML document.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Render`] if formatting fails.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::with_capacity(8 * 1024);
        self.write_html(&mut out)
            .map_err(|e| ArchiveError::Render(format!("failed to write landing page: {e}")))?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> std::fmt::Result {
        components::write_head(out, &self.title, self.redirect.as_deref())?;
        writeln!(out, "<body>")?;
        components::write_hero(out, &self.title, &self.stats)?;
        components::write_search(out, &self.query, &self.suggestions)?;
        components::write_topics(out, &self.topics)?;
        components::write_results(out, self.featured.as_ref())?;
        components::write_footer(out, self.footer_count.as_deref())?;
        if let Some(slot) = &self.toast {
            components::write_toast(out, slot)?;
        }
        if self.scroll_to_results {
            components::write_scroll_script(out)?;
        }
        writeln!(out, "</body>")?;
        writeln!(out, "</html>")
    }
}
