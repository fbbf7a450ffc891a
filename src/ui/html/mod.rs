//! HTML presenter: applies render instructions to the landing page document.
//!
//! Counters are written at their final value with `data-count` set; a static
//! document has no frame loop to animate them.
//!
//! # Example
//!
//! ```rust
//! use archive_front::ui::{HtmlPresenter, Presenter, ToastView};
//!
//! let mut presenter = HtmlPresenter::new("Archive", &[], &[]);
//! presenter.show_toast(&ToastView { id: 1, message: "<b>hi</b>".into() }).unwrap();
//! let html = presenter.page().to_html().unwrap();
//! assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
//! ```

mod components;
pub mod page;

pub use page::{LandingPage, StatElement, ToastSlot, TopicCard};

use crate::app::ToastState;
use crate::domain::error::Result;
use crate::ui::format::group_thousands;
use crate::ui::presenter::Presenter;
use crate::ui::viewmodel::{CategoryView, FeaturedView, StatsView, Suggestion, ToastView};

/// Presenter backed by a [`LandingPage`] document.
#[derive(Debug, Clone)]
pub struct HtmlPresenter {
    page: LandingPage,
}

impl HtmlPresenter {
    /// Starts from the page skeleton.
    #[must_use]
    pub fn new(title: &str, topics: &[String], suggestions: &[Suggestion]) -> Self {
        Self {
            page: LandingPage::skeleton(title, topics, suggestions),
        }
    }

    #[must_use]
    pub const fn page(&self) -> &LandingPage {
        &self.page
    }
}

impl Presenter for HtmlPresenter {
    fn apply_stats(&mut self, view: &StatsView) -> Result<()> {
        for counter in &view.counters {
            if let Some(element) = self.page.stat_mut(counter.kind) {
                element.data_count = Some(counter.animation.target);
                element.text = group_thousands(counter.animation.target);
            }
        }
        self.page.footer_count = Some(view.footer_text.clone());
        Ok(())
    }

    fn apply_categories(&mut self, view: &CategoryView) -> Result<()> {
        for card in &mut self.page.topics {
            if let Some(text) = view.count_text_for(&card.name) {
                card.count_text = text;
            }
        }
        Ok(())
    }

    fn apply_featured(&mut self, view: &FeaturedView) -> Result<()> {
        self.page.featured = Some(view.clone());
        Ok(())
    }

    fn scroll_to_results(&mut self) -> Result<()> {
        self.page.scroll_to_results = true;
        Ok(())
    }

    fn set_query(&mut self, query: &str) -> Result<()> {
        query.clone_into(&mut self.page.query);
        Ok(())
    }

    fn show_toast(&mut self, toast: &ToastView) -> Result<()> {
        self.page.toast = Some(ToastSlot {
            toast: toast.clone(),
            state: ToastState::Appearing,
        });
        Ok(())
    }

    fn set_toast_state(&mut self, state: ToastState) -> Result<()> {
        if let Some(slot) = &mut self.page.toast {
            slot.state = state;
        }
        Ok(())
    }

    fn dismiss_toast(&mut self) -> Result<()> {
        self.page.toast = None;
        Ok(())
    }

    fn navigate(&mut self, href: &str) -> Result<()> {
        self.page.redirect = Some(href.to_string());
        Ok(())
    }
}
