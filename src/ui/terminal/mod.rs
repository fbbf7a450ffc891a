//! Terminal presenter: applies render instructions as themed ANSI output.
//!
//! Output is append-only. Each instruction writes a block to the underlying
//! writer; counter frames overwrite the current line with `\r` until the final
//! values land.

mod components;

pub use components::stats_line;

use crate::app::ToastState;
use crate::domain::error::Result;
use crate::domain::StatKind;
use crate::ui::html::{TopicCard, page::PLACEHOLDER_COUNT};
use crate::ui::presenter::Presenter;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{CategoryView, FeaturedView, StatsView, ToastView};
use std::io::Write;

/// Default width when the terminal size is unknown.
pub const DEFAULT_COLUMNS: usize = 80;

/// Presenter writing ANSI blocks to `W`.
pub struct TerminalPresenter<W: Write> {
    out: W,
    theme: Theme,
    topics: Vec<TopicCard>,
    cols: usize,
    animate: bool,
    toast_state: ToastState,
}

impl<W: Write> TerminalPresenter<W> {
    #[must_use]
    pub fn new(out: W, theme: Theme, topics: &[String]) -> Self {
        Self {
            out,
            theme,
            topics: topics
                .iter()
                .map(|name| TopicCard {
                    name: name.clone(),
                    count_text: PLACEHOLDER_COUNT.to_string(),
                })
                .collect(),
            cols: DEFAULT_COLUMNS,
            animate: false,
            toast_state: ToastState::Absent,
        }
    }

    /// Sets the layout width.
    #[must_use]
    pub fn with_columns(mut self, cols: usize) -> Self {
        self.cols = cols.max(20);
        self
    }

    /// Plays counter frames before the final values.
    #[must_use]
    pub const fn with_animation(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    /// Writes the title bar.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_header(&mut self, title: &str) -> Result<()> {
        components::render_header(&mut self.out, title, &self.theme, self.cols)?;
        Ok(())
    }

    /// Writes a dimmed status line.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    pub fn write_notice(&mut self, message: &str) -> Result<()> {
        writeln!(
            self.out,
            "{}{message}{}",
            Theme::fg(&self.theme.colors.text_dim),
            Theme::reset()
        )?;
        Ok(())
    }

    #[must_use]
    pub fn topics(&self) -> &[TopicCard] {
        &self.topics
    }

    #[must_use]
    pub const fn toast_state(&self) -> ToastState {
        self.toast_state
    }

    /// Consumes the presenter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn apply_stats(&mut self, view: &StatsView) -> Result<()> {
        let values: Vec<(StatKind, u64)> = StatKind::ALL
            .iter()
            .map(|&kind| (kind, view.target_for(kind)))
            .collect();
        components::render_stats(&mut self.out, &values, &view.footer_text, &self.theme)?;
        Ok(())
    }

    fn apply_categories(&mut self, view: &CategoryView) -> Result<()> {
        for card in &mut self.topics {
            if let Some(text) = view.count_text_for(&card.name) {
                card.count_text = text;
            }
        }
        components::render_topics(&mut self.out, &self.topics, &self.theme)?;
        Ok(())
    }

    fn apply_featured(&mut self, view: &FeaturedView) -> Result<()> {
        components::render_featured(&mut self.out, view, &self.theme, self.cols)?;
        Ok(())
    }

    fn scroll_to_results(&mut self) -> Result<()> {
        components::render_rule(&mut self.out, "Results", &self.theme, self.cols)?;
        Ok(())
    }

    fn set_query(&mut self, query: &str) -> Result<()> {
        writeln!(
            self.out,
            "{}search:{} {query}",
            Theme::fg(&self.theme.colors.text_dim),
            Theme::reset()
        )?;
        Ok(())
    }

    fn show_toast(&mut self, toast: &ToastView) -> Result<()> {
        self.toast_state = ToastState::Appearing;
        components::render_toast(&mut self.out, toast, &self.theme)?;
        Ok(())
    }

    fn set_toast_state(&mut self, state: ToastState) -> Result<()> {
        tracing::trace!(state = ?state, "toast phase");
        self.toast_state = state;
        Ok(())
    }

    fn dismiss_toast(&mut self) -> Result<()> {
        self.toast_state = ToastState::Absent;
        Ok(())
    }

    fn navigate(&mut self, href: &str) -> Result<()> {
        writeln!(
            self.out,
            "open {}{href}{}",
            Theme::fg(&self.theme.colors.link_fg),
            Theme::reset()
        )?;
        Ok(())
    }

    fn animates_counters(&self) -> bool {
        self.animate
    }

    fn apply_counter_frame(&mut self, values: &[(StatKind, u64)]) -> Result<()> {
        components::render_counter_frame(&mut self.out, values, &self.theme)?;
        Ok(())
    }
}
