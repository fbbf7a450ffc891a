//! The swappable presentation layer.
//!
//! A [`Presenter`] applies render instructions to some output: an HTML document,
//! a terminal, or a test double. The application layer never touches markup or
//! escape sequences itself.

use crate::app::animation::FRAME_INTERVAL_MS;
use crate::app::{Action, ToastState};
use crate::domain::error::Result;
use crate::domain::StatKind;
use crate::ui::viewmodel::{CategoryView, FeaturedView, StatsView, ToastView};

/// Applies render instructions to an output.
pub trait Presenter {
    /// Writes final counter values and the footer sentence.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn apply_stats(&mut self, view: &StatsView) -> Result<()>;

    /// Overwrites count text on matching topic cards.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn apply_categories(&mut self, view: &CategoryView) -> Result<()>;

    /// Replaces the featured slot.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn apply_featured(&mut self, view: &FeaturedView) -> Result<()>;

    /// Brings the results region into view.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn scroll_to_results(&mut self) -> Result<()>;

    /// Reflects `query` in the search input.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn set_query(&mut self, query: &str) -> Result<()>;

    /// Puts `toast` in the slot, replacing whatever is there.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn show_toast(&mut self, toast: &ToastView) -> Result<()>;

    /// Moves the current toast to `state`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn set_toast_state(&mut self, state: ToastState) -> Result<()>;

    /// Removes the current toast.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn dismiss_toast(&mut self) -> Result<()>;

    /// Redirects to `href`.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn navigate(&mut self, href: &str) -> Result<()>;

    /// Whether intermediate counter frames should be played.
    fn animates_counters(&self) -> bool {
        false
    }

    /// Draws one intermediate frame of the counter count-up.
    ///
    /// # Errors
    ///
    /// Returns an error if the output cannot be written.
    fn apply_counter_frame(&mut self, _values: &[(StatKind, u64)]) -> Result<()> {
        Ok(())
    }
}

/// Dispatches one action to the matching presenter method.
///
/// # Errors
///
/// Propagates the presenter's error.
pub fn apply_action(presenter: &mut dyn Presenter, action: &Action) -> Result<()> {
    match action {
        Action::ApplyStats(view) => presenter.apply_stats(view),
        Action::ApplyCategories(view) => presenter.apply_categories(view),
        Action::ApplyFeatured(view) => presenter.apply_featured(view),
        Action::ScrollToResults => presenter.scroll_to_results(),
        Action::SetQuery(query) => presenter.set_query(query),
        Action::ShowToast(toast) => presenter.show_toast(toast),
        Action::SetToastState(state) => presenter.set_toast_state(*state),
        Action::DismissToast => presenter.dismiss_toast(),
        Action::Navigate(href) => presenter.navigate(href),
    }
}

/// Applies actions in order, playing counter animations when the presenter
/// wants them.
///
/// # Errors
///
/// Stops at and returns the first presenter error.
pub async fn apply_actions(presenter: &mut dyn Presenter, actions: &[Action]) -> Result<()> {
    for action in actions {
        match action {
            Action::ApplyStats(view) if presenter.animates_counters() => {
                play_counters(presenter, view).await?;
            }
            _ => apply_action(presenter, action)?,
        }
    }
    Ok(())
}

/// Plays the counter count-up frame by frame, then applies the final values.
///
/// # Errors
///
/// Propagates the presenter's error.
pub async fn play_counters(presenter: &mut dyn Presenter, view: &StatsView) -> Result<()> {
    let start = tokio::time::Instant::now();
    let mut interval = tokio::time::interval(std::time::Duration::from_millis(FRAME_INTERVAL_MS));

    loop {
        interval.tick().await;
        let elapsed = chrono::Duration::from_std(start.elapsed())
            .unwrap_or_else(|_| chrono::Duration::zero());
        if view.counters.iter().all(|c| c.animation.is_finished(elapsed)) {
            break;
        }

        let frame: Vec<(StatKind, u64)> = view
            .counters
            .iter()
            .map(|c| (c.kind, c.animation.value_at(elapsed)))
            .collect();
        presenter.apply_counter_frame(&frame)?;
    }

    presenter.apply_stats(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Stats;

    #[derive(Default)]
    struct Recorder {
        calls: Vec<String>,
        frames: Vec<Vec<(StatKind, u64)>>,
        animate: bool,
    }

    impl Presenter for Recorder {
        fn apply_stats(&mut self, view: &StatsView) -> Result<()> {
            self.calls.push(format!("stats:{}", view.footer_text));
            Ok(())
        }
        fn apply_categories(&mut self, _view: &CategoryView) -> Result<()> {
            self.calls.push("categories".into());
            Ok(())
        }
        fn apply_featured(&mut self, view: &FeaturedView) -> Result<()> {
            self.calls.push(format!("featured:{}", view.slug));
            Ok(())
        }
        fn scroll_to_results(&mut self) -> Result<()> {
            self.calls.push("scroll".into());
            Ok(())
        }
        fn set_query(&mut self, query: &str) -> Result<()> {
            self.calls.push(format!("query:{query}"));
            Ok(())
        }
        fn show_toast(&mut self, toast: &ToastView) -> Result<()> {
            self.calls.push(format!("toast:{}", toast.message));
            Ok(())
        }
        fn set_toast_state(&mut self, state: ToastState) -> Result<()> {
            self.calls.push(format!("toast-state:{state:?}"));
            Ok(())
        }
        fn dismiss_toast(&mut self) -> Result<()> {
            self.calls.push("dismiss".into());
            Ok(())
        }
        fn navigate(&mut self, href: &str) -> Result<()> {
            self.calls.push(format!("navigate:{href}"));
            Ok(())
        }
        fn animates_counters(&self) -> bool {
            self.animate
        }
        fn apply_counter_frame(&mut self, values: &[(StatKind, u64)]) -> Result<()> {
            self.frames.push(values.to_vec());
            Ok(())
        }
    }

    fn stats_view() -> StatsView {
        let stats = Stats {
            article_count: 500,
            ..Stats::default()
        };
        StatsView::from_stats(Some(&stats), chrono::Duration::milliseconds(64)).unwrap()
    }

    #[tokio::test]
    async fn actions_are_applied_in_order() {
        let mut recorder = Recorder::default();
        let actions = vec![
            Action::DismissToast,
            Action::Navigate("article.html?slug=x".into()),
            Action::SetQuery("ai".into()),
        ];
        apply_actions(&mut recorder, &actions).await.unwrap();
        assert_eq!(
            recorder.calls,
            vec!["dismiss", "navigate:article.html?slug=x", "query:ai"]
        );
    }

    #[tokio::test]
    async fn static_presenters_skip_frames() {
        let mut recorder = Recorder::default();
        apply_actions(&mut recorder, &[Action::ApplyStats(stats_view())])
            .await
            .unwrap();
        assert!(recorder.frames.is_empty());
        assert_eq!(recorder.calls, vec!["stats:500 articles indexed"]);
    }

    #[tokio::test]
    async fn animated_presenters_get_rising_frames_then_final() {
        let mut recorder = Recorder {
            animate: true,
            ..Recorder::default()
        };
        play_counters(&mut recorder, &stats_view()).await.unwrap();

        let values: Vec<u64> = recorder.frames.iter().map(|f| f[0].1).collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert!(values.iter().all(|&v| v < 500));
        assert_eq!(recorder.calls, vec!["stats:500 articles indexed"]);
    }
}
