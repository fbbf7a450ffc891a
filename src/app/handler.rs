//! Event handling and state transition logic.
//!
//! The handler follows a unidirectional data flow:
//! 1. Events arrive from the loader, the search input, or the clock
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Render instructions are collected and returned for a presenter
//!
//! # Example
//!
//! ```rust
//! use archive_front::app::{handle_event, AppState, Event, ViewSettings};
//!
//! let mut state = AppState::new(ViewSettings::default());
//! let actions = handle_event(&mut state, &Event::SubmitSearch, chrono::Utc::now());
//! assert!(actions.is_empty()); // nothing loaded yet
//! ```

use crate::app::notifier::{Shown, ToastState};
use crate::app::state::SearchOutcome;
use crate::app::{Action, AppState};
use crate::domain::ArchiveSnapshot;
use crate::ui::format::{no_results_message, results_message};
use chrono::{DateTime, Utc};

/// Events from the loader, the user, or the clock.
#[derive(Debug, Clone)]
pub enum Event {
    /// The loader finished. `None` means the archive could not be loaded and
    /// the page stays unpopulated.
    ArchiveLoaded(Option<ArchiveSnapshot>),

    /// The search input's text changed.
    QueryChanged(String),

    /// The search button was pressed or Enter was hit in the input.
    SubmitSearch,

    /// A suggestion chip was chosen; its query replaces the input and runs.
    SuggestionChosen(String),

    /// The featured card's action control was activated.
    OpenFeatured,

    /// Time passed; advances the toast slot.
    Tick,
}

/// Processes an event, mutates application state, and returns render actions.
///
/// `now` is the clock reading used for toast timing.
pub fn handle_event(state: &mut AppState, event: &Event, now: DateTime<Utc>) -> Vec<Action> {
    let _span = tracing::debug_span!("handle_event", event_type = event_name(event)).entered();

    match event {
        Event::ArchiveLoaded(None) => {
            tracing::debug!("archive unavailable, page stays unpopulated");
            vec![]
        }
        Event::ArchiveLoaded(Some(snapshot)) => {
            let Some(render) = state.install_snapshot(snapshot.clone()) else {
                return vec![];
            };

            let mut actions = Vec::with_capacity(3);
            if let Some(stats) = render.stats {
                actions.push(Action::ApplyStats(stats));
            }
            actions.push(Action::ApplyCategories(render.categories));
            if let Some(featured) = render.featured {
                tracing::debug!(slug = %featured.slug, "featuring highest-confidence article");
                actions.push(Action::ApplyFeatured(featured));
            }
            actions
        }
        Event::QueryChanged(query) => {
            state.query.clone_from(query);
            vec![]
        }
        Event::SubmitSearch => submit_search(state, now),
        Event::SuggestionChosen(query) => {
            state.query.clone_from(query);
            let mut actions = vec![Action::SetQuery(query.clone())];
            actions.extend(submit_search(state, now));
            actions
        }
        Event::OpenFeatured => state.featured.as_ref().map_or_else(Vec::new, |featured| {
            tracing::info!(slug = %featured.slug, "opening article");
            vec![Action::Navigate(featured.action.href.clone())]
        }),
        Event::Tick => match state.notifier.tick(now) {
            Some(ToastState::Absent) => vec![Action::DismissToast],
            Some(phase) => vec![Action::SetToastState(phase)],
            None => vec![],
        },
    }
}

fn submit_search(state: &mut AppState, now: DateTime<Utc>) -> Vec<Action> {
    let Some(SearchOutcome { query, total, first }) = state.run_search() else {
        tracing::trace!("blank query or empty archive, ignoring search");
        return vec![];
    };

    tracing::info!(query = %query, results = total, "search complete");

    let mut actions = Vec::new();
    let message = match first {
        Some(featured) => {
            state.featured = Some(featured.clone());
            actions.push(Action::ApplyFeatured(featured));
            actions.push(Action::ScrollToResults);
            results_message(total)
        }
        None => no_results_message(&query),
    };

    let Shown { replaced, toast } = state.notifier.show(message, now);
    if replaced.is_some() {
        actions.push(Action::DismissToast);
    }
    actions.push(Action::ShowToast(toast));
    actions
}

const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::ArchiveLoaded(_) => "archive_loaded",
        Event::QueryChanged(_) => "query_changed",
        Event::SubmitSearch => "submit_search",
        Event::SuggestionChosen(_) => "suggestion_chosen",
        Event::OpenFeatured => "open_featured",
        Event::Tick => "tick",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::ViewSettings;
    use crate::domain::{Article, CategoryCount, Stats};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    fn article(slug: &str, title: &str, score: f64) -> Article {
        let mut a = Article::new(slug, title);
        a.confidence_score = Some(score);
        a
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::new(ViewSettings::default());
        let snapshot = ArchiveSnapshot::new(
            Stats {
                article_count: 3,
                source_count: 0,
                category_count: 1,
                categories: vec![CategoryCount {
                    category: "Technology".into(),
                    count: 3,
                }],
            },
            vec![
                article("ai", "ai ethics", 50.0),
                article("chips", "Chip supply", 90.0),
                article("grid", "Power grids", 90.0),
            ],
        );
        handle_event(&mut state, &Event::ArchiveLoaded(Some(snapshot)), now());
        state
    }

    fn search(state: &mut AppState, query: &str) -> Vec<Action> {
        handle_event(state, &Event::QueryChanged(query.into()), now());
        handle_event(state, &Event::SubmitSearch, now())
    }

    #[test]
    fn load_emits_stats_categories_and_featured() {
        let mut state = AppState::new(ViewSettings::default());
        let snapshot = ArchiveSnapshot::new(
            Stats::default(),
            vec![article("a", "A", 10.0), article("b", "B", 20.0)],
        );
        let actions = handle_event(&mut state, &Event::ArchiveLoaded(Some(snapshot)), now());

        assert!(matches!(actions[0], Action::ApplyStats(_)));
        assert!(matches!(actions[1], Action::ApplyCategories(_)));
        match &actions[2] {
            Action::ApplyFeatured(view) => assert_eq!(view.slug, "b"),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn failed_load_emits_nothing() {
        let mut state = AppState::new(ViewSettings::default());
        assert!(handle_event(&mut state, &Event::ArchiveLoaded(None), now()).is_empty());
        assert!(state.snapshot().is_none());
    }

    #[test]
    fn empty_archive_has_no_featured_action() {
        let mut state = AppState::new(ViewSettings::default());
        let snapshot = ArchiveSnapshot::new(Stats::default(), vec![]);
        let actions = handle_event(&mut state, &Event::ArchiveLoaded(Some(snapshot)), now());
        assert!(!actions.iter().any(|a| matches!(a, Action::ApplyFeatured(_))));
    }

    #[test]
    fn search_features_first_hit_and_counts_all() {
        let mut state = loaded_state();
        let actions = search(&mut state, "LY");

        match &actions[0] {
            Action::ApplyFeatured(view) => {
                assert_eq!(view.slug, "chips");
                assert_eq!(view.title_highlights, vec![(9, 11)]);
            }
            other => panic!("unexpected action {other:?}"),
        }
        assert_eq!(actions[1], Action::ScrollToResults);
        match &actions[2] {
            Action::ShowToast(toast) => assert_eq!(toast.message, "Found 1 result"),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn zero_matches_keep_featured_and_notify() {
        let mut state = loaded_state();
        let before = state.featured.clone();
        let actions = search(&mut state, "volcano");

        assert_eq!(state.featured, before);
        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::ShowToast(toast) => assert_eq!(toast.message, "No results for \"volcano\""),
            other => panic!("unexpected action {other:?}"),
        }
    }

    #[test]
    fn blank_query_is_ignored() {
        let mut state = loaded_state();
        assert!(search(&mut state, "   ").is_empty());
        assert!(state.notifier.current().is_none());
    }

    #[test]
    fn second_toast_dismisses_first() {
        let mut state = loaded_state();
        search(&mut state, "ai");
        let actions = search(&mut state, "grid");

        let dismiss = actions.iter().position(|a| *a == Action::DismissToast).unwrap();
        let show = actions
            .iter()
            .position(|a| matches!(a, Action::ShowToast(_)))
            .unwrap();
        assert!(dismiss < show);
        assert_eq!(state.notifier.current().unwrap().message, "Found 1 result");
    }

    #[test]
    fn suggestion_sets_query_then_searches() {
        let mut state = loaded_state();
        let actions = handle_event(&mut state, &Event::SuggestionChosen("power".into()), now());
        assert_eq!(actions[0], Action::SetQuery("power".into()));
        assert_eq!(state.query, "power");
        assert!(actions.iter().any(|a| matches!(a, Action::ApplyFeatured(v) if v.slug == "grid")));
    }

    #[test]
    fn open_featured_navigates_to_encoded_slug() {
        let mut state = loaded_state();
        let actions = handle_event(&mut state, &Event::OpenFeatured, now());
        assert_eq!(actions, vec![Action::Navigate("article.html?slug=chips".into())]);
    }

    #[test]
    fn ticks_drive_toast_to_dismissal() {
        let mut state = loaded_state();
        search(&mut state, "ai");

        let visible = handle_event(&mut state, &Event::Tick, now() + Duration::milliseconds(400));
        assert_eq!(visible, vec![Action::SetToastState(ToastState::Visible)]);

        let gone = handle_event(&mut state, &Event::Tick, now() + Duration::seconds(5));
        assert_eq!(gone, vec![Action::DismissToast]);
    }
}
