//! Render instructions emitted by the event handler.
//!
//! This module defines the [`Action`] type: the boundary between pure state
//! transitions and the presentation layer. The handler returns a `Vec<Action>`
//! for each event; a [`Presenter`](crate::ui::Presenter) applies them in order.
//!
//! # Example
//!
//! ```rust
//! use archive_front::app::Action;
//!
//! let actions = vec![Action::ScrollToResults, Action::DismissToast];
//! assert_eq!(actions.len(), 2);
//! ```

use crate::app::notifier::ToastState;
use crate::ui::viewmodel::{CategoryView, FeaturedView, StatsView, ToastView};

/// One instruction for the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Animates the stat counters and writes the footer sentence.
    ApplyStats(StatsView),

    /// Overwrites the count text of matching topic cards.
    ApplyCategories(CategoryView),

    /// Replaces the featured slot's content.
    ApplyFeatured(FeaturedView),

    /// Brings the results region into view.
    ScrollToResults,

    /// Reflects a query in the search input (suggestion chips).
    SetQuery(String),

    /// Puts a toast in the slot, starting its enter phase.
    ShowToast(ToastView),

    /// Moves the toast in the slot to a new phase.
    SetToastState(ToastState),

    /// Removes the toast from the slot immediately.
    DismissToast,

    /// Redirects to another page.
    Navigate(String),
}
