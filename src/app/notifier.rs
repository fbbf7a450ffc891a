//! Single-slot toast notifications.
//!
//! At most one toast exists at a time. Showing a new toast removes the current
//! one immediately; there is no queue. A toast moves through fixed phases:
//!
//! ```text
//! Absent → Appearing → Visible → Disappearing → Absent
//! ```
//!
//! Phases are derived from the time since the toast was shown, so the notifier
//! only needs a clock reading on each [`Notifier::tick`].

use crate::ui::viewmodel::ToastView;
use chrono::{DateTime, Duration, Utc};

/// Lifecycle phase of the toast slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Absent,
    Appearing,
    Visible,
    Disappearing,
}

/// Phase durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastTimings {
    pub enter: Duration,
    pub dwell: Duration,
    pub exit: Duration,
}

impl Default for ToastTimings {
    fn default() -> Self {
        Self {
            enter: Duration::milliseconds(300),
            dwell: Duration::milliseconds(3000),
            exit: Duration::milliseconds(300),
        }
    }
}

impl ToastTimings {
    /// Phase of a toast shown `elapsed` ago.
    #[must_use]
    pub fn state_at(&self, elapsed: Duration) -> ToastState {
        // An overflowing boundary is never reached.
        let leaving_at = self.enter.checked_add(&self.dwell);
        let gone_at = leaving_at.and_then(|t| t.checked_add(&self.exit));
        let before = |bound: Option<Duration>| bound.map_or(true, |b| elapsed < b);

        if elapsed < self.enter {
            ToastState::Appearing
        } else if before(leaving_at) {
            ToastState::Visible
        } else if before(gone_at) {
            ToastState::Disappearing
        } else {
            ToastState::Absent
        }
    }
}

#[derive(Debug, Clone)]
struct ActiveToast {
    view: ToastView,
    shown_at: DateTime<Utc>,
    state: ToastState,
}

/// Result of [`Notifier::show`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shown {
    /// The toast that was removed to make room, if any.
    pub replaced: Option<ToastView>,
    pub toast: ToastView,
}

/// The toast slot.
#[derive(Debug, Clone, Default)]
pub struct Notifier {
    timings: ToastTimings,
    current: Option<ActiveToast>,
    next_id: u64,
}

impl Notifier {
    #[must_use]
    pub fn new(timings: ToastTimings) -> Self {
        Self {
            timings,
            current: None,
            next_id: 0,
        }
    }

    /// Shows `message`, removing any toast already in the slot.
    pub fn show(&mut self, message: impl Into<String>, now: DateTime<Utc>) -> Shown {
        let replaced = self.current.take().map(|active| active.view);

        self.next_id += 1;
        let view = ToastView {
            id: self.next_id,
            message: message.into(),
        };
        tracing::debug!(toast_id = view.id, replaced = replaced.is_some(), "showing toast");

        self.current = Some(ActiveToast {
            view: view.clone(),
            shown_at: now,
            state: ToastState::Appearing,
        });

        Shown {
            replaced,
            toast: view,
        }
    }

    /// Advances the current toast to the phase for `now`.
    ///
    /// Returns the new state when it changed since the last tick. Reaching
    /// `Absent` clears the slot.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Option<ToastState> {
        let active = self.current.as_mut()?;
        let state = self.timings.state_at(now - active.shown_at);
        if state == active.state {
            return None;
        }

        active.state = state;
        if state == ToastState::Absent {
            self.current = None;
        }
        Some(state)
    }

    /// Current phase of the slot.
    #[must_use]
    pub fn state(&self) -> ToastState {
        self.current.as_ref().map_or(ToastState::Absent, |a| a.state)
    }

    /// The toast currently in the slot.
    #[must_use]
    pub fn current(&self) -> Option<&ToastView> {
        self.current.as_ref().map(|a| &a.view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn ms(n: i64) -> Duration {
        Duration::milliseconds(n)
    }

    #[test]
    fn walks_through_every_phase() {
        let mut n = Notifier::default();
        n.show("hello", t0());
        assert_eq!(n.state(), ToastState::Appearing);

        assert_eq!(n.tick(t0() + ms(100)), None);
        assert_eq!(n.tick(t0() + ms(300)), Some(ToastState::Visible));
        assert_eq!(n.tick(t0() + ms(3299)), None);
        assert_eq!(n.tick(t0() + ms(3300)), Some(ToastState::Disappearing));
        assert_eq!(n.tick(t0() + ms(3600)), Some(ToastState::Absent));
        assert!(n.current().is_none());
        assert_eq!(n.tick(t0() + ms(5000)), None);
    }

    #[test]
    fn new_toast_replaces_visible_one() {
        let mut n = Notifier::default();
        let first = n.show("first", t0());
        n.tick(t0() + ms(500));
        assert_eq!(n.state(), ToastState::Visible);

        let second = n.show("second", t0() + ms(600));
        assert_eq!(second.replaced, Some(first.toast));
        assert_eq!(n.state(), ToastState::Appearing);
        assert_eq!(n.current().unwrap().message, "second");
        assert_ne!(second.toast.id, 1);
    }

    #[test]
    fn late_tick_can_skip_straight_to_absent() {
        let mut n = Notifier::default();
        n.show("brief", t0());
        assert_eq!(n.tick(t0() + ms(10_000)), Some(ToastState::Absent));
        assert_eq!(n.state(), ToastState::Absent);
    }

    #[test]
    fn huge_timings_stay_visible_without_overflow() {
        let timings = ToastTimings {
            enter: ms(300),
            dwell: ms(i64::MAX),
            exit: ms(i64::MAX),
        };
        assert_eq!(timings.state_at(ms(200)), ToastState::Appearing);
        assert_eq!(timings.state_at(ms(i64::MAX)), ToastState::Visible);

        let mut n = Notifier::new(timings);
        n.show("forever", t0());
        assert_eq!(n.tick(t0() + ms(1_000)), Some(ToastState::Visible));
        assert_eq!(n.tick(t0() + ms(86_400_000)), None);
    }
}
