//! Count-up animation for stat counters.
//!
//! Counters ease out from 0 to their target with a cubic curve:
//!
//! ```text
//! p     = min(elapsed / duration, 1)
//! value = floor((1 - (1 - p)^3) * target)
//! ```

use chrono::Duration;

/// Default count-up duration in milliseconds.
pub const DEFAULT_COUNTER_DURATION_MS: i64 = 1500;

/// Interval between animation frames (roughly one display refresh).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// One counter's count-up from zero to `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterAnimation {
    pub target: u64,
    pub duration: Duration,
}

impl CounterAnimation {
    #[must_use]
    pub const fn new(target: u64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// Progress in `[0, 1]` after `elapsed`.
    #[must_use]
    pub fn progress(&self, elapsed: Duration) -> f64 {
        let total = self.duration.num_milliseconds();
        if total <= 0 {
            return 1.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let p = elapsed.num_milliseconds().max(0) as f64 / total as f64;
        p.min(1.0)
    }

    /// Displayed value after `elapsed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use archive_front::app::CounterAnimation;
    /// use chrono::Duration;
    ///
    /// let anim = CounterAnimation::new(1000, Duration::milliseconds(1500));
    /// assert_eq!(anim.value_at(Duration::zero()), 0);
    /// assert_eq!(anim.value_at(Duration::milliseconds(750)), 875);
    /// assert_eq!(anim.value_at(Duration::milliseconds(1500)), 1000);
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    pub fn value_at(&self, elapsed: Duration) -> u64 {
        let p = self.progress(elapsed);
        if p >= 1.0 {
            return self.target;
        }
        let eased = 1.0 - (1.0 - p).powi(3);
        (eased * self.target as f64).floor() as u64
    }

    /// Whether the animation has reached its target.
    #[must_use]
    pub fn is_finished(&self, elapsed: Duration) -> bool {
        self.progress(elapsed) >= 1.0
    }
}
