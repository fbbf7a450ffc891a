//! archive-front: landing page, featured article and search for a static JSON
//! content archive.
//!
//! The archive publishes two static resources, an article index and summary
//! statistics. This crate loads them once, renders stat counters, category
//! counts and a featured article card, and runs substring search over the
//! loaded articles.

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - Search, notifier, counter animation              │
//! │  - Action dispatching                               │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Loader        │   │ Domain        │
//! │ (ui/)         │   │ (loader/)     │   │ (domain/)     │
//! │ - View models │   │ - Directory   │   │ - Article     │
//! │ - Presenters  │   │ - HTTP        │   │ - Stats       │
//! │ - Theming     │   │ - Concurrent  │   │ - Snapshot    │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure (paths) & Observability (tracing)   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`domain`]: Core domain types (Article, Stats, snapshot, errors)
//! - [`infrastructure`]: Platform paths
//! - [`loader`]: Concurrent, failure-tolerant resource loading
//! - [`ui`]: View models, HTML and terminal presenters, themes
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Configuration is a TOML file, by default `<config dir>/archive-front/config.toml`:
//!
//! ```toml
//! source = "https://archive.example.org"
//! title = "The Archive"
//! theme = "catppuccin-latte"
//! topics = ["Science", "History"]
//!
//! [[suggestions]]
//! label = "AI"
//! query = "artificial intelligence"
//! ```
//!
//! # Example
//!
//! ```rust
//! use archive_front::{handle_event, initialize, Config, Event};
//! use archive_front::domain::{ArchiveSnapshot, Article, Stats};
//!
//! let mut state = initialize(&Config::default());
//! let snapshot = ArchiveSnapshot::new(Stats::default(), vec![Article::new("a", "Ocean tides")]);
//!
//! let now = chrono::Utc::now();
//! handle_event(&mut state, &Event::ArchiveLoaded(Some(snapshot)), now);
//! let actions = handle_event(&mut state, &Event::QueryChanged("tides".into()), now);
//! assert!(actions.is_empty());
//! let actions = handle_event(&mut state, &Event::SubmitSearch, now);
//! assert!(!actions.is_empty());
//! ```

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod loader;
pub mod observability;
pub mod ui;

pub use app::{handle_event, Action, AppState, Event, ViewSettings};
pub use domain::{ArchiveError, ArchiveSnapshot, Article, Result, Stats};
pub use ui::{Suggestion, Theme};

use app::animation::DEFAULT_COUNTER_DURATION_MS;
use app::state::DEFAULT_ARTICLE_PAGE;
use app::ToastTimings;
use loader::archive::{DEFAULT_INDEX_PATH, DEFAULT_STATS_PATH};
use loader::ResourcePaths;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Title used when none is configured.
pub const DEFAULT_TITLE: &str = "Archive";

/// Upper bound for configured durations: one day.
pub const MAX_DURATION_MS: u64 = 86_400_000;

/// Application configuration loaded from TOML.
///
/// Every key is optional; a missing file yields [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory or `http(s)://` base URL holding the static resources.
    pub source: String,

    /// Article index path relative to `source`.
    pub index_path: String,

    /// Stats path relative to `source`.
    pub stats_path: String,

    /// Page the featured card links to.
    pub article_page: String,

    /// Page title.
    pub title: String,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    pub theme_file: Option<String>,

    /// Tracing filter, e.g. `info` or `archive_front=debug`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Optional log file, rotated by size.
    pub log_file: Option<String>,

    /// Play the counter count-up in the terminal.
    pub animate_counters: bool,

    pub counter_duration_ms: u64,
    pub toast_enter_ms: u64,
    pub toast_dwell_ms: u64,
    pub toast_exit_ms: u64,

    /// Topic card names, in display order.
    pub topics: Vec<String>,

    /// Suggestion chips under the search input.
    pub suggestions: Vec<Suggestion>,
}

impl Default for Config {
    fn default() -> Self {
        let timings = ToastTimings::default();
        Self {
            source: ".".to_string(),
            index_path: DEFAULT_INDEX_PATH.to_string(),
            stats_path: DEFAULT_STATS_PATH.to_string(),
            article_page: DEFAULT_ARTICLE_PAGE.to_string(),
            title: DEFAULT_TITLE.to_string(),
            theme: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
            animate_counters: true,
            counter_duration_ms: DEFAULT_COUNTER_DURATION_MS.unsigned_abs(),
            toast_enter_ms: duration_ms(timings.enter),
            toast_dwell_ms: duration_ms(timings.dwell),
            toast_exit_ms: duration_ms(timings.exit),
            topics: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}

fn duration_ms(duration: chrono::Duration) -> u64 {
    duration.num_milliseconds().unsigned_abs()
}

fn millis(ms: u64) -> chrono::Duration {
    let clamped = ms.min(MAX_DURATION_MS);
    if clamped < ms {
        tracing::warn!(configured_ms = ms, clamped_ms = clamped, "duration too long, clamping");
    }
    chrono::Duration::milliseconds(i64::try_from(clamped).unwrap_or(i64::MAX))
}

impl Config {
    /// Reads configuration from `path`, falling back to defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Config`] if the file exists but cannot be read
    /// or is not valid TOML.
    ///
    /// # Example
    ///
    /// ```rust
    /// use archive_front::Config;
    ///
    /// let config = Config::load("/nonexistent/config.toml").unwrap();
    /// assert_eq!(config, Config::default());
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ArchiveError::Config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_toml(&contents)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Config`] on invalid TOML or mistyped keys.
    pub fn from_toml(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| ArchiveError::Config(format!("failed to parse config TOML: {e}")))
    }

    /// Settings that shape render instructions.
    #[must_use]
    pub fn view_settings(&self) -> ViewSettings {
        ViewSettings {
            article_page: self.article_page.clone(),
            counter_duration: millis(self.counter_duration_ms),
            toast_timings: ToastTimings {
                enter: millis(self.toast_enter_ms),
                dwell: millis(self.toast_dwell_ms),
                exit: millis(self.toast_exit_ms),
            },
        }
    }

    /// Resource locations relative to the source.
    #[must_use]
    pub fn resource_paths(&self) -> ResourcePaths {
        ResourcePaths {
            index: self.index_path.clone(),
            stats: self.stats_path.clone(),
        }
    }

    /// Resolves the terminal theme: file, then built-in name, then default.
    ///
    /// Resolution failures are logged and fall back to the default theme.
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                let path = infrastructure::expand_tilde(theme_file);
                Theme::from_file(&path).unwrap_or_else(|e| {
                    tracing::warn!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Creates an empty application state from configuration.
///
/// The snapshot is installed later by an [`Event::ArchiveLoaded`] event.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(source = %config.source, "initializing archive front");
    AppState::new(config.view_settings())
}
