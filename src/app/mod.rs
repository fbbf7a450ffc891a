//! Application layer coordinating state, events, and render actions.
//!
//! This layer sits between the binary (loader + presenter wiring) and the
//! domain/ui layers:
//!
//! ```text
//! Loader / Input / Clock → Events → Event Handler → State Mutations → Actions → Presenter
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Render instructions emitted by the event handler
//! - [`handler`]: Event processing logic
//! - [`state`]: Application state owning the archive snapshot
//! - [`search`]: Substring search over articles
//! - [`notifier`]: Single-slot toast state machine
//! - [`animation`]: Counter count-up easing
//! - [`shell`]: Interactive session driven by input lines and a tick interval

pub mod actions;
pub mod animation;
pub mod handler;
pub mod notifier;
pub mod search;
pub mod shell;
pub mod state;

pub use actions::Action;
pub use animation::CounterAnimation;
pub use handler::{handle_event, Event};
pub use notifier::{Notifier, ToastState, ToastTimings};
pub use shell::{run_shell, Command, TICK_INTERVAL_MS};
pub use state::{AppState, SearchOutcome, ViewSettings};
