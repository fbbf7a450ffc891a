//! Presentation layer: pure renderers and the presenters that apply them.
//!
//! # Architecture
//!
//! ```text
//! domain data → viewmodel renderers → Action → Presenter → HTML document / ANSI output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Render instructions (stats, categories, featured card, toast)
//! - [`presenter`]: The [`Presenter`] trait and action dispatch
//! - [`html`]: Landing page document model and its presenter
//! - [`terminal`]: Themed ANSI presenter
//! - [`helpers`]: Terminal text utilities (highlighting, wrapping)
//! - [`theme`]: Colour schemes and ANSI escape sequences
//! - [`sanitize`]: HTML escaping
//! - [`format`]: Number and message formatting

pub mod format;
pub mod helpers;
pub mod html;
pub mod presenter;
pub mod sanitize;
pub mod terminal;
pub mod theme;
pub mod viewmodel;

pub use html::{HtmlPresenter, LandingPage};
pub use presenter::{apply_action, apply_actions, Presenter};
pub use terminal::TerminalPresenter;
pub use theme::Theme;
pub use viewmodel::{ArticleLink, CategoryView, FeaturedView, StatsView, Suggestion, ToastView};
