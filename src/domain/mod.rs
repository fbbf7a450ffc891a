//! Domain layer for the archive front end.
//!
//! This module contains the core data types loaded from the archive's static
//! resources, independent of how they are fetched or presented.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`lenient`]: Forgiving deserializers for loosely typed fields
//! - [`article`]: Article records and confidence normalization
//! - [`stats`]: Summary counters and category counts
//! - [`snapshot`]: The loaded archive and featured-article selection

pub mod article;
pub mod error;
pub mod lenient;
pub mod snapshot;
pub mod stats;

pub use article::{Article, ConfidenceClass};
pub use error::{ArchiveError, Result};
pub use snapshot::{ArchiveSnapshot, ArticleIndex};
pub use stats::{CategoryCount, StatKind, Stats};
