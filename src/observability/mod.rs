//! Tracing subscriber setup with an optional rotating log file.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → fmt layer → stderr
//!                            └→ fmt layer → FileWriter → rotating log file
//! ```
//!
//! # Configuration
//!
//! The filter is resolved from:
//! 1. `trace_level` in the config (also set by `--trace-level`)
//! 2. `RUST_LOG` environment variable
//! 3. Default: `"info"`
//!
//! # Modules
//!
//! - [`init`]: Subscriber initialization
//! - [`file_writer`]: Rotating file writer with size-based rotation

pub mod file_writer;
mod init;

pub use file_writer::FileWriter;
pub use init::{init_tracing, resolve_filter};
