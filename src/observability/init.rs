//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither config nor environment names one.
const DEFAULT_LEVEL: &str = "info";

/// Builds the event filter from the configured level, `RUST_LOG`, or the default.
///
/// An unparsable directive falls back to the default level.
#[must_use]
pub fn resolve_filter(trace_level: Option<&str>) -> EnvFilter {
    match trace_level {
        Some(level) => EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL)),
    }
}

/// Initializes the global tracing subscriber.
///
/// Events go to stderr. When `log_file` is configured they are also appended,
/// without ANSI colours, to that file with size-based rotation. If the log
/// directory cannot be created the file layer is skipped.
///
/// Idempotent: only the first call installs a subscriber.
///
/// # Example
///
/// ```rust
/// use archive_front::observability::init_tracing;
/// use archive_front::Config;
///
/// let config = Config {
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let filter = resolve_filter(config.trace_level.as_deref());

    let file_layer = config.log_file.as_deref().and_then(|path| {
        let path = PathBuf::from(crate::infrastructure::expand_tilde(path));
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if std::fs::create_dir_all(parent).is_err() {
                return None;
            }
        }
        Some(
            fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(FileWriter::new(path)),
        )
    });

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer);

    let _ = subscriber.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::filter::LevelFilter;

    #[test]
    fn configured_level_is_used() {
        assert_eq!(resolve_filter(Some("debug")).max_level_hint(), Some(LevelFilter::DEBUG));
        assert_eq!(resolve_filter(Some("warn")).max_level_hint(), Some(LevelFilter::WARN));
    }
}
