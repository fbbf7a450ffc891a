//! Path utilities for configuration and source locations.
//!
//! Resolves the per-user configuration location and expands `~` in paths given
//! on the command line or in the configuration file.

use std::path::PathBuf;

/// Application directory name under the platform config directory.
const APP_DIR: &str = "archive-front";

/// Returns the default configuration file path.
///
/// Resolves to `<config dir>/archive-front/config.toml`, e.g.
/// `~/.config/archive-front/config.toml` on Linux. Returns `None` on platforms
/// without a config directory.
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and all paths when the home directory is
/// unknown, are returned unchanged.
///
/// # Examples
///
/// ```
/// use archive_front::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/srv/site"), "/srv/site");
/// assert!(!expand_tilde("~/site").starts_with('~') || dirs::home_dir().is_none());
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    let Some(home) = dirs::home_dir() else {
        return path.to_string();
    };

    if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest).display().to_string()
    } else if path == "~" {
        home.display().to_string()
    } else {
        path.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_untouched() {
        assert_eq!(expand_tilde("/var/www/archive"), "/var/www/archive");
        assert_eq!(expand_tilde("relative/dir"), "relative/dir");
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home.display().to_string());
            assert_eq!(
                expand_tilde("~/site"),
                home.join("site").display().to_string()
            );
        }
    }

    #[test]
    fn config_path_ends_with_app_file() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with("archive-front/config.toml"));
        }
    }
}
