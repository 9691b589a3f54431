//! JSON-backed configuration for the iqnav client.
//!
//! The file lives in the standard configuration directory
//! (`~/.config/iqnav/config.json` on most platforms) unless overridden with
//! `IQNAV_CONFIG_PATH` or an explicit path. Every field is optional; missing
//! fields fall back to the defaults below.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::config_dir;
use iqnav_types::{NavAction, NavItem, Route};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::expand_tilde;

/// Environment variable allowing callers to override the config file path.
pub const CONFIG_PATH_ENV: &str = "IQNAV_CONFIG_PATH";
/// Environment variable allowing callers to override the log file path.
pub const LOG_PATH_ENV: &str = "IQNAV_LOG_PATH";

/// Default filename for the JSON payload.
pub const CONFIG_FILE_NAME: &str = "config.json";
/// Default filename for the diagnostic log.
pub const LOG_FILE_NAME: &str = "iqnav.log";

/// Cells kept free at the right edge of the bar for the "More" trigger.
pub const DEFAULT_RESERVED_WIDTH: u16 = 8;

/// Error surfaced when reading configuration fails.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure other than a missing file.
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Persisted configuration values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Width reserved for the overflow trigger, in terminal cells.
    pub reserved_width: u16,
    /// Gap between inline navigation entries, in terminal cells.
    pub spacing: u16,
    /// When `false`, layout observation is disabled and every entry renders inline.
    pub observe_layout: bool,
    /// Quiz time limit in minutes.
    pub quiz_minutes: u32,
    /// Number of focus losses after which a quiz session is flagged.
    pub focus_loss_limit: u32,
    /// Navigation entries; `None` uses the built-in product navigation.
    pub items: Option<Vec<NavItem>>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            reserved_width: DEFAULT_RESERVED_WIDTH,
            spacing: 1,
            observe_layout: true,
            quiz_minutes: 30,
            focus_loss_limit: 3,
            items: None,
        }
    }
}

impl NavConfig {
    /// Loads configuration from `path`, or from the default location when `None`.
    ///
    /// A missing file yields defaults. A file that fails to parse is logged
    /// and also yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = path.map(Path::to_path_buf).unwrap_or_else(default_config_path);
        match fs::read_to_string(&resolved) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(config) => {
                    debug!(path = %resolved.display(), "Loaded configuration");
                    Ok(config)
                }
                Err(error) => {
                    warn!(
                        path = %resolved.display(),
                        error = %error,
                        "Failed to parse config file; using defaults"
                    );
                    Ok(Self::default())
                }
            },
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io { path: resolved, source }),
        }
    }

    /// Navigation entries to show, in order.
    pub fn nav_items(&self) -> Vec<NavItem> {
        self.items.clone().unwrap_or_else(default_nav_items)
    }
}

/// The product navigation: learner pages, back-office pages, timer and sign-out.
pub fn default_nav_items() -> Vec<NavItem> {
    let mut items: Vec<NavItem> = Route::ALL.into_iter().map(NavItem::route).collect();
    items.push(NavItem::new("Timer", NavAction::Element("quiz-timer".into())));
    items.push(NavItem::new("Sign out", NavAction::Invoke("sign-out".into())));
    items
}

/// Directory holding the config and log files.
pub fn default_config_dir() -> PathBuf {
    config_dir().unwrap_or_else(|| PathBuf::from(".")).join("iqnav")
}

fn default_config_path() -> PathBuf {
    env_path(CONFIG_PATH_ENV).unwrap_or_else(|| default_config_dir().join(CONFIG_FILE_NAME))
}

/// Path of the diagnostic log file.
pub fn default_log_path() -> PathBuf {
    env_path(LOG_PATH_ENV).unwrap_or_else(|| default_config_dir().join(LOG_FILE_NAME))
}

fn env_path(name: &str) -> Option<PathBuf> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(expand_tilde(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempdir().expect("tempdir");
        let config = NavConfig::load(Some(&dir.path().join("absent.json"))).expect("load");
        assert_eq!(config, NavConfig::default());
        assert_eq!(config.nav_items(), default_nav_items());
    }

    #[test]
    fn partial_file_keeps_remaining_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{"reserved_width": 12, "items": [{"label": "Questions", "action": {"kind": "navigate", "target": "quiz"}}]}"#,
        )
        .expect("write config");

        let config = NavConfig::load(Some(&path)).expect("load");
        assert_eq!(config.reserved_width, 12);
        assert_eq!(config.spacing, 1);
        assert!(config.observe_layout);
        assert_eq!(config.nav_items(), vec![NavItem::route(Route::Quiz)]);
    }

    #[test]
    fn malformed_file_falls_back_to_defaults() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").expect("write config");
        assert_eq!(NavConfig::load(Some(&path)).expect("load"), NavConfig::default());
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempdir().expect("tempdir");
        let result = NavConfig::load(Some(dir.path()));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn env_override_selects_config_file() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("custom.json");
        fs::write(&path, r#"{"observe_layout": false, "quiz_minutes": 5}"#).expect("write config");

        temp_env::with_var(CONFIG_PATH_ENV, Some(path.to_str().expect("utf8 path")), || {
            let config = NavConfig::load(None).expect("load");
            assert!(!config.observe_layout);
            assert_eq!(config.quiz_minutes, 5);
        });
    }

    #[test]
    fn default_navigation_ends_with_timer_and_sign_out() {
        let items = default_nav_items();
        assert_eq!(items.len(), Route::ALL.len() + 2);
        assert_eq!(items[1], NavItem::route(Route::Quiz));
        assert_eq!(items.last().map(|item| &item.action), Some(&NavAction::Invoke("sign-out".into())));
    }
}
