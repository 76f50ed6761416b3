//! Runtime configuration.
//!
//! Values come from, in increasing precedence: built-in defaults, an optional
//! JSON file, and `THEMED_DRAWER_*` environment variables.
//!
//! # Example
//!
//! ```ignore
//! use themed_drawer::config::AppConfig;
//!
//! let config = AppConfig::default()
//!     .with_drawer_transition_ms(0)
//!     .with_mouse(false);
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

pub const ENV_TRANSITION_MS: &str = "THEMED_DRAWER_TRANSITION_MS";
pub const ENV_LOG: &str = "THEMED_DRAWER_LOG";
pub const ENV_LOG_DIR: &str = "THEMED_DRAWER_LOG_DIR";
pub const ENV_NO_MOUSE: &str = "THEMED_DRAWER_NO_MOUSE";

const APP_DIR: &str = "themed-drawer";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Drawer reveal/hide delay in milliseconds (0 settles immediately)
    pub drawer_transition_ms: u64,
    /// `tracing` filter directive (default: "info")
    pub log_filter: String,
    /// Directory for the log file (default: platform data dir)
    pub log_dir: Option<PathBuf>,
    /// Capture mouse events for click navigation
    pub mouse: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            drawer_transition_ms: 150,
            log_filter: "info".to_string(),
            log_dir: None,
            mouse: true,
        }
    }
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_drawer_transition_ms(mut self, ms: u64) -> Self {
        self.drawer_transition_ms = ms;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    pub fn with_mouse(mut self, mouse: bool) -> Self {
        self.mouse = mouse;
        self
    }

    pub fn drawer_transition(&self) -> Duration {
        Duration::from_millis(self.drawer_transition_ms)
    }

    /// Default config file location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
    }

    /// Directory the log file goes to.
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| dirs::data_local_dir().map(|dir| dir.join(APP_DIR)))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Read a JSON config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply `THEMED_DRAWER_*` overrides from the environment.
    pub fn apply_env(mut self) -> AppResult<Self> {
        if let Some(ms) = env_u64(ENV_TRANSITION_MS)? {
            self.drawer_transition_ms = ms;
        }
        if let Ok(filter) = std::env::var(ENV_LOG) {
            self.log_filter = filter;
        }
        if let Ok(dir) = std::env::var(ENV_LOG_DIR) {
            self.log_dir = Some(PathBuf::from(dir));
        }
        if std::env::var(ENV_NO_MOUSE).is_ok() {
            self.mouse = false;
        }
        Ok(self)
    }

    /// Load the full configuration.
    ///
    /// An explicit `path` must exist; the default location is optional.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let base = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        base.apply_env()
    }
}

fn env_u64(key: &str) -> AppResult<Option<u64>> {
    match std::env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| AppError::config(key, value.clone(), e.to_string())),
        Err(_) => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.drawer_transition_ms, 150);
        assert_eq!(config.log_filter, "info");
        assert!(config.log_dir.is_none());
        assert!(config.mouse);
    }

    #[test]
    fn test_builder_chaining() {
        let config = AppConfig::new()
            .with_drawer_transition_ms(0)
            .with_log_filter("debug")
            .with_log_dir("/tmp/logs")
            .with_mouse(false);

        assert_eq!(config.drawer_transition(), Duration::ZERO);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.resolved_log_dir(), PathBuf::from("/tmp/logs"));
        assert!(!config.mouse);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"drawer_transition_ms": 100}"#).unwrap();
        assert_eq!(config.drawer_transition_ms, 100);
        assert_eq!(config.log_filter, "info");
        assert!(config.mouse);
    }
}
