//! Tracing initialization.
//!
//! The UI owns the terminal, so log output goes to a file instead:
//! `<log_dir>/themed-drawer.log`. `RUST_LOG`, when set, overrides the
//! configured filter.

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::AppConfig;

pub const LOG_FILE: &str = "themed-drawer.log";

/// Build the filter from `RUST_LOG` or the configured directive.
pub fn build_filter(config: &AppConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the log file.
///
/// Returns the log file path, or `None` if the file could not be opened, in
/// which case the app runs without logging. Only the first call in a process
/// takes effect.
pub fn init_tracing(config: &AppConfig) -> Option<PathBuf> {
    let log_dir = config.resolved_log_dir();
    if fs::create_dir_all(&log_dir).is_err() {
        return None;
    }

    let path = log_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(build_filter(config))
        .with(layer)
        .try_init()
        .ok()?;

    Some(path)
}
