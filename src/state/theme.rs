//! Light/dark theme selection.
//!
//! [`ThemeState`] owns the single [`ThemeMode`] for the session. The palette
//! is never stored; it is resolved from the mode on every read.

use serde::{Deserialize, Serialize};

use crate::ui::theme::{palette_for, Palette};

/// Which palette the session is using.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Display name used in logs.
    pub fn name(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }
}

/// Owner of the session's theme flag.
#[derive(Debug, Clone, Default)]
pub struct ThemeState {
    mode: ThemeMode,
}

impl ThemeState {
    /// Create a theme state starting in light mode.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_dark(&self) -> bool {
        self.mode.is_dark()
    }

    /// Flip Light <-> Dark.
    pub fn toggle(&mut self) {
        self.mode = self.mode.toggled();
        tracing::debug!("Theme toggled to {}", self.mode.name());
    }

    /// Resolve the palette for the current mode.
    pub fn current_palette(&self) -> &'static Palette {
        palette_for(self.mode)
    }
}
