//! Application state and logic for the TUI.
//!
//! [`App`] is the root controller. It owns the three state cells (theme,
//! navigation, drawer), turns [`InputEvent`]s into state transitions, and
//! hands the renderer an immutable [`AppSnapshot`] per frame.

mod handlers;
mod messages;
mod navigation;
mod types;

pub use handlers::input_for_key;
pub use messages::AppMessage;
pub use types::InputEvent;

use std::time::Duration;

use tokio::sync::mpsc;

use crate::config::AppConfig;
use crate::state::{AppSnapshot, DrawerVisibility, NavigationState, ScreenId, ThemeState};
use crate::ui::interaction::HitAreaRegistry;

/// Main application state
pub struct App {
    pub theme: ThemeState,
    pub navigation: NavigationState,
    pub drawer: DrawerVisibility,
    /// Highlighted drawer row for keyboard selection
    pub drawer_cursor: ScreenId,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: set when state changed and the UI must redraw
    pub needs_redraw: bool,
    /// Clickable regions registered by the last frame
    pub hit_registry: HitAreaRegistry,
    /// Sender handed to drawer transition tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    /// Receiver taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Delay before a drawer request settles
    pub transition_delay: Duration,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create an app with the default configuration.
    pub fn new() -> Self {
        Self::with_config(&AppConfig::default())
    }

    pub fn with_config(config: &AppConfig) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            theme: ThemeState::new(),
            navigation: NavigationState::new(),
            drawer: DrawerVisibility::new(),
            drawer_cursor: ScreenId::default(),
            should_quit: false,
            needs_redraw: true,
            hit_registry: HitAreaRegistry::new(),
            message_tx,
            message_rx: Some(message_rx),
            transition_delay: config.drawer_transition(),
        }
    }

    /// Immutable copy of the state for rendering.
    pub fn snapshot(&self) -> AppSnapshot {
        AppSnapshot {
            theme: self.theme.mode(),
            screen: self.navigation.current(),
            drawer: self.drawer.state(),
            drawer_visible: self.drawer.is_visible(),
            drawer_cursor: self.drawer_cursor,
        }
    }

    /// Mark the UI as needing a redraw
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }
}
