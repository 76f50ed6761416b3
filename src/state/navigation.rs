//! Screen selection.

use serde::{Deserialize, Serialize};

/// The three screens reachable from the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ScreenId {
    #[default]
    Screen1,
    Screen2,
    Screen3,
}

impl ScreenId {
    /// Every screen, in drawer order.
    pub const ALL: [ScreenId; 3] = [ScreenId::Screen1, ScreenId::Screen2, ScreenId::Screen3];

    /// Drawer item label (the variant name).
    pub fn name(self) -> &'static str {
        match self {
            ScreenId::Screen1 => "Screen1",
            ScreenId::Screen2 => "Screen2",
            ScreenId::Screen3 => "Screen3",
        }
    }

    /// Header bar title.
    pub fn title(self) -> &'static str {
        match self {
            ScreenId::Screen1 => "Screen 1",
            ScreenId::Screen2 => "Screen 2",
            ScreenId::Screen3 => "Screen 3",
        }
    }

    /// Position in [`ScreenId::ALL`].
    pub fn index(self) -> usize {
        match self {
            ScreenId::Screen1 => 0,
            ScreenId::Screen2 => 1,
            ScreenId::Screen3 => 2,
        }
    }

    /// Screen at a drawer position, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Owner of the currently selected screen.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    current: ScreenId,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ScreenId {
        self.current
    }

    /// Select a screen. Selecting the current screen is a no-op.
    ///
    /// Closing the drawer is the caller's half of the selection; see
    /// [`crate::app::App::select_screen`].
    pub fn select(&mut self, screen: ScreenId) {
        if self.current != screen {
            tracing::debug!("Screen {} -> {}", self.current.name(), screen.name());
        }
        self.current = screen;
    }
}
