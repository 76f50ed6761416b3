use serde::{Deserialize, Serialize};

use super::{DrawerState, ScreenId, ThemeMode};
use crate::ui::theme::{palette_for, Palette};

/// Immutable view of the session state for a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppSnapshot {
    pub theme: ThemeMode,
    pub screen: ScreenId,
    /// Settled drawer state
    pub drawer: DrawerState,
    /// Whether the drawer panel is drawn (open or opening)
    pub drawer_visible: bool,
    /// Highlighted drawer row while the drawer is visible
    pub drawer_cursor: ScreenId,
}

impl AppSnapshot {
    pub fn palette(&self) -> &'static Palette {
        palette_for(self.theme)
    }

    pub fn dark_mode(&self) -> bool {
        self.theme.is_dark()
    }

    /// The (theme, screen, drawer) triple of the state machine.
    pub fn triple(&self) -> (ThemeMode, ScreenId, DrawerState) {
        (self.theme, self.screen, self.drawer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_is_initial_state() {
        let snapshot = AppSnapshot::default();
        assert_eq!(
            snapshot.triple(),
            (ThemeMode::Light, ScreenId::Screen1, DrawerState::Closed)
        );
        assert!(!snapshot.drawer_visible);
    }

    #[test]
    fn test_snapshot_serializes() {
        let snapshot = AppSnapshot {
            theme: ThemeMode::Dark,
            ..AppSnapshot::default()
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"theme\":\"Dark\""));
        assert!(json.contains("\"screen\":\"Screen1\""));
    }
}
