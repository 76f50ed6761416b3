//! Input events understood by the app.

use crate::state::ScreenId;

/// A user action after key/mouse decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The dark mode switch was flipped. The reported value is not used:
    /// every change flips the current mode.
    ToggleSwitchChanged(bool),
    /// A drawer row was chosen
    DrawerItemTapped(ScreenId),
    /// Header bar menu icon (opens the drawer)
    MenuIconTapped,
    /// Scrim click, swipe or Esc (closes the drawer)
    ScrimOrSwipeDismiss,
    /// Move the drawer highlight by this many rows
    MoveDrawerCursor(i8),
    Quit,
}
