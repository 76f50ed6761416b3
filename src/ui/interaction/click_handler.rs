//! Click action handler.
//!
//! Turns a click resolved by the hit area registry into the matching
//! [`InputEvent`] and dispatches it.

use super::hit_area::ClickAction;
use crate::app::{App, InputEvent};

/// The input event a click stands for.
pub fn input_for_click(app: &App, action: &ClickAction) -> InputEvent {
    match action {
        ClickAction::OpenDrawer => InputEvent::MenuIconTapped,
        ClickAction::ToggleTheme => InputEvent::ToggleSwitchChanged(!app.theme.is_dark()),
        ClickAction::SelectScreen(screen) => InputEvent::DrawerItemTapped(*screen),
        ClickAction::DismissDrawer => InputEvent::ScrimOrSwipeDismiss,
    }
}

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    tracing::debug!("Click: {:?}", action);
    let event = input_for_click(app, &action);
    app.dispatch(event);
}
