//! Event and message handlers for the App.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::state::{AppSnapshot, ScreenId};
use crate::ui::interaction::handle_click_action;

use super::{App, AppMessage, InputEvent};

impl App {
    /// Apply one user action.
    pub fn dispatch(&mut self, event: InputEvent) {
        tracing::debug!("Input: {:?}", event);
        match event {
            InputEvent::ToggleSwitchChanged(_) => self.toggle_theme(),
            InputEvent::DrawerItemTapped(screen) => self.select_screen(screen),
            InputEvent::MenuIconTapped => self.open_drawer(),
            InputEvent::ScrimOrSwipeDismiss => {
                // Drawer gestures only exist while the drawer is showing.
                if self.drawer.is_visible() {
                    self.close_drawer();
                }
            }
            InputEvent::MoveDrawerCursor(delta) => {
                if self.drawer.is_visible() {
                    self.move_drawer_cursor(delta);
                }
            }
            InputEvent::Quit => self.quit(),
        }
    }

    /// Handle one terminal event from the event stream.
    pub fn handle_terminal_event(&mut self, event: Event) {
        match event {
            // The next draw picks up the new size from the backend.
            Event::Resize(..) => self.mark_dirty(),
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if let Some(input) = input_for_key(&key, &self.snapshot()) {
                    self.dispatch(input);
                }
            }
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_registry.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            // Horizontal scroll is the terminal's closest thing to a swipe.
            MouseEventKind::ScrollLeft => self.dispatch(InputEvent::ScrimOrSwipeDismiss),
            _ => {}
        }
    }

    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        match msg {
            AppMessage::DrawerSettled { generation } => self.settle_drawer(generation),
        }
    }
}

/// Translate a key press into an input event for the current frame.
///
/// While the drawer is visible, keys act on the drawer; otherwise they act on
/// the header menu and the dark mode switch.
pub fn input_for_key(key: &KeyEvent, snapshot: &AppSnapshot) -> Option<InputEvent> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(InputEvent::Quit);
    }

    if snapshot.drawer_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::Left => Some(InputEvent::ScrimOrSwipeDismiss),
            KeyCode::Up | KeyCode::Char('k') => Some(InputEvent::MoveDrawerCursor(-1)),
            KeyCode::Down | KeyCode::Char('j') => Some(InputEvent::MoveDrawerCursor(1)),
            KeyCode::Enter | KeyCode::Right => {
                Some(InputEvent::DrawerItemTapped(snapshot.drawer_cursor))
            }
            KeyCode::Char(c @ '1'..='3') => {
                ScreenId::from_index(c as usize - '1' as usize).map(InputEvent::DrawerItemTapped)
            }
            KeyCode::Char('q') => Some(InputEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('m') | KeyCode::Enter => Some(InputEvent::MenuIconTapped),
        KeyCode::Char('t') | KeyCode::Char(' ') => {
            Some(InputEvent::ToggleSwitchChanged(!snapshot.dark_mode()))
        }
        KeyCode::Char('q') => Some(InputEvent::Quit),
        _ => None,
    }
}
