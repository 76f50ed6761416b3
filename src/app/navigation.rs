//! State transitions for the App.

use crate::state::{DrawerTransition, ScreenId};

use super::{App, AppMessage};

impl App {
    /// Flip between the light and dark palette.
    pub fn toggle_theme(&mut self) {
        self.theme.toggle();
        self.mark_dirty();
    }

    /// Show `screen` and close the drawer.
    pub fn select_screen(&mut self, screen: ScreenId) {
        self.navigation.select(screen);
        self.drawer_cursor = screen;
        self.close_drawer();
        self.mark_dirty();
    }

    /// Request the drawer to open. The highlight starts on the current screen.
    pub fn open_drawer(&mut self) {
        if !self.drawer.is_visible() {
            self.drawer_cursor = self.navigation.current();
        }
        let transition = self.drawer.open();
        self.schedule_settle(transition);
        self.mark_dirty();
    }

    /// Request the drawer to close.
    pub fn close_drawer(&mut self) {
        let transition = self.drawer.close();
        self.schedule_settle(transition);
        self.mark_dirty();
    }

    /// Move the drawer highlight, clamped to the first and last rows.
    pub fn move_drawer_cursor(&mut self, delta: i8) {
        let last = ScreenId::ALL.len() - 1;
        let index = (self.drawer_cursor.index() as isize + delta as isize).clamp(0, last as isize);
        if let Some(screen) = ScreenId::from_index(index as usize) {
            self.drawer_cursor = screen;
        }
        self.mark_dirty();
    }

    /// Mark the app to quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Apply a drawer settle posted by a transition task.
    pub(super) fn settle_drawer(&mut self, generation: u64) {
        if self.drawer.settle(generation) {
            self.mark_dirty();
        }
    }

    /// Arrange for `transition` to settle after the reveal/hide delay.
    ///
    /// With no delay, or outside a tokio runtime, the drawer settles at once.
    fn schedule_settle(&mut self, transition: Option<DrawerTransition>) {
        let Some(transition) = transition else {
            return;
        };

        if self.transition_delay.is_zero() {
            self.drawer.settle(transition.generation);
            return;
        }

        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let tx = self.message_tx.clone();
                let delay = self.transition_delay;
                let generation = transition.generation;
                handle.spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(AppMessage::DrawerSettled { generation });
                });
            }
            Err(_) => {
                tracing::trace!("No runtime for drawer transition, settling immediately");
                self.drawer.settle(transition.generation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::state::{DrawerState, ThemeMode};

    fn instant_app() -> App {
        App::with_config(&AppConfig::default().with_drawer_transition_ms(0))
    }

    #[test]
    fn test_toggle_theme_marks_dirty() {
        let mut app = instant_app();
        app.needs_redraw = false;
        app.toggle_theme();
        assert!(app.needs_redraw);
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
    }

    #[test]
    fn test_open_then_close() {
        let mut app = instant_app();
        app.open_drawer();
        assert_eq!(app.drawer.state(), DrawerState::Open);
        app.close_drawer();
        assert_eq!(app.drawer.state(), DrawerState::Closed);
    }

    #[test]
    fn test_select_closes_drawer_from_any_state() {
        for screen in ScreenId::ALL {
            for start_open in [false, true] {
                let mut app = instant_app();
                if start_open {
                    app.open_drawer();
                }
                app.select_screen(screen);
                assert_eq!(app.navigation.current(), screen);
                assert_eq!(app.drawer.state(), DrawerState::Closed);
            }
        }
    }

    #[test]
    fn test_open_resets_cursor_to_current_screen() {
        let mut app = instant_app();
        app.select_screen(ScreenId::Screen3);
        app.drawer_cursor = ScreenId::Screen1;
        app.open_drawer();
        assert_eq!(app.drawer_cursor, ScreenId::Screen3);
    }

    #[test]
    fn test_move_drawer_cursor_clamps() {
        let mut app = instant_app();
        app.open_drawer();
        app.move_drawer_cursor(-1);
        assert_eq!(app.drawer_cursor, ScreenId::Screen1);
        app.move_drawer_cursor(1);
        app.move_drawer_cursor(1);
        app.move_drawer_cursor(1);
        assert_eq!(app.drawer_cursor, ScreenId::Screen3);
    }

    #[test]
    fn test_delayed_transition_without_runtime_settles() {
        // Default config has a delay, but no runtime is running here.
        let mut app = App::new();
        app.open_drawer();
        assert_eq!(app.drawer.state(), DrawerState::Open);
    }

    #[test]
    fn test_quit_sets_flag() {
        let mut app = instant_app();
        app.quit();
        assert!(app.should_quit);
    }
}
