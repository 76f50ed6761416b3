//! UI rendering
//!
//! Rendering is a pure function of an [`AppSnapshot`]: the router describes
//! the selected screen, the components draw it in the snapshot's palette, and
//! every clickable region is recorded in the [`HitAreaRegistry`] for the event
//! loop to hit-test.

pub mod components;
pub mod interaction;
pub mod layout;
pub mod router;
pub mod theme;

pub use interaction::{handle_click_action, ClickAction, HitAreaRegistry};
pub use layout::ScreenLayout;
pub use router::{route, ScreenActions, ScreenContent, TextTreatment};
pub use theme::{palette_for, Palette, DARK_PALETTE, LIGHT_PALETTE};

use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Padding, Paragraph, Wrap},
    Frame,
};

use crate::state::AppSnapshot;
use components::{render_app_bar, render_drawer_panel, render_switch_row, text_style};

/// First-line indent of body text
const BODY_INDENT: &str = "    ";

/// Render one frame for `snapshot`.
pub fn render(frame: &mut Frame, snapshot: &AppSnapshot, hits: &mut HitAreaRegistry) {
    hits.clear();

    let area = frame.area();
    let palette = snapshot.palette();
    let content = route(
        snapshot.screen,
        snapshot.dark_mode(),
        &ScreenActions::default(),
    );

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background).fg(palette.on_background)),
        area,
    );

    let layout = ScreenLayout::new(area);
    render_app_bar(frame, layout.header, &content.header, palette, hits);
    render_switch_row(
        frame,
        layout.toggle_card,
        &content.toggle,
        content.text,
        palette,
        hits,
    );
    render_body(frame, layout.body, &content, palette);

    if snapshot.drawer_visible {
        render_drawer_panel(
            frame,
            area,
            snapshot.screen,
            snapshot.drawer_cursor,
            palette,
            hits,
        );
    }
}

fn render_body(frame: &mut Frame, area: Rect, content: &ScreenContent, palette: &Palette) {
    let surface = Block::default()
        .padding(Padding::uniform(1))
        .style(Style::default().bg(palette.surface).fg(palette.on_surface));
    let text = Line::styled(
        format!("{}{}", BODY_INDENT, content.body),
        text_style(content.text, palette),
    );
    let body = Paragraph::new(text)
        .block(surface)
        .wrap(Wrap { trim: false });
    frame.render_widget(body, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{DrawerState, ScreenId, ThemeMode};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn draw(snapshot: &AppSnapshot) -> (Buffer, HitAreaRegistry) {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = HitAreaRegistry::new();
        terminal
            .draw(|f| render(f, snapshot, &mut hits))
            .unwrap();
        (terminal.backend().buffer().clone(), hits)
    }

    fn buffer_text(buffer: &Buffer) -> String {
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_render_title_and_body() {
        let (buffer, _) = draw(&AppSnapshot::default());
        let text = buffer_text(&buffer);
        assert!(text.contains("Screen 1"));
        assert!(text.contains("Enable Dark Mode"));
        assert!(text.contains("Geeks for geeks"));
    }

    #[test]
    fn test_render_uses_palette_background() {
        let light = draw(&AppSnapshot::default()).0;
        let dark = draw(&AppSnapshot {
            theme: ThemeMode::Dark,
            ..AppSnapshot::default()
        })
        .0;
        // Bottom-right cell is body surface.
        assert_eq!(light[(79, 23)].bg, LIGHT_PALETTE.surface);
        assert_eq!(dark[(79, 23)].bg, DARK_PALETTE.surface);
        // Header uses primary.
        assert_eq!(light[(40, 0)].bg, LIGHT_PALETTE.primary);
    }

    #[test]
    fn test_closed_drawer_registers_menu_and_switch_only() {
        let (_, hits) = draw(&AppSnapshot::default());
        assert_eq!(hits.hit_test(1, 1), Some(ClickAction::OpenDrawer));
        assert_eq!(hits.hit_test(20, 4), Some(ClickAction::ToggleTheme));
        assert_eq!(hits.hit_test(20, 15), None);
    }

    #[test]
    fn test_open_drawer_lists_screens() {
        let snapshot = AppSnapshot {
            screen: ScreenId::Screen2,
            drawer: DrawerState::Open,
            drawer_visible: true,
            drawer_cursor: ScreenId::Screen2,
            ..AppSnapshot::default()
        };
        let (buffer, hits) = draw(&snapshot);
        let text = buffer_text(&buffer);
        assert!(text.contains("Screen1"));
        assert!(text.contains("▶ Screen2"));
        assert!(text.contains("Screen3"));

        // Items sit on rows 1, 3, 5; the rest of the screen is scrim.
        assert_eq!(
            hits.hit_test(3, 3),
            Some(ClickAction::SelectScreen(ScreenId::Screen2))
        );
        assert_eq!(hits.hit_test(70, 20), Some(ClickAction::DismissDrawer));
        assert_eq!(hits.hit_test(1, 1), Some(ClickAction::SelectScreen(ScreenId::Screen1)));
    }

    #[test]
    fn test_open_drawer_panel_blank_rows_do_not_dismiss() {
        let snapshot = AppSnapshot {
            drawer: DrawerState::Open,
            drawer_visible: true,
            ..AppSnapshot::default()
        };
        let (_, hits) = draw(&snapshot);
        let drawer = layout::drawer_rect(Rect::new(0, 0, 80, 24));

        // Blank row above the items and the space below them.
        assert_eq!(hits.hit_test(5, 0), None);
        assert_eq!(hits.hit_test(5, 20), None);
        // The scrim starts right after the panel.
        assert_eq!(hits.hit_test(drawer.right() - 1, 20), None);
        assert_eq!(hits.hit_test(drawer.right(), 20), Some(ClickAction::DismissDrawer));
        assert_eq!(hits.hit_test(drawer.right(), 0), Some(ClickAction::DismissDrawer));
    }
}
