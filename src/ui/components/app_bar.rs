//! Header Bar Component
//!
//! Primary-colored bar with a menu icon and the screen title.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::ui::interaction::HitAreaRegistry;
use crate::ui::layout::MENU_ICON_WIDTH;
use crate::ui::router::HeaderBar;
use crate::ui::theme::Palette;

/// Glyph standing in for the menu icon
pub const MENU_ICON: &str = "≡";

/// Render the header bar and register the menu icon as clickable.
pub fn render_app_bar(
    frame: &mut Frame,
    area: Rect,
    header: &HeaderBar,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let style = Style::default().bg(palette.primary).fg(palette.on_primary);
    frame.render_widget(Block::default().style(style), area);

    let title_row = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    let bold = Style::default().add_modifier(Modifier::BOLD);
    let line = Line::from(vec![
        Span::raw("  "),
        Span::styled(MENU_ICON, bold),
        Span::raw("   "),
        Span::styled(header.title, bold),
    ]);
    frame.render_widget(Paragraph::new(line).style(style), title_row);

    let icon = Rect {
        width: MENU_ICON_WIDTH.min(area.width),
        ..area
    };
    hits.register(icon, header.on_menu.clone());
}
