//! Drawer Panel Component
//!
//! Left-anchored panel listing the screens over a scrim. Uses the `▶`
//! marker for the current screen and highlights the keyboard cursor row.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
    Frame,
};

use crate::state::ScreenId;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::layout::{drawer_item_rect, drawer_rect};
use crate::ui::theme::{Palette, COLOR_SCRIM};

/// Dims everything already drawn without erasing it.
struct Scrim;

impl Widget for Scrim {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(
            area,
            Style::default().bg(COLOR_SCRIM).add_modifier(Modifier::DIM),
        );
    }
}

/// Render the scrim and the drawer. Returns the drawer's rect.
///
/// Items and the scrim to the right of the panel are registered as hit
/// areas. Blank rows of the panel are inert.
pub fn render_drawer_panel(
    frame: &mut Frame,
    area: Rect,
    current: ScreenId,
    cursor: ScreenId,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) -> Rect {
    let drawer = drawer_rect(area);

    frame.render_widget(Scrim, area);
    // Only the exposed scrim dismisses; clicks on the panel itself do not.
    let scrim = Rect {
        x: drawer.right(),
        width: area.width.saturating_sub(drawer.width),
        ..area
    };
    if !scrim.is_empty() {
        hits.register(scrim, ClickAction::DismissDrawer);
    }

    frame.render_widget(Clear, drawer);
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(palette.primary_variant))
        .style(Style::default().bg(palette.surface).fg(palette.on_surface));
    let inner = block.inner(drawer);
    frame.render_widget(block, drawer);

    // One blank row above the first item.
    let list = Rect {
        y: inner.y.saturating_add(1),
        height: inner.height.saturating_sub(1),
        ..inner
    };

    for screen in ScreenId::ALL {
        let Some(row) = drawer_item_rect(list, screen.index()) else {
            continue;
        };

        let is_current = screen == current;
        let marker = if is_current { "▶ " } else { "  " };
        let mut style = Style::default().fg(palette.on_surface);
        if is_current {
            style = style.fg(palette.primary).add_modifier(Modifier::BOLD);
        }
        if screen == cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{}{}", marker, screen.name()), style),
        ]);
        let text_row = Rect { height: 1, ..row };
        frame.render_widget(Paragraph::new(line), text_row);

        hits.register(row, ClickAction::SelectScreen(screen));
    }

    drawer
}
