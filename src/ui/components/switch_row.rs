//! Toggle Row Component
//!
//! A surface-colored card holding the dark mode switch and its label.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::ui::interaction::HitAreaRegistry;
use crate::ui::router::{TextTreatment, ToggleRow};
use crate::ui::theme::Palette;

pub const SWITCH_ON: &str = "[━━●]";
pub const SWITCH_OFF: &str = "[●━━]";

/// Switch glyph for a checked state
pub fn switch_glyph(checked: bool) -> &'static str {
    if checked {
        SWITCH_ON
    } else {
        SWITCH_OFF
    }
}

/// Style for text drawn on a surface.
pub fn text_style(treatment: TextTreatment, palette: &Palette) -> Style {
    match treatment {
        TextTreatment::OnSurface => Style::default().fg(palette.on_surface),
        TextTreatment::Inherited => Style::default(),
    }
}

/// Render the card and register it as the switch's click target.
pub fn render_switch_row(
    frame: &mut Frame,
    area: Rect,
    toggle: &ToggleRow,
    treatment: TextTreatment,
    palette: &Palette,
    hits: &mut HitAreaRegistry,
) {
    if area.height == 0 || area.width == 0 {
        return;
    }

    let card = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(palette.primary_variant))
        .style(Style::default().bg(palette.surface).fg(palette.on_surface));
    let inner = card.inner(area);
    frame.render_widget(card, area);

    let switch_style = if toggle.checked {
        Style::default()
            .fg(palette.secondary)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(palette.on_surface)
    };
    let line = Line::from(vec![
        Span::raw(" "),
        Span::styled(switch_glyph(toggle.checked), switch_style),
        Span::raw(" "),
        Span::styled(toggle.label, text_style(treatment, palette)),
    ]);
    frame.render_widget(Paragraph::new(line), inner);

    hits.register(area, toggle.on_toggle.clone());
}
