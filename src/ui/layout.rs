//! Screen layout
//!
//! Every screen stacks the same three regions: header bar, toggle card and
//! body surface. The drawer is a left-anchored column over the full area.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header bar height (title on the middle row)
pub const HEADER_HEIGHT: u16 = 3;
/// Toggle card height (bordered single row)
pub const TOGGLE_CARD_HEIGHT: u16 = 3;
/// Clickable width of the menu icon at the left of the header
pub const MENU_ICON_WIDTH: u16 = 5;

pub const DRAWER_MIN_WIDTH: u16 = 16;
pub const DRAWER_MAX_WIDTH: u16 = 32;
/// Rows per drawer item (text row plus padding)
pub const DRAWER_ITEM_HEIGHT: u16 = 2;

/// Regions of a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub toggle_card: Rect,
    pub body: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let [header, toggle_card, body] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(TOGGLE_CARD_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(area);

        Self {
            header,
            toggle_card,
            body,
        }
    }
}

/// Drawer column: three quarters of the width, within the min/max bounds.
pub fn drawer_rect(area: Rect) -> Rect {
    let width = (area.width.saturating_mul(3) / 4)
        .min(DRAWER_MAX_WIDTH)
        .max(DRAWER_MIN_WIDTH.min(area.width));

    Rect {
        x: area.x,
        y: area.y,
        width,
        height: area.height,
    }
}

/// Row of the drawer item at `index` inside the drawer's inner area.
///
/// Returns `None` when the item does not fit.
pub fn drawer_item_rect(inner: Rect, index: usize) -> Option<Rect> {
    let offset = (index as u16).checked_mul(DRAWER_ITEM_HEIGHT)?;
    if offset >= inner.height {
        return None;
    }
    Some(Rect {
        x: inner.x,
        y: inner.y + offset,
        width: inner.width,
        height: DRAWER_ITEM_HEIGHT.min(inner.height - offset),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout_standard() {
        let layout = ScreenLayout::new(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.header, Rect::new(0, 0, 80, 3));
        assert_eq!(layout.toggle_card, Rect::new(0, 3, 80, 3));
        assert_eq!(layout.body, Rect::new(0, 6, 80, 18));
    }

    #[test]
    fn test_drawer_width_bounds() {
        assert_eq!(drawer_rect(Rect::new(0, 0, 80, 24)).width, DRAWER_MAX_WIDTH);
        assert_eq!(drawer_rect(Rect::new(0, 0, 30, 24)).width, 22);
        assert_eq!(drawer_rect(Rect::new(0, 0, 18, 24)).width, DRAWER_MIN_WIDTH);
        assert_eq!(drawer_rect(Rect::new(0, 0, 10, 24)).width, 10);
    }

    #[test]
    fn test_drawer_item_rects() {
        let inner = Rect::new(1, 1, 20, 5);
        assert_eq!(drawer_item_rect(inner, 0), Some(Rect::new(1, 1, 20, 2)));
        assert_eq!(drawer_item_rect(inner, 2), Some(Rect::new(1, 5, 20, 1)));
        assert_eq!(drawer_item_rect(inner, 3), None);
    }
}
