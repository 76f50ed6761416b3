//! Hit areas for mouse interaction.
//!
//! Components register the rectangles they draw together with the action a
//! click should trigger. The event loop hit-tests mouse clicks against the
//! registry filled by the last render.

use ratatui::layout::Rect;

use crate::state::ScreenId;

/// Something a click (or an equivalent key press) asks the app to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Menu icon in the header bar
    OpenDrawer,
    /// Dark mode switch row
    ToggleTheme,
    /// Drawer item
    SelectScreen(ScreenId),
    /// Scrim outside an open drawer
    DismissDrawer,
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x + self.rect.width
            && y >= self.rect.y
            && y < self.rect.y + self.rect.height
    }
}

/// Hit areas registered by the most recent frame.
///
/// Later registrations sit on top: the drawer registers after the screen it
/// covers, so its items win over whatever is underneath.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every area. Called at the start of each frame.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
