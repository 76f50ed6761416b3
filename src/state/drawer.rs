//! Drawer visibility with superseding transitions.
//!
//! Opening or closing the drawer is a request, not an assignment. A request
//! records a target and a generation number; the drawer only settles into the
//! target when the matching generation is handed back to [`DrawerVisibility::settle`]
//! (normally after the reveal/hide delay elapses). Newer requests bump the
//! generation, so a settle for an older request is ignored and the last
//! request always wins.

use serde::{Deserialize, Serialize};

/// Whether the side panel is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

impl DrawerState {
    pub fn name(self) -> &'static str {
        match self {
            DrawerState::Open => "open",
            DrawerState::Closed => "closed",
        }
    }
}

/// An in-flight open/close request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawerTransition {
    pub target: DrawerState,
    pub generation: u64,
}

/// Owner of the drawer's open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DrawerVisibility {
    /// Settled state
    state: DrawerState,
    /// Latest request that has not settled yet
    pending: Option<DrawerTransition>,
    /// Generation of the most recent request (or cancellation)
    generation: u64,
}

impl DrawerVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    /// Settled state.
    pub fn state(&self) -> DrawerState {
        self.state
    }

    /// State the drawer is heading to (the settled state when idle).
    pub fn target(&self) -> DrawerState {
        self.pending.map(|t| t.target).unwrap_or(self.state)
    }

    pub fn pending(&self) -> Option<DrawerTransition> {
        self.pending
    }

    pub fn is_open(&self) -> bool {
        self.state == DrawerState::Open
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether the panel should be drawn: open, or on its way open.
    pub fn is_visible(&self) -> bool {
        self.target() == DrawerState::Open
    }

    /// Request the drawer to open.
    ///
    /// Returns the transition to await, or `None` when nothing new has to
    /// happen.
    pub fn open(&mut self) -> Option<DrawerTransition> {
        self.request(DrawerState::Open)
    }

    /// Request the drawer to close.
    pub fn close(&mut self) -> Option<DrawerTransition> {
        self.request(DrawerState::Closed)
    }

    fn request(&mut self, target: DrawerState) -> Option<DrawerTransition> {
        match self.pending {
            // Already heading there; the in-flight transition stands.
            Some(pending) if pending.target == target => None,
            // Heading away from the settled state, asked to stay: cancel.
            Some(_) if self.state == target => {
                self.generation += 1;
                self.pending = None;
                tracing::debug!("Drawer transition cancelled, staying {}", target.name());
                None
            }
            None if self.state == target => None,
            _ => {
                self.generation += 1;
                let transition = DrawerTransition {
                    target,
                    generation: self.generation,
                };
                self.pending = Some(transition);
                tracing::debug!(
                    "Drawer transition {} -> {} (generation={})",
                    self.state.name(),
                    target.name(),
                    self.generation
                );
                Some(transition)
            }
        }
    }

    /// Complete the transition with the given generation.
    ///
    /// Returns `true` if the drawer state changed. Superseded or cancelled
    /// generations are ignored.
    pub fn settle(&mut self, generation: u64) -> bool {
        match self.pending {
            Some(pending) if pending.generation == generation => {
                self.state = pending.target;
                self.pending = None;
                tracing::debug!("Drawer settled {}", self.state.name());
                true
            }
            _ => {
                tracing::trace!(
                    "Ignoring stale drawer settle (generation={}, latest={})",
                    generation,
                    self.generation
                );
                false
            }
        }
    }
}
