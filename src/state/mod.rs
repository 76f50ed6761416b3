//! Application state cells
//!
//! Each cell is owned by one component and only changes through that
//! component's operations:
//! - [`ThemeState`]: light/dark flag, resolved to a palette on read
//! - [`NavigationState`]: the selected screen
//! - [`DrawerVisibility`]: drawer open/closed, with superseding transitions
//!
//! [`AppSnapshot`] is the immutable copy of all three that a frame renders.

mod drawer;
mod navigation;
mod snapshot;
mod theme;

pub use drawer::{DrawerState, DrawerTransition, DrawerVisibility};
pub use navigation::{NavigationState, ScreenId};
pub use snapshot::AppSnapshot;
pub use theme::{ThemeMode, ThemeState};
