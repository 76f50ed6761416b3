//! Prelude module for convenient imports.
//!
//! ```ignore
//! use themed_drawer::prelude::*;
//! ```

pub use crate::app::{App, AppMessage, InputEvent};
pub use crate::config::AppConfig;
pub use crate::error::{AppError, AppResult};
pub use crate::state::{
    AppSnapshot, DrawerState, DrawerVisibility, NavigationState, ScreenId, ThemeMode, ThemeState,
};
pub use crate::ui::{render, route, Palette, ScreenActions, ScreenContent};
