//! Reusable UI Components
//!
//! - `app_bar` - Header bar with menu icon and title
//! - `switch_row` - Card holding the dark mode switch
//! - `drawer_panel` - Screen list drawn over a scrim

mod app_bar;
mod drawer_panel;
mod switch_row;

pub use app_bar::{render_app_bar, MENU_ICON};
pub use drawer_panel::render_drawer_panel;
pub use switch_row::{render_switch_row, switch_glyph, text_style, SWITCH_OFF, SWITCH_ON};
