//! Mouse interaction.
//!
//! Render code registers hit areas; the event loop hit-tests left clicks and
//! hands the resulting [`ClickAction`] to [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::{handle_click_action, input_for_click};
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
