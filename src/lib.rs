//! themed-drawer - light/dark theme toggle and drawer navigation in the terminal
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod state;
pub mod terminal;
pub mod ui;
