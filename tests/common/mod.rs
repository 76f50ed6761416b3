//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! mod common;
//! use common::{instant_app, render_to_buffer};
//!
//! let mut app = instant_app();
//! let (buffer, hits) = render_to_buffer(&app.snapshot(), 80, 24);
//! ```

#![allow(dead_code)]

use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

use themed_drawer::app::App;
use themed_drawer::config::AppConfig;
use themed_drawer::state::AppSnapshot;
use themed_drawer::ui::{self, interaction::HitAreaRegistry};

/// App whose drawer requests settle synchronously.
pub fn instant_app() -> App {
    App::with_config(&AppConfig::default().with_drawer_transition_ms(0))
}

/// App whose drawer requests settle after `ms` milliseconds.
pub fn delayed_app(ms: u64) -> App {
    App::with_config(&AppConfig::default().with_drawer_transition_ms(ms))
}

/// Render one frame into a test buffer and return it with the hit areas.
pub fn render_to_buffer(snapshot: &AppSnapshot, width: u16, height: u16) -> (Buffer, HitAreaRegistry) {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let mut hits = HitAreaRegistry::new();
    terminal
        .draw(|f| ui::render(f, snapshot, &mut hits))
        .expect("draw");
    (terminal.backend().buffer().clone(), hits)
}

/// All text in the buffer, one line per row.
pub fn buffer_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

/// Render `app`'s current state the way the event loop does.
pub fn draw_app(app: &mut App, width: u16, height: u16) -> Buffer {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("test terminal");
    let snapshot = app.snapshot();
    let hits = &mut app.hit_registry;
    terminal
        .draw(|f| ui::render(f, &snapshot, hits))
        .expect("draw");
    app.needs_redraw = false;
    terminal.backend().buffer().clone()
}
