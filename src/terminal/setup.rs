//! Terminal setup and teardown functions.

use crossterm::{
    cursor::{Hide, Show},
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter TUI mode: alternate screen, hidden cursor and, optionally, mouse
/// capture for click navigation.
pub fn enter_tui_mode<W: Write>(writer: &mut W, mouse: bool) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)?;
    if mouse {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Safe to call more than once; errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal after a panic or error, ignoring all failures.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
