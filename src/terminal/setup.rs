//! Low-level enter/leave sequences used by [`super::TerminalManager`].

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen and capture the mouse for sidebar clicks.
///
/// # Errors
///
/// Returns an error if writing the escape sequences fails.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableMouseCapture)
}

/// Undo [`enter_tui_mode`] and raw mode, ignoring every error.
///
/// Safe to call more than once.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableMouseCapture, LeaveAlternateScreen);
    let _ = writer.flush();
    let _ = execute!(writer, Show);
}

/// Best-effort restore on stdout for panic and error paths.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}
