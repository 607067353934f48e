//! RAII guard for raw terminal mode

use crossterm::{
    cursor::Show,
    event::{DisableBracketedPaste, DisableMouseCapture},
    execute,
    terminal::{disable_raw_mode, LeaveAlternateScreen},
};
use std::io::{self, stdout};

/// RAII guard for raw terminal mode
///
/// Dropping the guard disables raw mode and mouse capture, leaves the
/// alternate screen and shows the cursor again, also when unwinding from a
/// panic.
pub struct RawModeGuard {
    _private: (),
}

impl RawModeGuard {
    /// Only `Terminal::enter_raw_mode` hands these out
    pub(crate) fn new() -> Self {
        Self { _private: () }
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Best effort cleanup - ignore errors during drop
        let _ = cleanup_terminal();
    }
}

fn cleanup_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        stdout(),
        DisableMouseCapture,
        DisableBracketedPaste,
        LeaveAlternateScreen,
        Show
    )?;
    Ok(())
}
