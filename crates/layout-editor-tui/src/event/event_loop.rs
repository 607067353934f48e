//! Blocking event source over crossterm

use super::Event;
use std::io;

/// Blocking event loop over the terminal's input stream
///
/// Each call to [`EventLoop::next`] waits for exactly one terminal event;
/// there are no ticks and no background tasks.
#[derive(Debug, Default)]
pub struct EventLoop {
    _private: (),
}

impl EventLoop {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for the next event
    ///
    /// Returns an error when the driver fails to read or decode input. The
    /// stream itself stays usable, so callers may simply call `next` again.
    pub fn next(&mut self) -> io::Result<Event> {
        crossterm::event::read().map(Event::from)
    }
}
