//! Event handling system

mod event_loop;
mod input;

pub use event_loop::EventLoop;
pub use input::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Event was consumed and processed
    Consumed,
    /// Event was ignored
    Ignored,
    /// Something was painted outside the frame buffer (a modal dialog);
    /// the next frame must be drawn in full
    Repaint,
    /// Request to quit the application
    Quit,
}

impl EventResult {
    /// Check if quit was requested
    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}
