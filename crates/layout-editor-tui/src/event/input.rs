//! Input event types

// Re-export crossterm types with cleaner names
pub use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

/// Unified input event type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Keyboard event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal resize event
    Resize {
        /// New width in columns
        width: u16,
        /// New height in rows
        height: u16,
    },
    FocusGained,
    FocusLost,
    /// Paste event (bracketed paste mode)
    Paste(String),
}

impl Event {
    /// Get the key event if this is a key press (repeats included, releases excluded)
    pub fn as_key_press(&self) -> Option<&KeyEvent> {
        match self {
            Event::Key(key) if key.kind != KeyEventKind::Release => Some(key),
            _ => None,
        }
    }

    /// Check if this is `Ctrl` + the given character
    pub fn is_ctrl(&self, c: char) -> bool {
        matches!(
            self.as_key_press(),
            Some(KeyEvent { code: KeyCode::Char(k), modifiers, .. })
                if k.eq_ignore_ascii_case(&c) && modifiers.contains(KeyModifiers::CONTROL)
        )
    }

    /// Check if this is a resize event
    pub fn is_resize(&self) -> bool {
        matches!(self, Event::Resize { .. })
    }
}

impl From<crossterm::event::Event> for Event {
    fn from(event: crossterm::event::Event) -> Self {
        use crossterm::event::Event as CEvent;
        match event {
            CEvent::Key(key) => Event::Key(key),
            CEvent::Mouse(mouse) => Event::Mouse(mouse),
            CEvent::Resize(w, h) => Event::Resize { width: w, height: h },
            CEvent::FocusGained => Event::FocusGained,
            CEvent::FocusLost => Event::FocusLost,
            CEvent::Paste(s) => Event::Paste(s),
        }
    }
}
