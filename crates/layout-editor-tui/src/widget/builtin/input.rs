//! Single-line text input

use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::{Color, Style};
use crate::widget::StatefulWidget;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// State for input widget
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Current input text
    pub value: String,
    /// Cursor position (byte index)
    pub cursor: usize,
    /// Scroll offset (cells) for long text
    pub scroll: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Insert a character at the cursor position
    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Insert a string at the cursor position (pastes)
    pub fn insert_str(&mut self, s: &str) {
        let s: String = s.chars().filter(|c| !c.is_control()).collect();
        self.value.insert_str(self.cursor, &s);
        self.cursor += s.len();
    }

    /// Delete character before cursor (backspace)
    pub fn backspace(&mut self) {
        if let Some((prev, _)) = self.value[..self.cursor].char_indices().last() {
            self.value.remove(prev);
            self.cursor = prev;
        }
    }

    /// Delete character at cursor (delete)
    pub fn delete(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    /// Move cursor left by one character
    pub fn move_left(&mut self) {
        if let Some((prev, _)) = self.value[..self.cursor].char_indices().last() {
            self.cursor = prev;
        }
    }

    /// Move cursor right by one character
    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Take the value and clear the state
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        self.scroll = 0;
        std::mem::take(&mut self.value)
    }
}

/// Single-line text input with a block cursor
#[derive(Debug, Clone)]
pub struct Input {
    style: Style,
    cursor_style: Style,
}

impl Default for Input {
    fn default() -> Self {
        Self {
            style: Style::default(),
            cursor_style: Style::new().bg(Color::White).fg(Color::Black),
        }
    }
}

impl Input {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn cursor_style(mut self, style: Style) -> Self {
        self.cursor_style = style;
        self
    }
}

impl StatefulWidget for Input {
    type State = InputState;

    fn render(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.is_empty() {
            return;
        }
        let width = area.width as usize;
        let cursor_col = UnicodeWidthStr::width(&state.value[..state.cursor]);

        // Keep the cursor cell visible
        if cursor_col < state.scroll {
            state.scroll = cursor_col;
        } else if cursor_col >= state.scroll + width {
            state.scroll = cursor_col + 1 - width;
        }

        let mut col = 0usize;
        for c in state.value.chars() {
            let char_width = UnicodeWidthChar::width(c).unwrap_or(1);
            if col >= state.scroll && col + char_width <= state.scroll + width {
                let x = area.x + (col - state.scroll) as u16;
                let style = if col == cursor_col { self.cursor_style } else { self.style };
                buf.set_string(x, area.y, &c.to_string(), style);
            }
            col += char_width;
        }

        if cursor_col >= UnicodeWidthStr::width(state.value.as_str()) {
            let x = area.x + (cursor_col - state.scroll) as u16;
            buf.set_string(x, area.y, " ", self.cursor_style);
        }
    }
}
