//! Single-row status line

use crate::buffer::Buffer;
use crate::geometry::Rect;
use crate::style::{clip, Style};
use crate::widget::Widget;

/// One-row status line: a fixed label followed by a message, clipped to the row
#[derive(Debug, Clone, Default)]
pub struct StatusLine {
    label: String,
    message: String,
    style: Style,
}

impl StatusLine {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    /// Text shown before the message
    pub fn label<S: Into<String>>(mut self, label: S) -> Self {
        self.label = label.into();
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for StatusLine {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let line = clip(&format!("{}{}", self.label, self.message), area.width as usize);
        buf.set_string(area.x, area.y, &line, self.style);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_clipped() {
        let area = Rect::sized(10, 1);
        let mut buf = Buffer::new(area);
        StatusLine::new("Mouse at (3,4)").label("Log: ").render(area, &mut buf);
        assert_eq!(buf.row_text(0), "Log: Mouse");
    }
}
