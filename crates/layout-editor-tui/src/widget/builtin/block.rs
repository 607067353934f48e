//! Block widget: a bordered box with an optional title

use crate::buffer::{addressable, Buffer, Surface};
use crate::geometry::Rect;
use crate::style::Style;
use crate::widget::Widget;

/// Border type for blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    /// Single line border (─ │ ┌ ┐ └ ┘)
    #[default]
    Single,
    /// Rounded corners (─ │ ╭ ╮ ╰ ╯)
    Rounded,
}

struct BorderChars {
    horizontal: char,
    vertical: char,
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
}

impl BorderType {
    fn chars(&self) -> BorderChars {
        let (top_left, top_right, bottom_left, bottom_right) = match self {
            BorderType::Single => ('┌', '┐', '└', '┘'),
            BorderType::Rounded => ('╭', '╮', '╰', '╯'),
        };
        BorderChars {
            horizontal: '─',
            vertical: '│',
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }
}

/// Bordered box with an optional title
#[derive(Debug, Clone, Default)]
pub struct Block {
    title: Option<String>,
    border_type: BorderType,
    border_style: Style,
    title_style: Style,
}

impl Block {
    /// Create a block with a single line border
    pub fn bordered() -> Self {
        Self::default()
    }

    /// Set the title
    pub fn title<S: Into<String>>(mut self, title: S) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the border type
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Set the border style
    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    /// Set the title style
    pub fn title_style(mut self, style: Style) -> Self {
        self.title_style = style;
        self
    }

    /// Area inside the border
    pub fn inner(&self, area: Rect) -> Rect {
        area.inner(1)
    }

    /// Draw the border at signed coordinates
    ///
    /// `width` and `height` are the outer dimensions including the border.
    /// Every corner and rule segment is its own primitive: a segment that
    /// falls outside the surface is dropped and the rest is still drawn.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, x: i32, y: i32, width: i32, height: i32) {
        if width < 2 || height < 2 {
            return;
        }
        let chars = self.border_type.chars();
        let style = self.border_style;
        let (right, bottom) = (x.saturating_add(width - 1), y.saturating_add(height - 1));
        let columns = addressable(x.saturating_add(1), right);
        let rows = addressable(y.saturating_add(1), bottom);

        let _ = surface.put_char(x, y, chars.top_left, style);
        for cx in columns.clone() {
            let _ = surface.put_char(cx, y, chars.horizontal, style);
        }
        let _ = surface.put_char(right, y, chars.top_right, style);

        for cy in rows {
            let _ = surface.put_char(x, cy, chars.vertical, style);
            let _ = surface.put_char(right, cy, chars.vertical, style);
        }

        let _ = surface.put_char(x, bottom, chars.bottom_left, style);
        for cx in columns {
            let _ = surface.put_char(cx, bottom, chars.horizontal, style);
        }
        let _ = surface.put_char(right, bottom, chars.bottom_right, style);

        if let Some(ref title) = self.title {
            let label = format!(" {} ", title);
            let title_x = x.saturating_add(width.saturating_sub(label.chars().count() as i32).max(0) / 2);
            let _ = surface.put_str(title_x, y, &label, self.title_style);
        }
    }
}

impl Widget for Block {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        self.draw(
            buf,
            i32::from(area.x),
            i32::from(area.y),
            i32::from(area.width),
            i32::from(area.height),
        );
    }
}
