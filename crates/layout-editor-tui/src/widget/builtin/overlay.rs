//! Overlay widget for modal dialogs

use super::{Block, BorderType};
use crate::buffer::{Buffer, Cell};
use crate::geometry::Rect;
use crate::style::Style;
use crate::widget::Widget;

/// A centered modal dialog with rounded border
#[derive(Debug, Clone)]
pub struct Overlay {
    /// Title displayed centered on top border
    title: String,
    /// Body style (also fills the background)
    style: Style,
    /// Border and title style
    border_style: Style,
    /// Help text displayed on the last inner row
    help_text: Option<String>,
    /// Outer width in cells
    width: u16,
    /// Outer height in cells
    height: u16,
}

impl Default for Overlay {
    fn default() -> Self {
        Self {
            title: String::new(),
            style: Style::default(),
            border_style: Style::default(),
            help_text: None,
            width: 40,
            height: 10,
        }
    }
}

impl Overlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn border_style(mut self, style: Style) -> Self {
        self.border_style = style;
        self
    }

    pub fn help_text(mut self, text: impl Into<String>) -> Self {
        self.help_text = Some(text.into());
        self
    }

    /// Outer size of the dialog; clipped to the parent when drawn
    pub fn dimensions(mut self, width: u16, height: u16) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Calculate the overlay area within parent
    pub fn area(&self, parent: Rect) -> Rect {
        parent.centered(self.width, self.height)
    }

    /// Content area: inside the border with one column of padding
    pub fn inner(&self, overlay_area: Rect) -> Rect {
        let help_lines = if self.help_text.is_some() { 1 } else { 0 };
        let inside = Block::bordered().inner(overlay_area);
        Rect::new(
            inside.x + 1,
            inside.y,
            inside.width.saturating_sub(2),
            inside.height.saturating_sub(help_lines),
        )
    }

    /// Render overlay and return the inner content area
    pub fn render_frame(&self, parent: Rect, buf: &mut Buffer) -> Rect {
        let area = self.area(parent);
        buf.fill(area, Cell::empty().style(self.style));

        let mut block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.border_style)
            .title_style(self.border_style);
        if !self.title.is_empty() {
            block = block.title(self.title.clone());
        }
        block.render(area, buf);

        if let Some(ref help) = self.help_text {
            if area.height >= 3 {
                buf.set_string(area.x + 2, area.bottom() - 2, help, self.style);
            }
        }

        self.inner(area)
    }
}

impl Widget for Overlay {
    fn render(&self, area: Rect, buf: &mut Buffer) {
        self.render_frame(area, buf);
    }
}
