//! A single terminal cell with content and style

use crate::style::{Color, Modifier, Style};

/// A single terminal cell with content and style
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The character(s) displayed
    pub symbol: String,
    pub fg: Color,
    pub bg: Color,
    pub modifier: Modifier,
}

impl Cell {
    /// Create a new empty cell (space character, default style)
    pub fn empty() -> Self {
        Self::new(" ")
    }

    /// Create a cell with the given symbol and default style
    pub fn new<S: Into<String>>(symbol: S) -> Self {
        Self {
            symbol: symbol.into(),
            fg: Color::Reset,
            bg: Color::Reset,
            modifier: Modifier::empty(),
        }
    }

    /// Apply a style to this cell
    pub fn style(mut self, style: Style) -> Self {
        self.set_style(style);
        self
    }

    /// Set the style from a Style struct
    pub fn set_style(&mut self, style: Style) {
        self.fg = style.fg;
        self.bg = style.bg;
        self.modifier = style.modifier;
    }

    /// Get the style as a Style struct
    pub fn get_style(&self) -> Style {
        Style {
            fg: self.fg,
            bg: self.bg,
            modifier: self.modifier,
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_empty() {
        let cell = Cell::empty();
        assert_eq!(cell.symbol, " ");
        assert_eq!(cell.get_style(), Style::default());
    }

    #[test]
    fn test_cell_style() {
        let style = Style::new().fg(Color::White).bg(Color::Blue).bold();
        let cell = Cell::new("F").style(style);
        assert_eq!(cell.get_style(), style);
        assert!(cell.modifier.contains(Modifier::BOLD));
    }
}
