//! Terminal colors

use crossterm::style::Color as CrosstermColor;

/// Terminal color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Color {
    /// Reset to terminal default
    #[default]
    Reset,
    Black,
    White,
    Grey,
    DarkGrey,
    Blue,
    DarkBlue,
    Cyan,
    DarkCyan,
    Yellow,
    /// RGB color
    Rgb(u8, u8, u8),
}

impl From<Color> for CrosstermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => CrosstermColor::Reset,
            Color::Black => CrosstermColor::Black,
            Color::White => CrosstermColor::White,
            Color::Grey => CrosstermColor::Grey,
            Color::DarkGrey => CrosstermColor::DarkGrey,
            Color::Blue => CrosstermColor::Blue,
            Color::DarkBlue => CrosstermColor::DarkBlue,
            Color::Cyan => CrosstermColor::Cyan,
            Color::DarkCyan => CrosstermColor::DarkCyan,
            Color::Yellow => CrosstermColor::Yellow,
            Color::Rgb(r, g, b) => CrosstermColor::Rgb { r, g, b },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_to_crossterm() {
        let c: CrosstermColor = Color::Cyan.into();
        assert_eq!(c, CrosstermColor::Cyan);
    }
}
