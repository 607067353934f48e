//! Color palettes and themes

use crate::style::{Color, Style};

/// A color palette for consistent theming
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Canvas background
    pub background: Color,
    /// Canvas text
    pub text: Color,
    /// Menu bar and dropdown background
    pub chrome: Color,
    /// Menu bar text
    pub chrome_text: Color,
    /// Highlight for the selected widget and the crosshair
    pub accent: Color,
    /// Text drawn on the accent color
    pub accent_text: Color,
    /// Modal dialog background
    pub dialog: Color,
}

impl Palette {
    /// Black on white canvas with a blue menu bar
    pub fn classic() -> Self {
        Self {
            background: Color::White,
            text: Color::Black,
            chrome: Color::Blue,
            chrome_text: Color::White,
            accent: Color::Cyan,
            accent_text: Color::Black,
            dialog: Color::Blue,
        }
    }

    /// Light text on the terminal's own background
    pub fn dark() -> Self {
        Self {
            background: Color::Reset,
            text: Color::Grey,
            chrome: Color::DarkBlue,
            chrome_text: Color::White,
            accent: Color::DarkCyan,
            accent_text: Color::White,
            dialog: Color::Rgb(20, 20, 30),
        }
    }
}

/// A theme combining palette with component styles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// The color palette
    pub palette: Palette,
    /// Canvas cells, widget outlines and text
    pub canvas: Style,
    /// Headings on the canvas ("Elements:", "Properties:")
    pub heading: Style,
    /// Menu bar labels
    pub chrome: Style,
    /// Dropdown entries
    pub menu_item: Style,
    /// Selected widget text
    pub selection: Style,
    /// Mouse crosshair
    pub crosshair: Style,
    /// Modal dialog body
    pub dialog: Style,
    /// Modal dialog border and title
    pub dialog_border: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::classic()
    }
}

impl Theme {
    /// Names accepted by [`Theme::by_name`]
    pub const NAMES: [&'static str; 2] = ["classic", "dark"];

    pub fn classic() -> Self {
        Self::from_palette(Palette::classic())
    }

    pub fn dark() -> Self {
        Self::from_palette(Palette::dark())
    }

    /// Look up a theme by its configuration name
    pub fn by_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "classic" | "default" => Some(Self::classic()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }

    fn from_palette(palette: Palette) -> Self {
        let canvas = Style::new().fg(palette.text).bg(palette.background);
        let chrome = Style::new().fg(palette.chrome_text).bg(palette.chrome);
        let accent = Style::new().fg(palette.accent_text).bg(palette.accent);
        Self {
            canvas,
            heading: canvas.bold(),
            chrome,
            menu_item: chrome.bold(),
            selection: accent,
            crosshair: accent,
            dialog: Style::new().fg(palette.chrome_text).bg(palette.dialog),
            dialog_border: Style::new().fg(palette.chrome_text).bg(palette.dialog).bold(),
            palette,
        }
    }
}
