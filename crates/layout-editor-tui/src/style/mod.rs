//! Styling system for terminal text

mod color;
mod modifier;
mod style;
mod text_utils;

pub use color::Color;
pub use modifier::Modifier;
pub use style::Style;
pub use text_utils::clip;
