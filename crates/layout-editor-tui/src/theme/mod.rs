//! Color palettes and themes

mod palette;

pub use palette::{Palette, Theme};
