//! layout-editor-tui: the terminal toolkit behind the layout editor
//!
//! This crate provides:
//! - Geometry primitives (`Rect`, `Size`)
//! - Cell-based buffer with diff rendering and a bounds-checked `Surface`
//! - Terminal abstraction over crossterm with mouse capture
//! - Blocking event loop and a synchronous application runner
//! - Themes and a handful of chrome widgets (block, overlay, status bar, input)

pub mod app;
pub mod buffer;
pub mod event;
pub mod geometry;
pub mod style;
pub mod terminal;
pub mod theme;
pub mod widget;

// Re-export commonly used types
pub use app::{App, AppRunner};
pub use buffer::{addressable, Buffer, Cell, DrawError, Surface};
pub use event::{Event, EventResult};
pub use geometry::{Rect, Size};
pub use style::{clip, Color, Modifier, Style};
pub use terminal::Terminal;
pub use theme::Theme;
pub use widget::Widget;
