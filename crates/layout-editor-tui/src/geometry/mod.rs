//! Geometry primitives for terminal positioning and sizing

mod rect;
mod size;

pub use rect::Rect;
pub use size::Size;
