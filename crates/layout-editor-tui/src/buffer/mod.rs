//! Buffer system for terminal rendering

mod buffer;
mod cell;
mod surface;

pub use buffer::Buffer;
pub use cell::Cell;
pub use surface::{addressable, DrawError, Surface};
