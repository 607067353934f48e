//! Built-in widgets

mod block;
mod input;
mod overlay;
mod status;

pub use block::{Block, BorderType};
pub use input::{Input, InputState};
pub use overlay::Overlay;
pub use status::StatusLine;
