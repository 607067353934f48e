//! Application framework

mod framework;

pub use framework::{App, AppRunner};
