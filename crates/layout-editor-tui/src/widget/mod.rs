//! Widget system for building UI components

pub mod builtin;
mod traits;

pub use traits::{StatefulWidget, Widget};
