//! Terminal abstraction over crossterm

mod backend;
mod raw_mode;

pub use backend::Terminal;
pub use raw_mode::RawModeGuard;
