//! Tracing setup
//!
//! The terminal is in raw mode while the editor runs, so log lines go to a
//! file or nowhere.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

/// Build the filter directive: `layout_editor=<level>` merged with `RUST_LOG`
pub fn filter_directive(level: &str, env_override: &str) -> String {
    let default_directive = format!("layout_editor={}", level.to_lowercase());
    if env_override.trim().is_empty() {
        default_directive
    } else if env_override.contains("layout_editor") {
        env_override.to_string()
    } else {
        format!("{},{}", env_override, default_directive)
    }
}

/// Install the global subscriber
pub fn init(level: &str, file: Option<&Path>) -> Result<()> {
    let env_override = std::env::var("RUST_LOG").unwrap_or_default();
    let filter = filter_directive(level, &env_override);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_ansi(false);

    match file {
        Some(path) => {
            let log_file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            builder.with_writer(Mutex::new(log_file)).init();
        }
        None => builder.with_writer(std::io::sink).init(),
    }
    Ok(())
}
