//! Application-level configuration
//!
//! Defines the top-level configuration: which layout file to edit, logging,
//! and UI preferences.

use anyhow::{Context, Result};
use directories::BaseDirs;
use layout_editor_tui::Theme;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::persistence::DEFAULT_LAYOUT_FILE;

/// Embedded default configuration file
const DEFAULT_CONFIG: &str = include_str!("../../layout-editor.config.toml");

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "layout-editor.config.toml";

/// Environment variable naming a configuration file
pub const CONFIG_ENV_VAR: &str = "LAYOUT_EDITOR_CONFIG";

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    /// Layout file configuration
    #[serde(default)]
    pub layout: LayoutConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,
}

impl AppConfig {
    /// Load configuration from the first place that has one
    ///
    /// Looks in the current directory, then `~/.layout-editor/`, then the
    /// file named by `LAYOUT_EDITOR_CONFIG`, and falls back to the embedded
    /// default. Nothing is written to disk.
    pub fn load() -> Result<Self> {
        // Try to load from layout-editor.config.toml in current directory
        if let Ok(content) = std::fs::read_to_string(CONFIG_FILE_NAME) {
            return toml::from_str(&content)
                .with_context(|| format!("Failed to parse {}", CONFIG_FILE_NAME));
        }

        // Try to load from ~/.layout-editor/layout-editor.config.toml
        if let Some(home_config) = Self::home_config_path() {
            if let Ok(content) = std::fs::read_to_string(&home_config) {
                return toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", home_config.display()));
            }
        }

        // Try to load from environment variable LAYOUT_EDITOR_CONFIG
        if let Ok(config_path) = std::env::var(CONFIG_ENV_VAR) {
            if let Ok(content) = std::fs::read_to_string(&config_path) {
                return toml::from_str(&content)
                    .with_context(|| format!("Failed to parse {}", config_path));
            }
        }

        Self::embedded_default()
    }

    /// Load configuration from a specific file path, which must exist
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// The configuration built into the binary
    pub fn embedded_default() -> Result<Self> {
        toml::from_str(DEFAULT_CONFIG).context("Failed to parse embedded default config")
    }

    fn home_config_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.home_dir().join(".layout-editor").join(CONFIG_FILE_NAME))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.layout.file.as_os_str().is_empty() {
            return Err(anyhow::anyhow!("Layout file path cannot be empty"));
        }

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => return Err(anyhow::anyhow!("Invalid log level: {}", self.logging.level)),
        }

        if Theme::by_name(&self.ui.theme).is_none() {
            return Err(anyhow::anyhow!(
                "Unknown theme '{}' (expected one of: {})",
                self.ui.theme,
                Theme::NAMES.join(", ")
            ));
        }

        Ok(())
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(file) = std::env::var("LAYOUT_EDITOR_LAYOUT_FILE") {
            self.layout.file = PathBuf::from(file);
        }
        if let Ok(level) = std::env::var("LAYOUT_EDITOR_LOG_LEVEL") {
            self.logging.level = level.to_lowercase();
        }
        if let Ok(theme) = std::env::var("LAYOUT_EDITOR_THEME") {
            self.ui.theme = theme;
        }
    }

    /// Theme selected by `ui.theme`, classic if the name is unknown
    pub fn theme(&self) -> Theme {
        Theme::by_name(&self.ui.theme).unwrap_or_default()
    }

    /// Get a summary of the configuration
    pub fn summary(&self) -> String {
        let mut summary = String::new();
        summary.push_str("Configuration loaded:\n");
        summary.push_str(&format!("Layout File: {}\n", self.layout.file.display()));
        summary.push_str(&format!("Logging Level: {}\n", self.logging.level));
        match &self.logging.file {
            Some(file) => summary.push_str(&format!("Log File: {}\n", file.display())),
            None => summary.push_str("Log File: (disabled)\n"),
        }
        summary.push_str(&format!("UI Theme: {}\n", self.ui.theme));
        summary
    }
}

/// Layout file configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Path of the layout file, relative to the working directory
    #[serde(default = "default_layout_file")]
    pub file: PathBuf,
}

fn default_layout_file() -> PathBuf {
    PathBuf::from(DEFAULT_LAYOUT_FILE)
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            file: default_layout_file(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// File receiving log output; logs are discarded when unset
    #[serde(default)]
    pub file: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UiConfig {
    /// UI theme name
    #[serde(default = "default_theme")]
    pub theme: String,
}

fn default_theme() -> String {
    "classic".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_default_matches_default() {
        let config = AppConfig::embedded_default().unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: AppConfig = toml::from_str("[ui]\ntheme = \"dark\"\n").unwrap();
        assert_eq!(config.ui.theme, "dark");
        assert_eq!(config.layout.file, PathBuf::from("layout.json"));
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.theme(), Theme::dark());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.ui.theme = "neon".to_string();
        assert!(config.validate().is_err());

        let mut config = AppConfig::default();
        config.layout.file = PathBuf::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_summary() {
        let summary = AppConfig::default().summary();
        assert!(summary.contains("Layout File: layout.json"));
        assert!(summary.contains("Log File: (disabled)"));
        assert!(summary.contains("UI Theme: classic"));
    }
}
