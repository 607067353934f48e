pub mod app_config;

// Re-export common types for convenience
pub use app_config::{
    AppConfig, LayoutConfig, LoggingConfig, UiConfig, CONFIG_ENV_VAR, CONFIG_FILE_NAME,
};
