//! Command-line arguments

use clap::Parser;
use std::path::PathBuf;

/// Interactive terminal layout editor
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "layout-editor", version, about)]
pub struct Cli {
    /// Layout file to open and save (default: layout.json)
    #[arg(long, value_name = "PATH")]
    pub layout: Option<PathBuf>,

    /// Configuration file to use instead of the usual lookup
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["layout-editor"]).unwrap();
        assert!(cli.layout.is_none());
        assert!(cli.config.is_none());
        assert!(cli.log_file.is_none());
    }

    #[test]
    fn test_all_flags() {
        let cli = Cli::try_parse_from([
            "layout-editor",
            "--layout",
            "ui.json",
            "--config",
            "cfg.toml",
            "--log-file",
            "editor.log",
        ])
        .unwrap();
        assert_eq!(cli.layout, Some(PathBuf::from("ui.json")));
        assert_eq!(cli.config, Some(PathBuf::from("cfg.toml")));
        assert_eq!(cli.log_file, Some(PathBuf::from("editor.log")));
    }

    #[test]
    fn test_positional_rejected() {
        assert!(Cli::try_parse_from(["layout-editor", "extra"]).is_err());
    }
}
