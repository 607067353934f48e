use anyhow::{Context, Result};
use clap::Parser;
use layout_editor::cli::Cli;
use layout_editor::{
    logging, AppConfig, EditorApp, InteractionEngine, JsonFileStore, LayoutStore, SessionState,
    TerminalPrompt,
};
use layout_editor_tui::AppRunner;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load()?,
    };
    config.apply_env_overrides();
    if let Some(layout) = cli.layout {
        config.layout.file = layout;
    }
    if let Some(log_file) = cli.log_file {
        config.logging.file = Some(log_file);
    }
    config.validate().context("Invalid configuration")?;

    logging::init(&config.logging.level, config.logging.file.as_deref())?;
    tracing::debug!("{}", config.summary());

    let store = JsonFileStore::new(&config.layout.file);
    let widgets = store
        .load()
        .with_context(|| format!("Failed to load layout {}", config.layout.file.display()))?;
    let session = SessionState::new(widgets);

    let theme = config.theme();
    let prompt = TerminalPrompt::new(theme.clone()).context("Failed to open terminal")?;
    let app = EditorApp::new(InteractionEngine::new(store, prompt), theme);

    let mut runner = AppRunner::new(app).context("Failed to open terminal")?;
    let session = runner.run(session).context("Terminal session failed")?;
    tracing::info!(widgets = session.canvas.len(), "Session ended");
    Ok(())
}
