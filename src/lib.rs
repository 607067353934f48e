//! layout-editor: arrange, drag, resize and edit widgets on a text-grid canvas
//!
//! The interesting part is [`engine::InteractionEngine`], the state machine
//! that turns key and mouse events into changes to a [`SessionState`].
//! Persistence and dialogs sit behind the [`persistence::LayoutStore`] and
//! [`prompt::Prompt`] traits so the engine runs without a terminal.

pub mod app;
pub mod canvas;
pub mod cli;
pub mod config;
pub mod engine;
pub mod logging;
pub mod menu;
pub mod palette;
pub mod persistence;
pub mod prompt;
pub mod session;
pub mod ui;
pub mod widget;

pub use app::EditorApp;
pub use canvas::CanvasState;
pub use config::AppConfig;
pub use engine::InteractionEngine;
pub use menu::{Menu, MenuState};
pub use persistence::{JsonFileStore, LayoutError, LayoutStore, MemoryStore};
pub use prompt::{Prompt, ScriptedPrompt, TerminalPrompt};
pub use session::SessionState;
pub use widget::{Widget, WidgetKind, WidgetRecord};
