//! Modal prompts and message boxes
//!
//! The engine talks to a [`Prompt`] while handling an event and blocks until
//! it returns. [`TerminalPrompt`] draws dialogs over the current frame;
//! [`ScriptedPrompt`] answers from a queue for headless runs.

mod scripted;
mod terminal;

pub use scripted::ScriptedPrompt;
pub use terminal::TerminalPrompt;

use std::io;

/// Hotkey reference shown by the help dialog
pub const HELP_LINES: [&str; 12] = [
    "Hotkeys:",
    "Ctrl-Q: Quit",
    "Ctrl-S: Save",
    "Ctrl-H / F1: Show Help",
    "e: Edit Properties (of selected control)",
    "Mouse Left-Click: Select/Drag/Resize",
    "Mouse Right-Click: Select for Properties",
    "File Menu: Click 'File' then 'Save'",
    "Delete Control: Click to delete selected control",
    "Elements Menu: Lists current elements",
    "",
    "Click or press any key to close...",
];

/// Body of the dialog a popup button opens
pub const POPUP_MESSAGE: &str = "This is a popup!";

/// One labelled entry in an edit dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    /// Value shown in brackets and returned when the entry is left blank
    pub current: String,
}

impl Field {
    pub fn new(label: impl Into<String>, current: impl ToString) -> Self {
        Self {
            label: label.into(),
            current: current.to_string(),
        }
    }

    /// The entry the user typed, or the current value if it was blank
    pub fn resolve(&self, entry: &str) -> String {
        if entry.trim().is_empty() {
            self.current.clone()
        } else {
            entry.to_string()
        }
    }
}

/// Blocking user dialogs
pub trait Prompt {
    /// Ask for every field in turn; returns one string per field
    fn edit_fields(&mut self, title: &str, fields: &[Field]) -> io::Result<Vec<String>>;

    /// Show lines of text until the user presses a key
    fn show_message(&mut self, title: &str, lines: &[&str]) -> io::Result<()>;
}

impl<P: Prompt + ?Sized> Prompt for &mut P {
    fn edit_fields(&mut self, title: &str, fields: &[Field]) -> io::Result<Vec<String>> {
        (**self).edit_fields(title, fields)
    }

    fn show_message(&mut self, title: &str, lines: &[&str]) -> io::Result<()> {
        (**self).show_message(title, lines)
    }
}
