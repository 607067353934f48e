//! Hotkeys

use layout_editor_tui::event::{KeyCode, KeyEvent, KeyModifiers};

/// Editor commands bound to keys
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Save,
    Help,
    EditProperties,
    /// Ctrl+C: acknowledged, nothing happens
    Interrupt,
    /// Any other key
    Unbound,
}

/// Map a key press to its command
pub fn command_for(key: &KeyEvent) -> Command {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char(c) if ctrl => match c.to_ascii_lowercase() {
            'q' => Command::Quit,
            's' => Command::Save,
            'h' => Command::Help,
            'c' => Command::Interrupt,
            _ => Command::Unbound,
        },
        // Some terminals deliver Ctrl+H as a control-modified backspace
        KeyCode::Backspace if ctrl => Command::Help,
        KeyCode::F(1) => Command::Help,
        KeyCode::Char('e') if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
            Command::EditProperties
        }
        _ => Command::Unbound,
    }
}

/// Human-readable key name for the status line
pub fn describe_key(key: &KeyEvent) -> String {
    let code = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{}", n),
        other => format!("{:?}", other),
    };
    let mut name = String::new();
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        name.push_str("Ctrl+");
    }
    if key.modifiers.contains(KeyModifiers::ALT) {
        name.push_str("Alt+");
    }
    name.push_str(&code);
    name
}
