//! Mouse input as the engine sees it

use layout_editor_tui::event::{MouseButton, MouseEvent, MouseEventKind};

/// Buttons the editor reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Primary button: menus, palette, drag and resize
    Button1,
    /// Secondary button: select, start resize, move, open popups
    Button3,
}

/// What happened to the mouse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseAction {
    Press(Button),
    Release(Button),
    /// Motion with the button down
    Held(Button),
    /// Motion with no button down
    Moved,
    /// Scroll wheel or an unmapped button
    Other,
}

impl MouseAction {
    /// Whether a button was involved
    pub fn is_button(&self) -> bool {
        matches!(
            self,
            MouseAction::Press(_) | MouseAction::Release(_) | MouseAction::Held(_)
        )
    }
}

/// A mouse event at a canvas cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseInput {
    pub x: i32,
    pub y: i32,
    pub action: MouseAction,
}

impl MouseInput {
    pub fn new(x: i32, y: i32, action: MouseAction) -> Self {
        Self { x, y, action }
    }

    pub fn press(x: i32, y: i32, button: Button) -> Self {
        Self::new(x, y, MouseAction::Press(button))
    }

    pub fn release(x: i32, y: i32, button: Button) -> Self {
        Self::new(x, y, MouseAction::Release(button))
    }

    pub fn held(x: i32, y: i32, button: Button) -> Self {
        Self::new(x, y, MouseAction::Held(button))
    }
}

impl From<MouseEvent> for MouseInput {
    fn from(event: MouseEvent) -> Self {
        let button = |b: MouseButton| match b {
            MouseButton::Left => Some(Button::Button1),
            MouseButton::Right => Some(Button::Button3),
            MouseButton::Middle => None,
        };
        let action = match event.kind {
            MouseEventKind::Down(b) => button(b).map_or(MouseAction::Other, MouseAction::Press),
            MouseEventKind::Up(b) => button(b).map_or(MouseAction::Other, MouseAction::Release),
            MouseEventKind::Drag(b) => button(b).map_or(MouseAction::Other, MouseAction::Held),
            MouseEventKind::Moved => MouseAction::Moved,
            _ => MouseAction::Other,
        };
        Self::new(i32::from(event.column), i32::from(event.row), action)
    }
}
