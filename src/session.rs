//! Per-session editor state

use crate::canvas::CanvasState;
use crate::menu::MenuState;
use crate::widget::Widget;

/// Everything one editing session mutates
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub canvas: CanvasState,
    pub menus: MenuState,
    /// Last mouse position seen, drawn as a crosshair
    pub crosshair: Option<(i32, i32)>,
    /// Text after `Log: ` on the bottom row
    pub status: String,
}

impl SessionState {
    pub fn new(widgets: Vec<Widget>) -> Self {
        Self {
            canvas: CanvasState::new(widgets),
            ..Self::default()
        }
    }
}
