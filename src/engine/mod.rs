//! Interaction state machine
//!
//! Turns key presses and mouse events into changes to a [`SessionState`].
//! Every event rewrites the status line; only the quit key ends the session.

mod input;
mod keymap;

pub use input::{Button, MouseAction, MouseInput};
pub use keymap::{command_for, describe_key, Command};

use crate::menu::{chrome_item_at, ChromeItem, Menu, FILE_SAVE_COLUMNS};
use crate::palette;
use crate::persistence::LayoutStore;
use crate::prompt::{Field, Prompt, HELP_LINES, POPUP_MESSAGE};
use crate::session::SessionState;
use crate::widget::{Widget, WidgetKind};
use layout_editor_tui::event::KeyEvent;
use layout_editor_tui::{Event, EventResult};
use std::fmt::Write;

/// Applies input events to a session, saving through `S` and asking through `P`
pub struct InteractionEngine<S, P> {
    store: S,
    prompt: P,
}

impl<S: LayoutStore, P: Prompt> InteractionEngine<S, P> {
    pub fn new(store: S, prompt: P) -> Self {
        Self { store, prompt }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn prompt_mut(&mut self) -> &mut P {
        &mut self.prompt
    }

    /// Route a terminal event
    ///
    /// Key releases, focus changes and pastes are ignored. Resizes are left to
    /// the runner.
    pub fn handle_event(&mut self, session: &mut SessionState, event: &Event) -> EventResult {
        match event {
            Event::Key(_) => match event.as_key_press() {
                Some(key) => self.handle_key(session, key),
                None => EventResult::Ignored,
            },
            Event::Mouse(mouse) => self.handle_mouse(session, MouseInput::from(*mouse)),
            Event::Resize { .. } => EventResult::Consumed,
            Event::FocusGained | Event::FocusLost | Event::Paste(_) => EventResult::Ignored,
        }
    }

    pub fn handle_key(&mut self, session: &mut SessionState, key: &KeyEvent) -> EventResult {
        session.status = format!("Key pressed: {}", describe_key(key));
        match command_for(key) {
            Command::Quit => {
                session.status.push_str(" - Quit");
                tracing::info!("Quit requested");
                EventResult::Quit
            }
            Command::Save => {
                self.save(session, " - Layout saved");
                EventResult::Consumed
            }
            Command::Help => {
                self.show_help(session, " - Help popup shown")
            }
            Command::EditProperties if session.canvas.selected().is_some() => {
                self.edit_properties(session)
            }
            Command::Interrupt => {
                session.status.push_str(" - No action performed");
                EventResult::Consumed
            }
            Command::EditProperties | Command::Unbound => EventResult::Consumed,
        }
    }

    pub fn handle_mouse(&mut self, session: &mut SessionState, input: MouseInput) -> EventResult {
        let MouseInput { x: mx, y: my, action } = input;
        session.crosshair = Some((mx, my));
        session.status = format!("Mouse at ({},{})", mx, my);

        if my == 0 && action == MouseAction::Press(Button::Button1) {
            if let Some(item) = chrome_item_at(mx) {
                return self.click_chrome(session, item);
            }
        }

        if session.menus.is_open(Menu::File)
            && my == 1
            && FILE_SAVE_COLUMNS.contains(&mx)
            && action == MouseAction::Press(Button::Button1)
        {
            self.save(session, " - Saved via File menu");
            session.menus.close();
            return EventResult::Consumed;
        }

        // Pure motion is reported while any-motion capture is on; only button
        // reports pick from an open dropdown
        if my >= 1 && action.is_button() {
            if let Some(menu) = session.menus.open_menu() {
                if pick_from_dropdown(session, menu, (my - 1) as usize) {
                    return EventResult::Consumed;
                }
            }
        }

        if action == MouseAction::Press(Button::Button1) {
            if let Some(kind) = palette::template_at(mx, my) {
                add_from_palette(session, kind);
                return EventResult::Consumed;
            }
        }

        match action {
            MouseAction::Press(Button::Button1) | MouseAction::Held(Button::Button1) => {
                if let Some(widget) = session.canvas.selected_mut() {
                    if widget.dragging {
                        widget.x = mx;
                        widget.y = my;
                        let _ = write!(session.status, " - Dragging to ({},{})", mx, my);
                    } else if widget.resizing {
                        widget.set_width(mx.saturating_sub(widget.x).saturating_sub(1));
                        let _ = write!(session.status, " - Resizing to width {}", widget.width());
                    }
                }
                EventResult::Consumed
            }
            MouseAction::Release(Button::Button1) => {
                if let Some(widget) = session.canvas.selected_mut() {
                    widget.dragging = false;
                    widget.resizing = false;
                    session.status.push_str(" - Dragging or resizing completed");
                }
                EventResult::Consumed
            }
            MouseAction::Press(Button::Button3) => {
                select_at(session, mx, my);
                EventResult::Consumed
            }
            MouseAction::Release(Button::Button3) => self.release_button3(session, mx, my),
            MouseAction::Held(Button::Button3) | MouseAction::Moved | MouseAction::Other => {
                EventResult::Consumed
            }
        }
    }

    /// Persist the canvas; failures are reported on the status line
    pub fn save(&mut self, session: &mut SessionState, done: &str) {
        match self.store.save(session.canvas.widgets()) {
            Ok(()) => session.status.push_str(done),
            Err(e) => {
                tracing::error!(error = %e, "Failed to save layout");
                let _ = write!(session.status, " - Save failed: {}", e);
            }
        }
    }

    fn click_chrome(&mut self, session: &mut SessionState, item: ChromeItem) -> EventResult {
        match item {
            ChromeItem::Menu(menu) => {
                session.menus.toggle(menu);
                let _ = write!(session.status, " - Toggled {} menu", menu);
                EventResult::Consumed
            }
            ChromeItem::DeleteControl => {
                if let Some(removed) = session.canvas.remove_selected() {
                    tracing::info!(kind = %removed.kind(), text = removed.text(), "Deleted widget");
                    session.status.push_str(" - Deleted selected control");
                }
                EventResult::Consumed
            }
            ChromeItem::Help => self.show_help(session, " - Help popup shown"),
        }
    }

    fn show_help(&mut self, session: &mut SessionState, done: &str) -> EventResult {
        self.show_message(session, "Help", &HELP_LINES, done)
    }

    fn show_message(
        &mut self,
        session: &mut SessionState,
        title: &str,
        lines: &[&str],
        done: &str,
    ) -> EventResult {
        match self.prompt.show_message(title, lines) {
            Ok(()) => session.status.push_str(done),
            Err(e) => {
                tracing::error!(error = %e, title, "Failed to show dialog");
                let _ = write!(session.status, " - Dialog failed: {}", e);
            }
        }
        EventResult::Repaint
    }

    fn edit_properties(&mut self, session: &mut SessionState) -> EventResult {
        let Some(widget) = session.canvas.selected() else {
            return EventResult::Consumed;
        };
        let fields = [
            Field::new("Text", widget.text()),
            Field::new("Width", widget.width()),
            Field::new("X", widget.x),
            Field::new("Y", widget.y),
        ];
        match self.prompt.edit_fields("Edit Properties", &fields) {
            Ok(answers) => {
                if let Some(widget) = session.canvas.selected_mut() {
                    apply_properties(widget, &answers);
                }
                session.status.push_str(" - Edit properties");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to edit properties");
                let _ = write!(session.status, " - Edit failed: {}", e);
            }
        }
        EventResult::Repaint
    }

    fn release_button3(&mut self, session: &mut SessionState, mx: i32, my: i32) -> EventResult {
        let Some(widget) = session.canvas.selected_mut() else {
            return EventResult::Consumed;
        };
        if widget.resizing {
            widget.resizing = false;
            session.status.push_str(" - Resizing completed");
            EventResult::Consumed
        } else if widget.kind() == WidgetKind::PopupButton {
            self.show_message(session, "Popup", &[POPUP_MESSAGE], " - Popup displayed")
        } else {
            widget.x = mx;
            widget.y = my;
            let _ = write!(session.status, " - Moved to ({},{})", mx, my);
            EventResult::Consumed
        }
    }
}

/// Act on row `index` of the open dropdown; false when the row is empty
fn pick_from_dropdown(session: &mut SessionState, menu: Menu, index: usize) -> bool {
    match menu {
        Menu::Elements => {
            if !session.canvas.select(index) {
                return false;
            }
            tracing::debug!(index, "Selected widget from Elements menu");
            let _ = write!(session.status, " - Selected element {} from Elements menu", index);
        }
        Menu::Macros | Menu::Edit => {
            let Some(option) = menu.options().get(index) else {
                return false;
            };
            let _ = write!(session.status, " - Selected '{}' from {} menu", option, menu);
        }
        Menu::File => return false,
    }
    session.menus.close();
    true
}

fn add_from_palette(session: &mut SessionState, kind: WidgetKind) {
    let mut widget = palette::instantiate(kind);
    widget.dragging = true;
    let index = session.canvas.push(widget);
    session.canvas.select(index);
    tracing::debug!(%kind, index, "Added widget from palette");
    session.status.push_str(" - Dragging new element from toolbar with left-click");
}

/// Button3 press: every widget is checked in order and the last match wins
///
/// A hit selects the widget. Otherwise a resize handle selects it and flags
/// it as resizing. Flags on widgets selected earlier in the pass are kept.
fn select_at(session: &mut SessionState, mx: i32, my: i32) {
    for index in 0..session.canvas.len() {
        let Some(widget) = session.canvas.get(index) else {
            continue;
        };
        if widget.hit_test(mx, my) {
            session.canvas.select(index);
            session.status.push_str(" - Element selected via right-click");
        } else if widget.on_resize_handle(mx, my) {
            session.canvas.select(index);
            if let Some(widget) = session.canvas.get_mut(index) {
                widget.resizing = true;
            }
            session.status.push_str(" - Resizing initiated via right-click");
        }
    }
}

/// Apply edit dialog answers in field order: text, width, x, y
///
/// Numbers that fail to parse leave the old value in place.
fn apply_properties(widget: &mut Widget, answers: &[String]) {
    if let Some(text) = answers.first() {
        if !text.trim().is_empty() && text != widget.text() {
            widget.set_text(text.as_str());
        }
    }
    if let Some(width) = answers.get(1).and_then(|s| s.trim().parse().ok()) {
        widget.set_width(width);
    }
    if let Some(x) = answers.get(2).and_then(|s| s.trim().parse().ok()) {
        widget.x = x;
    }
    if let Some(y) = answers.get(3).and_then(|s| s.trim().parse().ok()) {
        widget.y = y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::prompt::ScriptedPrompt;
    use layout_editor_tui::event::{KeyCode, KeyModifiers};

    type Engine = InteractionEngine<MemoryStore, ScriptedPrompt>;

    fn engine() -> Engine {
        InteractionEngine::new(MemoryStore::new(), ScriptedPrompt::new())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_quit_does_not_save() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::label(0, 5, 10, "a")]);
        assert!(engine.handle_key(&mut session, &ctrl('q')).is_quit());
        assert_eq!(engine.store().save_count(), 0);
    }

    #[test]
    fn test_save_key() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::label(0, 5, 10, "a")]);
        engine.handle_key(&mut session, &ctrl('s'));
        assert_eq!(engine.store().save_count(), 1);
        assert!(session.status.ends_with("Layout saved"));
    }

    #[test]
    fn test_help_key_shows_hotkeys() {
        let mut engine = engine();
        let mut session = SessionState::default();
        let result = engine.handle_key(&mut session, &ctrl('h'));
        assert_eq!(result, EventResult::Repaint);
        let (title, lines) = &engine.prompt().messages()[0];
        assert_eq!(title, "Help");
        assert_eq!(lines[0], "Hotkeys:");
    }

    #[test]
    fn test_edit_key_without_selection_only_sets_status() {
        let mut engine = engine();
        let mut session = SessionState::default();
        let key = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(engine.handle_key(&mut session, &key), EventResult::Consumed);
        assert!(engine.prompt().edits().is_empty());
        assert_eq!(session.status, "Key pressed: e");
    }

    #[test]
    fn test_interrupt_is_a_no_op() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::label(0, 5, 10, "a")]);
        let result = engine.handle_key(&mut session, &ctrl('c'));
        assert_eq!(result, EventResult::Consumed);
        assert_eq!(session.canvas.len(), 1);
        assert_eq!(session.status, "Key pressed: Ctrl+c - No action performed");
    }

    #[test]
    fn test_key_release_ignored() {
        let mut engine = engine();
        let mut session = SessionState::default();
        let mut key = ctrl('q');
        key.kind = layout_editor_tui::event::KeyEventKind::Release;
        assert_eq!(engine.handle_event(&mut session, &Event::Key(key)), EventResult::Ignored);
    }

    #[test]
    fn test_chrome_toggle_exclusive() {
        let mut engine = engine();
        let mut session = SessionState::default();
        engine.handle_mouse(&mut session, MouseInput::press(3, 0, Button::Button1));
        assert!(session.menus.is_open(Menu::File));
        engine.handle_mouse(&mut session, MouseInput::press(12, 0, Button::Button1));
        assert_eq!(session.menus.open_menu(), Some(Menu::Edit));
        engine.handle_mouse(&mut session, MouseInput::press(12, 0, Button::Button1));
        assert_eq!(session.menus.open_menu(), None);
    }

    #[test]
    fn test_file_dropdown_saves_and_closes() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::label(40, 5, 10, "a")]);
        session.menus.toggle(Menu::File);
        engine.handle_mouse(&mut session, MouseInput::press(20, 1, Button::Button1));
        assert_eq!(engine.store().save_count(), 1);
        assert_eq!(session.menus.open_menu(), None);
    }

    #[test]
    fn test_file_dropdown_outside_columns() {
        let mut engine = engine();
        let mut session = SessionState::default();
        session.menus.toggle(Menu::File);
        engine.handle_mouse(&mut session, MouseInput::press(21, 1, Button::Button1));
        assert_eq!(engine.store().save_count(), 0);
        assert!(session.menus.is_open(Menu::File));
    }

    #[test]
    fn test_elements_dropdown_selects() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![
            Widget::label(40, 5, 10, "a"),
            Widget::label(40, 9, 10, "b"),
        ]);
        session.menus.toggle(Menu::Elements);
        engine.handle_mouse(&mut session, MouseInput::press(30, 2, Button::Button1));
        assert_eq!(session.canvas.selected_index(), Some(1));
        assert_eq!(session.menus.open_menu(), None);
    }

    #[test]
    fn test_elements_dropdown_out_of_range_stays_open() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::label(40, 5, 10, "a")]);
        session.menus.toggle(Menu::Elements);
        engine.handle_mouse(&mut session, MouseInput::press(30, 5, Button::Button1));
        assert!(session.canvas.selected().is_none());
        assert!(session.menus.is_open(Menu::Elements));
    }

    #[test]
    fn test_dropdown_ignores_pure_motion() {
        let mut engine = engine();
        let mut session = SessionState::default();
        session.menus.toggle(Menu::Macros);
        engine.handle_mouse(&mut session, MouseInput::new(20, 1, MouseAction::Moved));
        assert!(session.menus.is_open(Menu::Macros));
        assert_eq!(session.crosshair, Some((20, 1)));
    }

    #[test]
    fn test_macros_and_edit_stubs_close_menu() {
        let mut engine = engine();
        let mut session = SessionState::default();
        session.menus.toggle(Menu::Macros);
        engine.handle_mouse(&mut session, MouseInput::press(20, 5, Button::Button1));
        assert_eq!(session.menus.open_menu(), None);
        assert!(session.status.contains("'Save Macro'"));

        session.menus.toggle(Menu::Edit);
        engine.handle_mouse(&mut session, MouseInput::press(11, 1, Button::Button1));
        assert_eq!(session.menus.open_menu(), None);
        assert!(session.status.contains("'Undo' from Edit menu"));
    }

    #[test]
    fn test_delete_control() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![
            Widget::label(40, 5, 10, "a"),
            Widget::label(40, 9, 10, "b"),
        ]);
        session.canvas.select(0);
        engine.handle_mouse(&mut session, MouseInput::press(45, 0, Button::Button1));
        assert_eq!(session.canvas.len(), 1);
        assert!(session.canvas.selected().is_none());
        assert_eq!(session.canvas.widgets()[0].text(), "b");

        // Nothing selected: nothing removed
        engine.handle_mouse(&mut session, MouseInput::press(45, 0, Button::Button1));
        assert_eq!(session.canvas.len(), 1);
    }

    #[test]
    fn test_resize_floor_while_dragging_handle() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::label(40, 5, 10, "[ Button ]")]);
        // Column 50 is past the hit area but still on the handle
        engine.handle_mouse(&mut session, MouseInput::press(50, 5, Button::Button3));
        assert!(session.canvas.widgets()[0].resizing);

        engine.handle_mouse(&mut session, MouseInput::held(60, 5, Button::Button1));
        assert_eq!(session.canvas.widgets()[0].width(), 19);

        engine.handle_mouse(&mut session, MouseInput::held(41, 5, Button::Button1));
        assert_eq!(session.canvas.widgets()[0].width(), 5);

        engine.handle_mouse(&mut session, MouseInput::release(41, 5, Button::Button3));
        assert!(!session.canvas.widgets()[0].resizing);
    }

    #[test]
    fn test_button3_release_moves_selection() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::label(40, 5, 10, "a")]);
        engine.handle_mouse(&mut session, MouseInput::press(41, 5, Button::Button3));
        engine.handle_mouse(&mut session, MouseInput::release(70, 12, Button::Button3));
        let widget = &session.canvas.widgets()[0];
        assert_eq!((widget.x, widget.y), (70, 12));
    }

    #[test]
    fn test_button3_release_on_popup_shows_popup() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::popup_button(40, 5, 10, "[ Popup ]")]);
        engine.handle_mouse(&mut session, MouseInput::press(41, 5, Button::Button3));
        let result = engine.handle_mouse(&mut session, MouseInput::release(70, 12, Button::Button3));
        assert_eq!(result, EventResult::Repaint);
        assert_eq!(engine.prompt().messages()[0].1, vec![POPUP_MESSAGE.to_string()]);
        assert_eq!(session.canvas.widgets()[0].x, 40);
    }

    #[test]
    fn test_edit_properties_applies_answers() {
        let mut engine = engine();
        let mut session = SessionState::new(vec![Widget::label(40, 5, 10, "a")]);
        session.canvas.select(0);
        engine.prompt_mut().push_entries(["Hello", "3", "", "-2"]);

        let key = KeyEvent::new(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(engine.handle_key(&mut session, &key), EventResult::Repaint);

        let widget = &session.canvas.widgets()[0];
        assert_eq!(widget.text(), "Hello");
        assert_eq!(widget.width(), 5);
        assert_eq!((widget.x, widget.y), (40, -2));

        let (_, fields) = &engine.prompt().edits()[0];
        assert_eq!(fields[1], Field::new("Width", 10));
    }

    #[test]
    fn test_apply_properties_ignores_bad_numbers() {
        let mut widget = Widget::text_input(1, 2, 10, "t");
        apply_properties(&mut widget, &["t".into(), "abc".into(), "1.5".into(), " 7 ".into()]);
        assert_eq!(widget.width(), 10);
        assert_eq!(widget.x, 1);
        assert_eq!(widget.y, 7);
    }
}
