//! The editor as a terminal application

use crate::engine::InteractionEngine;
use crate::persistence::LayoutStore;
use crate::prompt::Prompt;
use crate::session::SessionState;
use crate::ui;
use layout_editor_tui::{App, Buffer, Event, EventResult, Rect, Theme};

/// Glue between the terminal runner, the engine and the frame renderer
pub struct EditorApp<S, P> {
    engine: InteractionEngine<S, P>,
    theme: Theme,
}

impl<S: LayoutStore, P: Prompt> EditorApp<S, P> {
    pub fn new(engine: InteractionEngine<S, P>, theme: Theme) -> Self {
        Self { engine, theme }
    }

    pub fn engine(&self) -> &InteractionEngine<S, P> {
        &self.engine
    }
}

impl<S: LayoutStore, P: Prompt> App for EditorApp<S, P> {
    type State = SessionState;

    fn handle_event(&mut self, event: Event, state: &mut Self::State) -> EventResult {
        self.engine.handle_event(state, &event)
    }

    fn render(&self, state: &Self::State, area: Rect, buf: &mut Buffer) {
        ui::render_frame(state, &self.theme, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;
    use crate::prompt::ScriptedPrompt;
    use layout_editor_tui::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_app_routes_events_and_renders() {
        let engine = InteractionEngine::new(MemoryStore::new(), ScriptedPrompt::new());
        let mut app = EditorApp::new(engine, Theme::classic());
        let mut state = SessionState::default();

        let key = Event::Key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(app.handle_event(key, &mut state), EventResult::Consumed);
        assert_eq!(app.engine().store().save_count(), 1);

        let area = Rect::sized(80, 24);
        let mut buf = Buffer::new(area);
        app.render(&state, area, &mut buf);
        assert!(buf.row_text(23).starts_with("Log: Key pressed: Ctrl+s"));
    }
}
