//! Dialogs drawn over the live terminal

use super::{Field, Prompt};
use layout_editor_tui::event::{Event, EventLoop, KeyCode, KeyModifiers, MouseEventKind};
use layout_editor_tui::style::clip;
use layout_editor_tui::widget::builtin::{Input, InputState, Overlay};
use layout_editor_tui::widget::StatefulWidget;
use layout_editor_tui::{Buffer, Cell, Rect, Terminal, Theme};
use std::io;
use unicode_width::UnicodeWidthStr;

/// Modal dialogs painted on top of the last frame
///
/// Only the dialog's cells are written; the caller must force a full redraw
/// once the dialog returns.
pub struct TerminalPrompt {
    terminal: Terminal,
    events: EventLoop,
    theme: Theme,
}

impl TerminalPrompt {
    pub fn new(theme: Theme) -> io::Result<Self> {
        Ok(Self {
            terminal: Terminal::new()?,
            events: EventLoop::new(),
            theme,
        })
    }

    fn overlay(&self, title: &str, width: usize, height: usize) -> Overlay {
        Overlay::new()
            .title(title)
            .dimensions(to_u16(width), to_u16(height))
            .style(self.theme.dialog)
            .border_style(self.theme.dialog_border)
    }

    /// Block until a key press or mouse button press
    fn wait_for_dismiss(&mut self) -> io::Result<()> {
        loop {
            match self.events.next()? {
                event if event.as_key_press().is_some() => return Ok(()),
                Event::Mouse(mouse) if matches!(mouse.kind, MouseEventKind::Down(_)) => {
                    return Ok(())
                }
                _ => {}
            }
        }
    }

    /// Collect one line of input, echoing it in `area`
    fn read_line(&mut self, buf: &mut Buffer, dialog: Rect, area: Rect) -> io::Result<String> {
        let input = Input::new().style(self.theme.dialog);
        let mut state = InputState::new();
        loop {
            buf.fill(area, Cell::empty().style(self.theme.dialog));
            input.render(area, buf, &mut state);
            self.terminal.draw_region(buf, dialog)?;

            match self.events.next()? {
                Event::Paste(text) => state.insert_str(&text),
                event => {
                    let Some(key) = event.as_key_press() else {
                        continue;
                    };
                    match key.code {
                        KeyCode::Enter => break,
                        // Discarding the entry keeps the field's current value
                        KeyCode::Esc => {
                            state.take();
                            break;
                        }
                        KeyCode::Backspace => state.backspace(),
                        KeyCode::Delete => state.delete(),
                        KeyCode::Left => state.move_left(),
                        KeyCode::Right => state.move_right(),
                        KeyCode::Home => state.move_home(),
                        KeyCode::End => state.move_end(),
                        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                            state.insert(c)
                        }
                        _ => {}
                    }
                }
            }
        }
        Ok(state.take())
    }
}

impl Prompt for TerminalPrompt {
    fn edit_fields(&mut self, title: &str, fields: &[Field]) -> io::Result<Vec<String>> {
        self.terminal.refresh_size()?;
        let parent = self.terminal.full_rect();
        let overlay = self
            .overlay(title, 40, fields.len() + 5)
            .help_text("Enter to accept, blank keeps value");
        let mut buf = Buffer::new(parent);
        let inner = overlay.render_frame(parent, &mut buf);
        let dialog = overlay.area(parent);

        let mut answers = Vec::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            let row = inner.y + 1 + i as u16;
            if row >= inner.bottom() {
                answers.push(field.current.clone());
                continue;
            }
            let label = clip(&format!("{} [{}]: ", field.label, field.current), inner.width as usize);
            buf.set_string(inner.x, row, &label, self.theme.dialog);
            let used = to_u16(UnicodeWidthStr::width(label.as_str()));
            let entry_area = Rect::new(inner.x + used, row, inner.width.saturating_sub(used), 1);

            let entry = self.read_line(&mut buf, dialog, entry_area)?;
            answers.push(field.resolve(&entry));
        }

        self.wait_for_dismiss()?;
        Ok(answers)
    }

    fn show_message(&mut self, title: &str, lines: &[&str]) -> io::Result<()> {
        self.terminal.refresh_size()?;
        let parent = self.terminal.full_rect();
        let longest = lines
            .iter()
            .map(|line| UnicodeWidthStr::width(*line))
            .max()
            .unwrap_or(0);
        let width = (longest + 4).max(title.chars().count() + 6);
        let overlay = self.overlay(title, width, lines.len() + 2);

        let mut buf = Buffer::new(parent);
        let inner = overlay.render_frame(parent, &mut buf);
        for (row, line) in (inner.y..inner.bottom()).zip(lines) {
            buf.set_string(inner.x, row, &clip(line, inner.width as usize), self.theme.dialog);
        }
        self.terminal.draw_region(&buf, overlay.area(parent))?;

        self.wait_for_dismiss()
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
