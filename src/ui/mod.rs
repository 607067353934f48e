//! Frame rendering
//!
//! Draws the whole editor from a [`SessionState`]: chrome first, then the
//! canvas widgets, then anything that must sit on top of them.

mod chrome;
mod panels;

use crate::session::SessionState;
use layout_editor_tui::widget::builtin::StatusLine;
use layout_editor_tui::{Buffer, Cell, Rect, Surface, Theme, Widget};

/// Paint one complete frame into `buf`
pub fn render_frame(session: &SessionState, theme: &Theme, area: Rect, buf: &mut Buffer) {
    buf.fill(area, Cell::empty().style(theme.canvas));
    if area.is_empty() {
        return;
    }

    chrome::draw_menu_bar(buf, theme);
    panels::draw_palette(buf, theme);
    panels::draw_properties(buf, theme, session.canvas.selected());

    for widget in session.canvas.widgets() {
        widget.render(buf, theme);
    }

    if let Some(menu) = session.menus.open_menu() {
        chrome::draw_dropdown(buf, theme, menu, session.canvas.widgets());
    }

    if let Some((x, y)) = session.crosshair {
        let _ = buf.put_char(x, y, '+', theme.crosshair);
    }

    let status_row = Rect::new(area.x, area.bottom() - 1, area.width, 1);
    StatusLine::new(session.status.as_str())
        .label("Log: ")
        .style(theme.canvas)
        .render(status_row, buf);
}

/// Vertical rule of `len` cells starting at `(x, y)`
fn vline<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, len: i32, theme: &Theme) {
    for row in y..y + len {
        let _ = surface.put_char(x, row, '│', theme.canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::Menu;
    use crate::widget::Widget as CanvasWidget;

    fn frame(session: &SessionState) -> Buffer {
        let area = Rect::sized(80, 24);
        let mut buf = Buffer::new(area);
        render_frame(session, &Theme::classic(), area, &mut buf);
        buf
    }

    #[test]
    fn test_menu_bar_and_status() {
        let mut session = SessionState::default();
        session.status = "Mouse at (3,4)".to_string();
        let buf = frame(&session);

        assert!(buf.row_text(0).starts_with("   File    Edit    Macros    Elements "));
        assert!(buf.row_text(23).starts_with("Log: Mouse at (3,4)"));
    }

    #[test]
    fn test_widget_and_crosshair_drawn() {
        let mut session = SessionState::new(vec![CanvasWidget::label(30, 10, 10, "[ Button ]")]);
        session.crosshair = Some((70, 20));
        let buf = frame(&session);

        assert_eq!(buf.get(30, 10).unwrap().symbol, "┌");
        assert_eq!(buf.get(31, 11).unwrap().symbol, "[");
        assert_eq!(buf.get(70, 20).unwrap().symbol, "+");
    }

    #[test]
    fn test_dropdown_drawn_over_widgets() {
        let mut session = SessionState::new(vec![CanvasWidget::label(28, 0, 10, "zzzzzzzzzz")]);
        session.menus.toggle(Menu::Elements);
        let buf = frame(&session);
        assert!(buf.row_text(1).contains("0: Label - zzzzzzzzzz"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut session = SessionState::new(vec![CanvasWidget::text_input(-5, -5, 40, "x")]);
        session.crosshair = Some((-1, 100));
        session.menus.toggle(Menu::Macros);
        let area = Rect::sized(3, 2);
        let mut buf = Buffer::new(area);
        render_frame(&session, &Theme::dark(), area, &mut buf);
        assert_eq!(buf.row_text(1), "Log");
    }
}
