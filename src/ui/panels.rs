//! Palette toolbar and properties panel

use super::vline;
use crate::palette;
use crate::widget::Widget;
use layout_editor_tui::{Surface, Theme};

/// Column of the rule separating the palette from the canvas
const PALETTE_RULE_COLUMN: i32 = 20;

/// Width reserved for the properties panel at the right edge
const PROPERTIES_WIDTH: i32 = 25;

pub(super) fn draw_palette<S: Surface + ?Sized>(surface: &mut S, theme: &Theme) {
    let rows = i32::from(surface.size().height);
    let _ = surface.put_str(2, 2, "Elements:", theme.heading);
    vline(surface, PALETTE_RULE_COLUMN, 2, rows - 4, theme);
    for template in palette::templates() {
        template.render(surface, theme);
    }
}

pub(super) fn draw_properties<S: Surface + ?Sized>(
    surface: &mut S,
    theme: &Theme,
    selected: Option<&Widget>,
) {
    let size = surface.size();
    let start = i32::from(size.width) - PROPERTIES_WIDTH;
    vline(surface, start - 1, 1, i32::from(size.height) - 3, theme);
    let _ = surface.put_str(start, 1, "Properties:", theme.heading);

    let lines = match selected {
        Some(widget) => vec![
            format!("Type: {}", widget.kind()),
            format!("X: {}", widget.x),
            format!("Y: {}", widget.y),
            format!("Width: {}", widget.width()),
            format!("Text: {}", widget.text()),
        ],
        None => vec!["None".to_string()],
    };
    for (row, line) in (3..).zip(lines) {
        let _ = surface.put_str(start, row, &line, theme.canvas);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use layout_editor_tui::{Buffer, Rect};

    #[test]
    fn test_properties_for_selection() {
        let mut buf = Buffer::new(Rect::sized(60, 12));
        let widget = Widget::checkbox(4, 6, "Opt", true);
        draw_properties(&mut buf, &Theme::classic(), Some(&widget));

        let heading: String = buf.row_text(1).chars().skip(35).take(11).collect();
        assert_eq!(heading, "Properties:");
        assert!(buf.row_text(3).contains("│Type: Checkbox"));
        assert!(buf.row_text(7).contains("Text: [X] Opt"));
        assert_eq!(buf.get(34, 5).unwrap().symbol, "│");
    }

    #[test]
    fn test_properties_without_selection() {
        let mut buf = Buffer::new(Rect::sized(60, 12));
        draw_properties(&mut buf, &Theme::classic(), None);
        assert!(buf.row_text(3).contains("None"));
        assert!(buf.row_text(4).trim().ends_with('│'));
    }

    #[test]
    fn test_palette_templates_drawn() {
        let mut buf = Buffer::new(Rect::sized(40, 24));
        draw_palette(&mut buf, &Theme::classic());
        assert!(buf.row_text(2).starts_with("  Elements:"));
        assert!(buf.row_text(4).starts_with("  │[ Button ]│"));
        assert!(buf.row_text(8).starts_with("  │[ ] Checkbox│"));
        assert_eq!(buf.get(20, 10).unwrap().symbol, "│");
    }
}
