//! Menu bar and dropdowns

use crate::menu::{Menu, CHROME};
use crate::widget::Widget;
use layout_editor_tui::{Surface, Theme};

pub(super) fn draw_menu_bar<S: Surface + ?Sized>(surface: &mut S, theme: &Theme) {
    for entry in CHROME.iter() {
        let _ = surface.put_str(entry.start, 0, entry.label, theme.chrome);
    }
}

/// Entries of `menu`, one per row starting at row 1 under the menu's label
pub(super) fn draw_dropdown<S: Surface + ?Sized>(
    surface: &mut S,
    theme: &Theme,
    menu: Menu,
    widgets: &[Widget],
) {
    let column = menu.column();
    let rows: Vec<String> = match menu {
        Menu::Elements => widgets
            .iter()
            .enumerate()
            .map(|(i, w)| format!("{}: {} - {}", i, w.kind(), w.text()))
            .collect(),
        _ => menu.options().iter().map(|o| o.to_string()).collect(),
    };
    for (row, text) in (1..).zip(rows) {
        let _ = surface.put_str(column, row, &text, theme.menu_item);
    }
}
