//! Widget templates offered in the left toolbar

use crate::widget::{Widget, WidgetKind};

/// Where a widget pulled from the palette first appears
pub const NEW_WIDGET_POSITION: (i32, i32) = (30, 10);

/// Template widgets in toolbar order
///
/// Rebuilt on demand; templates are never stored on the canvas.
pub fn templates() -> [Widget; 4] {
    [
        Widget::label(2, 3, 10, "[ Button ]"),
        Widget::checkbox(2, 7, "Checkbox", false),
        Widget::text_input(2, 11, 15, "[ TextBox ]"),
        Widget::popup_button(2, 15, 10, "[ Popup ]"),
    ]
}

/// Kind of the template whose outline contains `(mx, my)`
pub fn template_at(mx: i32, my: i32) -> Option<WidgetKind> {
    templates()
        .iter()
        .find(|t| t.y <= my && my <= t.y + 2 && t.x <= mx && mx <= t.x + t.width() + 1)
        .map(Widget::kind)
}

/// A fresh widget of `kind` at [`NEW_WIDGET_POSITION`]
pub fn instantiate(kind: WidgetKind) -> Widget {
    let (x, y) = NEW_WIDGET_POSITION;
    match kind {
        WidgetKind::Label => Widget::label(x, y, 10, "[ Button ]"),
        WidgetKind::Checkbox => Widget::checkbox(x, y, "New Checkbox", false),
        WidgetKind::TextInput => Widget::text_input(x, y, 15, ""),
        WidgetKind::PopupButton => Widget::popup_button(x, y, 10, "[ Popup ]"),
    }
}
