//! Canvas widgets
//!
//! One [`Widget`] type covers every kind; geometry that differs between kinds
//! (hit area, resize handle) is switched on the [`Variant`].

mod record;

pub use record::WidgetRecord;

use layout_editor_tui::widget::builtin::Block;
use layout_editor_tui::{addressable, clip, Surface, Theme};
use std::fmt;
use unicode_width::UnicodeWidthStr;

/// Smallest width any widget may have
pub const MIN_WIDTH: i32 = 5;

/// Marker text that gives a non-TextInput widget a resize handle
pub const BUTTON_MARKER: &str = "[ Button ]";

/// Widget discriminant, as written to layout files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Label,
    Checkbox,
    TextInput,
    PopupButton,
}

impl WidgetKind {
    pub const ALL: [WidgetKind; 4] = [
        WidgetKind::Label,
        WidgetKind::Checkbox,
        WidgetKind::TextInput,
        WidgetKind::PopupButton,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            WidgetKind::Label => "Label",
            WidgetKind::Checkbox => "Checkbox",
            WidgetKind::TextInput => "TextInput",
            WidgetKind::PopupButton => "PopupButton",
        }
    }

    /// Parse a kind name; anything unrecognized is a Label
    pub fn from_name(name: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .unwrap_or(WidgetKind::Label)
    }
}

impl fmt::Display for WidgetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind-specific data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Variant {
    Label,
    Checkbox { checked: bool, label: String },
    TextInput,
    PopupButton,
}

impl Variant {
    pub fn kind(&self) -> WidgetKind {
        match self {
            Variant::Label => WidgetKind::Label,
            Variant::Checkbox { .. } => WidgetKind::Checkbox,
            Variant::TextInput => WidgetKind::TextInput,
            Variant::PopupButton => WidgetKind::PopupButton,
        }
    }
}

/// A positioned, sized, textual element on the canvas
///
/// Every widget is drawn as a three-row box whose outer width is
/// `width + 2`; the text sits on the middle row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Widget {
    variant: Variant,
    pub x: i32,
    pub y: i32,
    width: i32,
    text: String,
    pub selected: bool,
    pub dragging: bool,
    pub resizing: bool,
}

impl Widget {
    fn new(variant: Variant, x: i32, y: i32, width: i32, text: String) -> Self {
        Self {
            variant,
            x,
            y,
            width: width.max(MIN_WIDTH),
            text,
            selected: false,
            dragging: false,
            resizing: false,
        }
    }

    pub fn label(x: i32, y: i32, width: i32, text: impl Into<String>) -> Self {
        Self::new(Variant::Label, x, y, width, text.into())
    }

    /// A checkbox sized to fit its rendered text
    pub fn checkbox(x: i32, y: i32, label: impl Into<String>, checked: bool) -> Self {
        let label = label.into();
        let text = checkbox_text(&label, checked);
        let width = text.chars().count() as i32;
        Self::new(Variant::Checkbox { checked, label }, x, y, width, text)
    }

    pub fn text_input(x: i32, y: i32, width: i32, text: impl Into<String>) -> Self {
        Self::new(Variant::TextInput, x, y, width, text.into())
    }

    pub fn popup_button(x: i32, y: i32, width: i32, text: impl Into<String>) -> Self {
        Self::new(Variant::PopupButton, x, y, width, text.into())
    }

    pub fn kind(&self) -> WidgetKind {
        self.variant.kind()
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    /// Set the width, floored at [`MIN_WIDTH`]
    pub fn set_width(&mut self, width: i32) {
        self.width = width.max(MIN_WIDTH);
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text; a checkbox re-derives its label from it
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        if let Variant::Checkbox { label, .. } = &mut self.variant {
            *label = checkbox_label(&self.text).to_string();
        }
    }

    /// Checked state, or `None` for anything but a checkbox
    pub fn checked(&self) -> Option<bool> {
        match self.variant {
            Variant::Checkbox { checked, .. } => Some(checked),
            _ => None,
        }
    }

    /// Flip a checkbox and regenerate its text; other kinds are unchanged
    pub fn toggle(&mut self) {
        if let Variant::Checkbox { checked, label } = &mut self.variant {
            *checked = !*checked;
            self.text = checkbox_text(label, *checked);
        }
    }

    /// Whether `(px, py)` lands on the widget's interactive area
    pub fn hit_test(&self, px: i32, py: i32) -> bool {
        match self.variant {
            Variant::TextInput => {
                let left = self.x.saturating_add(1);
                py == self.y.saturating_add(1) && left <= px && px < left.saturating_add(self.width)
            }
            _ => py == self.y && self.x <= px && px < self.x.saturating_add(self.width),
        }
    }

    /// Whether `(px, py)` lands on the widget's resize handle
    pub fn on_resize_handle(&self, px: i32, py: i32) -> bool {
        let right = self.x.saturating_add(self.width);
        let left = right.saturating_sub(2);
        match self.variant {
            Variant::TextInput => {
                py == self.y.saturating_add(1) && left <= px && px <= right.saturating_add(1)
            }
            _ if self.text.contains(BUTTON_MARKER) => py == self.y && left <= px && px <= right,
            _ => false,
        }
    }

    /// Draw the outline and text; off-surface cells are dropped individually
    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S, theme: &Theme) {
        Block::bordered()
            .border_style(theme.canvas)
            .draw(surface, self.x, self.y, self.width.saturating_add(2), 3);

        let style = if self.selected { theme.selection } else { theme.canvas };
        let (start, row) = (self.x.saturating_add(1), self.y.saturating_add(1));
        let shown = clip(&self.text, self.width as usize);
        let _ = surface.put_str(start, row, &shown, style);
        let padding = start.saturating_add(UnicodeWidthStr::width(shown.as_str()) as i32);
        for cx in addressable(padding, start.saturating_add(self.width)) {
            let _ = surface.put_char(cx, row, ' ', style);
        }
    }

    /// Flat record for persistence
    pub fn to_record(&self) -> WidgetRecord {
        WidgetRecord {
            kind: self.kind().name().to_string(),
            y: self.y,
            x: self.x,
            width: self.width,
            text: self.text.clone(),
            checked: self.checked(),
        }
    }

    /// Rebuild a widget from a record; transient flags start cleared
    pub fn from_record(record: &WidgetRecord) -> Self {
        let (x, y, width) = (record.x, record.y, record.width);
        let text = record.text.clone();
        match WidgetKind::from_name(&record.kind) {
            WidgetKind::Label => Self::new(Variant::Label, x, y, width, text),
            WidgetKind::Checkbox => {
                let variant = Variant::Checkbox {
                    checked: record.checked.unwrap_or(false),
                    label: checkbox_label(&text).to_string(),
                };
                Self::new(variant, x, y, width, text)
            }
            WidgetKind::TextInput => Self::new(Variant::TextInput, x, y, width, text),
            WidgetKind::PopupButton => Self::new(Variant::PopupButton, x, y, width, text),
        }
    }
}

fn checkbox_text(label: &str, checked: bool) -> String {
    if checked {
        format!("[X] {}", label)
    } else {
        format!("[ ] {}", label)
    }
}

fn checkbox_label(text: &str) -> &str {
    text.strip_prefix("[ ] ")
        .or_else(|| text.strip_prefix("[X] "))
        .unwrap_or(text)
}
