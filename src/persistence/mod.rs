//! Saving and loading canvas layouts

mod error;
mod file;
mod memory;

pub use error::{LayoutError, LayoutResult};
pub use file::JsonFileStore;
pub use memory::MemoryStore;

use crate::widget::{Widget, WidgetRecord};

/// Default layout file, relative to the working directory
pub const DEFAULT_LAYOUT_FILE: &str = "layout.json";

/// A place layouts are written to and read from
pub trait LayoutStore {
    /// Persist the full widget sequence, replacing what was stored
    fn save(&mut self, widgets: &[Widget]) -> LayoutResult<()>;

    /// Read the stored sequence; nothing stored yet means an empty layout
    fn load(&self) -> LayoutResult<Vec<Widget>>;
}

/// Serialize widgets as a JSON array indented with four spaces
pub fn to_json(widgets: &[Widget]) -> LayoutResult<String> {
    let records: Vec<WidgetRecord> = widgets.iter().map(Widget::to_record).collect();
    let mut out = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    serde::Serialize::serialize(&records, &mut ser)
        .map_err(|e| LayoutError::Serialization(e.to_string()))?;
    String::from_utf8(out).map_err(|e| LayoutError::Serialization(e.to_string()))
}

/// Parse a JSON array of widget records
pub fn from_json(json: &str) -> LayoutResult<Vec<Widget>> {
    let records: Vec<WidgetRecord> =
        serde_json::from_str(json).map_err(|e| LayoutError::Serialization(e.to_string()))?;
    Ok(records.iter().map(Widget::from_record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::WidgetKind;

    #[test]
    fn test_json_uses_four_space_indent() {
        let json = to_json(&[Widget::label(1, 2, 10, "Hi")]).unwrap();
        let expected = "[\n    {\n        \"kind\": \"Label\",\n        \"y\": 2,\n        \"x\": 1,\n        \"width\": 10,\n        \"text\": \"Hi\"\n    }\n]";
        assert_eq!(json, expected);
    }

    #[test]
    fn test_mixed_round_trip_preserves_order() {
        let widgets = vec![
            Widget::popup_button(5, 5, 12, "[ Popup ]"),
            Widget::checkbox(1, 2, "Agree", true),
            Widget::text_input(-3, 40, 20, "name"),
            Widget::label(0, 0, 10, "[ Button ]"),
        ];
        let restored = from_json(&to_json(&widgets).unwrap()).unwrap();
        assert_eq!(restored, widgets);
    }

    #[test]
    fn test_from_json_accepts_legacy_records() {
        let json = r#"[{"type": "UIElement", "y": 3, "x": 4, "width": 10, "text": "old"}]"#;
        let widgets = from_json(json).unwrap();
        assert_eq!(widgets[0].kind(), WidgetKind::Label);
        assert_eq!(widgets[0].text(), "old");
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(from_json("{not json"), Err(LayoutError::Serialization(_))));
    }
}
