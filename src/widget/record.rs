//! Persisted form of a widget

use serde::{Deserialize, Serialize};

/// One entry of a layout file
///
/// `kind` is also accepted under its older name `type`. `checked` is only
/// written for checkboxes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetRecord {
    #[serde(alias = "type")]
    pub kind: String,
    pub y: i32,
    pub x: i32,
    pub width: i32,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_type_key() {
        let json = r#"{"type": "Checkbox", "y": 7, "x": 2, "width": 12, "text": "[ ] A", "checked": false}"#;
        let record: WidgetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, "Checkbox");
        assert_eq!(record.checked, Some(false));
    }

    #[test]
    fn test_checked_omitted_for_other_kinds() {
        let record = WidgetRecord {
            kind: "Label".to_string(),
            y: 0,
            x: 0,
            width: 10,
            text: "Hi".to_string(),
            checked: None,
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"kind":"Label","y":0,"x":0,"width":10,"text":"Hi"}"#);
    }
}
