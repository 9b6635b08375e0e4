//! User input events accepted by the controller.
//!
//! Events are also the JSONL protocol of the `session` command:
//!
//! ```json
//! {"type": "setHexText", "field": "primary", "text": "#ff0000"}
//! {"type": "setSwatch", "field": "accent", "value": "#00ff00"}
//! {"type": "setSlider", "field": "borderRadius", "value": 12}
//! {"type": "applyPreset", "name": "vibrant"}
//! {"type": "key", "key": "e", "modifiers": ["ctrl"]}
//! {"type": "drop", "files": [{"name": "t.json", "contentType": "application/json", "path": "/tmp/t.json"}]}
//! ```

use serde::Deserialize;
use std::path::PathBuf;

use crate::theme::{ColorField, HexColor, NumericField};

/// A file dropped onto the preview container
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DroppedFile {
    pub name: String,
    /// Declared MIME type, as reported by the drop
    #[serde(default)]
    pub content_type: String,
    pub path: PathBuf,
}

impl DroppedFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        DroppedFile {
            name: name.into(),
            content_type: content_type.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditorEvent {
    /// Swatch picker changed; swatch values are valid by construction
    SetSwatch { field: ColorField, value: HexColor },
    /// Hex text field edited; may hold anything the user typed
    SetHexText { field: ColorField, text: String },
    SetFontFamily { value: String },
    SetSlider { field: NumericField, value: i64 },
    ApplyPreset { name: String },
    Reset,
    Export,
    SetDarkMode { enabled: bool },
    Key {
        key: String,
        #[serde(default)]
        modifiers: Vec<String>,
    },
    DragOver,
    DragLeave,
    Drop { files: Vec<DroppedFile> },
    /// Run scheduled work that is due
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_hex_text_deserialization() {
        let json = r##"{"type": "setHexText", "field": "primary", "text": "#12"}"##;
        let event: EditorEvent = serde_json::from_str(json).unwrap();
        assert_eq!(
            event,
            EditorEvent::SetHexText {
                field: ColorField::Primary,
                text: "#12".to_string()
            }
        );
    }

    #[test]
    fn test_set_swatch_rejects_invalid_color() {
        let ok = r##"{"type": "setSwatch", "field": "accent", "value": "#00FF00"}"##;
        assert!(serde_json::from_str::<EditorEvent>(ok).is_ok());
        let bad = r#"{"type": "setSwatch", "field": "accent", "value": "green"}"#;
        assert!(serde_json::from_str::<EditorEvent>(bad).is_err());
    }

    #[test]
    fn test_set_slider_field_names() {
        let json = r#"{"type": "setSlider", "field": "borderRadius", "value": 12}"#;
        match serde_json::from_str::<EditorEvent>(json).unwrap() {
            EditorEvent::SetSlider { field, value } => {
                assert_eq!(field, NumericField::BorderRadius);
                assert_eq!(value, 12);
            }
            other => panic!("Expected SetSlider, got {:?}", other),
        }
    }

    #[test]
    fn test_unit_events() {
        for (json, expected) in [
            (r#"{"type": "reset"}"#, EditorEvent::Reset),
            (r#"{"type": "export"}"#, EditorEvent::Export),
            (r#"{"type": "dragOver"}"#, EditorEvent::DragOver),
            (r#"{"type": "dragLeave"}"#, EditorEvent::DragLeave),
            (r#"{"type": "tick"}"#, EditorEvent::Tick),
        ] {
            assert_eq!(serde_json::from_str::<EditorEvent>(json).unwrap(), expected);
        }
    }

    #[test]
    fn test_key_without_modifiers() {
        let json = r#"{"type": "key", "key": "e"}"#;
        match serde_json::from_str::<EditorEvent>(json).unwrap() {
            EditorEvent::Key { key, modifiers } => {
                assert_eq!(key, "e");
                assert!(modifiers.is_empty());
            }
            other => panic!("Expected Key, got {:?}", other),
        }
    }

    #[test]
    fn test_drop_deserialization() {
        let json = r#"{"type": "drop", "files": [
            {"name": "theme.json", "contentType": "application/json", "path": "/tmp/theme.json"},
            {"name": "notes.txt", "path": "/tmp/notes.txt"}
        ]}"#;
        match serde_json::from_str::<EditorEvent>(json).unwrap() {
            EditorEvent::Drop { files } => {
                assert_eq!(files.len(), 2);
                assert_eq!(files[0].content_type, "application/json");
                assert_eq!(files[1].content_type, "");
            }
            other => panic!("Expected Drop, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_event_type_fails() {
        assert!(serde_json::from_str::<EditorEvent>(r#"{"type": "undo"}"#).is_err());
    }
}
