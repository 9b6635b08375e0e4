use super::*;
use crate::theme::NumericField;
use std::io::Write;
use std::time::Duration;

#[test]
fn test_default_config() {
    let config = EditorConfig::default();
    assert_eq!(config.ack_duration_ms, DEFAULT_ACK_DURATION_MS);
    assert_eq!(config.ack_duration(), Duration::from_millis(2000));
    assert_eq!(config.export_shortcut, DEFAULT_EXPORT_SHORTCUT);
    assert_eq!(config.reset_shortcut, DEFAULT_RESET_SHORTCUT);
    assert!(!config.clamp_imported_values);
    assert!(config.export_dir.is_none());
}

#[test]
fn test_empty_json_uses_field_defaults() {
    let config: EditorConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(config.ack_duration_ms, 2000);
    assert_eq!(config.control_ranges.font_size, ControlRange::new(12, 24));
}

#[test]
fn test_camel_case_fields() {
    let json = r#"{
        "ackDurationMs": 500,
        "exportShortcut": "ctrl+shift+e",
        "clampImportedValues": true,
        "exportDir": "/tmp/themes",
        "controlRanges": { "padding": { "min": 4, "max": 40 } }
    }"#;
    let config: EditorConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.ack_duration_ms, 500);
    assert!(config.clamp_imported_values);
    assert_eq!(config.resolved_export_dir(), std::path::PathBuf::from("/tmp/themes"));
    assert_eq!(config.control_ranges.padding, ControlRange::new(4, 40));
    // Unspecified ranges keep their defaults
    assert_eq!(config.control_ranges.border_radius, ControlRange::new(0, 24));

    let shortcut = config.export_shortcut().unwrap();
    assert!(shortcut.modifiers.ctrl && shortcut.modifiers.shift);
}

#[test]
fn test_control_range_clamp() {
    let range = ControlRange::new(12, 24);
    assert_eq!(range.clamp(4), 12);
    assert_eq!(range.clamp(99), 24);
    assert_eq!(range.clamp(16), 16);
    assert_eq!(range.clamp(24), 24);
}

#[test]
fn test_ranges_for_field() {
    let ranges = ControlRanges::default();
    assert_eq!(ranges.for_field(NumericField::FontSize), ControlRange::new(12, 24));
    assert_eq!(ranges.for_field(NumericField::BorderRadius), ControlRange::new(0, 24));
    assert_eq!(ranges.for_field(NumericField::Padding), ControlRange::new(8, 32));
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let config = load_config_from(&dir.path().join("nope.json"));
    assert_eq!(config.ack_duration_ms, DEFAULT_ACK_DURATION_MS);
}

#[test]
fn test_load_invalid_json_uses_defaults() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{{ not json").unwrap();
    assert!(try_load_config_from(file.path()).is_err());
    let config = load_config_from(file.path());
    assert_eq!(config.export_shortcut, DEFAULT_EXPORT_SHORTCUT);
}

#[test]
fn test_load_resets_bad_shortcut_only() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"resetShortcut": "mod+nope", "ackDurationMs": 750}}"#).unwrap();
    let config = load_config_from(file.path());
    assert_eq!(config.reset_shortcut, DEFAULT_RESET_SHORTCUT);
    assert_eq!(config.ack_duration_ms, 750);
}
