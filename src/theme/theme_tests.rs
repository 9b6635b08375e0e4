use super::*;
use crate::config::ControlRanges;
use chrono::{TimeZone, Utc};
use serde_json::json;

fn at_ms(ms: i64) -> chrono::DateTime<Utc> {
    Utc.timestamp_millis_opt(ms).unwrap()
}

// ========================================================================
// Hex colors
// ========================================================================

#[test]
fn test_valid_hex_colors() {
    for text in ["#4f60ff", "#4F60FF", "#aBcDeF", "#000000", "#999999"] {
        assert!(is_valid_hex(text), "{} should be valid", text);
    }
}

#[test]
fn test_invalid_hex_colors() {
    for text in [
        "", "#", "4f60ff", "#4f60f", "#4f60fff", "#4g60ff", " #4f60ff", "#4f60ff ", "#fff",
        "##4f60f",
    ] {
        assert!(!is_valid_hex(text), "{:?} should be invalid", text);
        assert!(HexColor::parse(text).is_err());
    }
}

#[test]
fn test_hex_color_preserves_case() {
    let color = HexColor::parse("#AbCdEf").unwrap();
    assert_eq!(color.as_str(), "#AbCdEf");
    assert_eq!(color.to_string(), "#AbCdEf");
}

#[test]
fn test_hex_color_serde_validates() {
    let color: HexColor = serde_json::from_str(r##""#10B981""##).unwrap();
    assert_eq!(color.to_string(), "#10B981");
    assert!(serde_json::from_str::<HexColor>(r#""red""#).is_err());
}

// ========================================================================
// Presets
// ========================================================================

#[test]
fn test_preset_table() {
    let expected = [
        ("default", "#4f60ff", "#8b5cf6", "#10b981", "Inter", 16, 8, 16),
        ("modern", "#6366f1", "#8b5cf6", "#06b6d4", "Inter", 15, 16, 20),
        ("classic", "#2563eb", "#7c3aed", "#059669", "Arial", 16, 4, 14),
        ("vibrant", "#dc2626", "#d946ef", "#f59e0b", "Poppins", 17, 12, 18),
    ];
    for (name, primary, secondary, accent, font, size, radius, padding) in expected {
        let state = find_preset(name).unwrap().to_state();
        assert_eq!(state.primary_color.as_str(), primary);
        assert_eq!(state.secondary_color.as_str(), secondary);
        assert_eq!(state.accent_color.as_str(), accent);
        assert_eq!(state.font_family, font);
        assert_eq!(state.font_size, PixelValue::px(size));
        assert_eq!(state.border_radius, PixelValue::px(radius));
        assert_eq!(state.padding, PixelValue::px(padding));
    }
}

#[test]
fn test_preset_literals_are_valid_colors() {
    for preset in PRESETS.iter() {
        for color in [preset.primary, preset.secondary, preset.accent] {
            assert!(is_valid_hex(color), "{} has bad color {}", preset.name, color);
        }
    }
}

#[test]
fn test_unknown_preset() {
    assert!(find_preset("neon").is_none());
    assert!(find_preset("Default").is_none());
    assert_eq!(default_preset().name, DEFAULT_PRESET);
    assert_eq!(ThemeState::default(), default_preset().to_state());
}

// ========================================================================
// State updates
// ========================================================================

#[test]
fn test_with_methods_leave_original_untouched() {
    let state = ThemeState::default();
    let next = state
        .with_color(ColorField::Accent, HexColor::parse("#123456").unwrap())
        .with_font_family("Georgia, serif")
        .with_numeric(NumericField::Padding, PixelValue::px(30));

    assert_eq!(state.accent_color.as_str(), "#10b981");
    assert_eq!(next.accent_color.as_str(), "#123456");
    assert_eq!(next.font_family, "Georgia, serif");
    assert_eq!(next.numeric(NumericField::Padding), PixelValue::px(30));
    assert_eq!(next.color(ColorField::Primary), &state.primary_color);
}

#[test]
fn test_pixel_value_display() {
    assert_eq!(PixelValue::px(16).to_string(), "16px");
    assert_eq!(PixelValue::NAN.to_string(), "NaNpx");
    assert_eq!(PixelValue::NAN.control_text(), "NaN");
    assert_eq!(PixelValue::px(-2).control_text(), "-2");
}

// ========================================================================
// Export
// ========================================================================

#[test]
fn test_export_document_shape() {
    let state = find_preset("vibrant").unwrap().to_state();
    let doc = ThemeDocument::from_state(&state, at_ms(1_714_564_800_123));
    let value = serde_json::to_value(&doc).unwrap();
    assert_eq!(
        value,
        json!({
            "colors": { "primary": "#dc2626", "secondary": "#d946ef", "accent": "#f59e0b" },
            "typography": { "fontFamily": "Poppins", "fontSize": "17px" },
            "spacing": { "borderRadius": "12px", "padding": "18px" },
            "timestamp": "2024-05-01T12:00:00.123Z"
        })
    );
}

#[test]
fn test_export_pretty_uses_two_space_indent() {
    let doc = ThemeDocument::from_state(&ThemeState::default(), at_ms(0));
    let text = doc.to_json_pretty().unwrap();
    assert!(text.starts_with("{\n  \"colors\": {\n    \"primary\": \"#4f60ff\""));
    assert!(text.contains("\n  \"timestamp\": \"1970-01-01T00:00:00.000Z\"\n}"));
}

#[test]
fn test_export_filename() {
    assert_eq!(export_filename(at_ms(1_700_000_000_000)), "booxi-theme-1700000000000.json");
}

// ========================================================================
// Import
// ========================================================================

#[test]
fn test_parse_leading_int() {
    assert_eq!(parse_leading_int("16px"), Some(16));
    assert_eq!(parse_leading_int("  12"), Some(12));
    assert_eq!(parse_leading_int("-3px"), Some(-3));
    assert_eq!(parse_leading_int("+7"), Some(7));
    assert_eq!(parse_leading_int("0x1A"), Some(26));
    assert_eq!(parse_leading_int("16.9px"), Some(16));
    assert_eq!(parse_leading_int("px16"), None);
    assert_eq!(parse_leading_int(""), None);
    assert_eq!(parse_leading_int("-"), None);
    assert_eq!(parse_leading_int("NaN"), None);
}

#[test]
fn test_pixel_from_json() {
    assert_eq!(pixel_from_json(Some(&json!("18px"))), PixelValue::px(18));
    assert_eq!(pixel_from_json(Some(&json!(18))), PixelValue::px(18));
    assert_eq!(pixel_from_json(Some(&json!(18.8))), PixelValue::px(18));
    assert_eq!(pixel_from_json(Some(&json!("abc"))), PixelValue::NAN);
    assert_eq!(pixel_from_json(Some(&json!(null))), PixelValue::NAN);
    assert_eq!(pixel_from_json(Some(&json!(true))), PixelValue::NAN);
    assert_eq!(pixel_from_json(None), PixelValue::NAN);
}

#[test]
fn test_leading_int_saturates_on_overflow() {
    assert_eq!(parse_leading_int("99999999999999999999px"), Some(i64::MAX));
    assert_eq!(parse_leading_int("-99999999999999999999"), Some(-i64::MAX));
    assert_eq!(parse_leading_int("0xFFFFFFFFFFFFFFFFFF"), Some(i64::MAX));
    assert_eq!(
        pixel_from_json(Some(&json!("99999999999999999999px"))),
        PixelValue::px(i64::MAX)
    );
}

#[test]
fn test_exponent_form_numbers_take_mantissa() {
    assert_eq!(pixel_from_json(Some(&json!(1e21))), PixelValue::px(1));
    assert_eq!(pixel_from_json(Some(&json!(2.5e22))), PixelValue::px(2));
    assert_eq!(pixel_from_json(Some(&json!(-3e21))), PixelValue::px(-3));
    assert_eq!(pixel_from_json(Some(&json!(1e-7))), PixelValue::px(1));
    assert_eq!(pixel_from_json(Some(&json!(0.5))), PixelValue::px(0));
    assert_eq!(pixel_from_json(Some(&json!(1e20))), PixelValue::px(i64::MAX));
}

#[test]
fn test_import_invalid_json_is_error() {
    assert!(parse_theme_document("{ \"colors\": ").is_err());
    assert!(parse_theme_document("not json").is_err());
}

#[test]
fn test_import_non_object_is_empty_patch() {
    assert!(parse_theme_document("42").unwrap().is_empty());
    assert!(parse_theme_document("[1,2]").unwrap().is_empty());
}

#[test]
fn test_import_full_document_round_trip() {
    let original = find_preset("classic").unwrap().to_state();
    let text = ThemeDocument::from_state(&original, at_ms(5))
        .to_json_pretty()
        .unwrap();
    let patch = parse_theme_document(&text).unwrap();
    assert_eq!(patch.apply_to(&ThemeState::default()), original);
}

#[test]
fn test_import_missing_spacing_keeps_spacing() {
    let start = find_preset("modern").unwrap().to_state();
    let patch = parse_theme_document(
        r##"{"colors":{"primary":"#111111","secondary":"#222222","accent":"#333333"},
            "typography":{"fontFamily":"Arial","fontSize":"14px"}}"##,
    )
    .unwrap();
    let next = patch.apply_to(&start);
    assert_eq!(next.border_radius, start.border_radius);
    assert_eq!(next.padding, start.padding);
    assert_eq!(next.font_size, PixelValue::px(14));
    assert_eq!(next.primary_color.as_str(), "#111111");
}

#[test]
fn test_import_group_without_numeric_field_is_nan() {
    let start = ThemeState::default();
    let patch = parse_theme_document(r#"{"typography":{"fontFamily":"Poppins"},"spacing":{}}"#)
        .unwrap();
    let next = patch.apply_to(&start);
    assert_eq!(next.font_family, "Poppins");
    assert!(next.font_size.is_nan());
    assert!(next.border_radius.is_nan());
    assert!(next.padding.is_nan());
}

#[test]
fn test_import_partial_colors_and_bad_color() {
    let start = ThemeState::default();
    let patch =
        parse_theme_document(r##"{"colors":{"accent":"#ABCDEF","primary":"blue"}}"##).unwrap();
    let next = patch.apply_to(&start);
    assert_eq!(next.accent_color.as_str(), "#ABCDEF");
    assert_eq!(next.primary_color, start.primary_color);
    assert_eq!(next.secondary_color, start.secondary_color);
}

#[test]
fn test_import_ignores_unknown_and_null_groups() {
    let start = ThemeState::default();
    let patch =
        parse_theme_document(r#"{"colors":null,"spacing":"wide","version":3}"#).unwrap();
    assert!(patch.is_empty());
    assert_eq!(patch.apply_to(&start), start);
}

#[test]
fn test_import_out_of_range_accepted_unless_clamped() {
    let patch = parse_theme_document(
        r#"{"typography":{"fontSize":"99px"},"spacing":{"borderRadius":"-4px","padding":"x"}}"#,
    )
    .unwrap();
    let raw = patch.apply_to(&ThemeState::default());
    assert_eq!(raw.font_size, PixelValue::px(99));
    assert_eq!(raw.border_radius, PixelValue::px(-4));

    let clamped = patch
        .clamped(&ControlRanges::default())
        .apply_to(&ThemeState::default());
    assert_eq!(clamped.font_size, PixelValue::px(24));
    assert_eq!(clamped.border_radius, PixelValue::px(0));
    assert!(clamped.padding.is_nan());
}
