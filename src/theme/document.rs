//! Exported theme document and import parsing.
//!
//! Export is a strict projection of `ThemeState`. Import is deliberately
//! loose: groups are optional, sub-fields may be missing or mistyped, and
//! only malformed JSON is treated as an error.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::hex_color::HexColor;
use super::types::{ColorField, NumericField, PixelValue, ThemeState};
use crate::config::{ControlRanges, EXPORT_FILENAME_PREFIX};
use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorsGroup {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TypographyGroup {
    pub font_family: String,
    pub font_size: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacingGroup {
    pub border_radius: String,
    pub padding: String,
}

/// The downloadable JSON projection of a theme
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub colors: ColorsGroup,
    pub typography: TypographyGroup,
    pub spacing: SpacingGroup,
    pub timestamp: String,
}

impl ThemeDocument {
    pub fn from_state(state: &ThemeState, now: DateTime<Utc>) -> Self {
        ThemeDocument {
            colors: ColorsGroup {
                primary: state.primary_color.to_string(),
                secondary: state.secondary_color.to_string(),
                accent: state.accent_color.to_string(),
            },
            typography: TypographyGroup {
                font_family: state.font_family.clone(),
                font_size: state.font_size.to_string(),
            },
            spacing: SpacingGroup {
                border_radius: state.border_radius.to_string(),
                padding: state.padding.to_string(),
            },
            timestamp: format_timestamp(now),
        }
    }

    /// Pretty JSON with 2-space indentation
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// ISO-8601 UTC with milliseconds, e.g. `2024-05-01T12:00:00.000Z`
pub fn format_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// `booxi-theme-<epoch ms>.json`
pub fn export_filename(now: DateTime<Utc>) -> String {
    format!("{}{}.json", EXPORT_FILENAME_PREFIX, now.timestamp_millis())
}

// ============================================
// IMPORT
// ============================================

/// Recognized contents of the `colors` group. `None` leaves the field as is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorsPatch {
    pub primary: Option<HexColor>,
    pub secondary: Option<HexColor>,
    pub accent: Option<HexColor>,
}

impl ColorsPatch {
    fn get(&self, field: ColorField) -> Option<&HexColor> {
        match field {
            ColorField::Primary => self.primary.as_ref(),
            ColorField::Secondary => self.secondary.as_ref(),
            ColorField::Accent => self.accent.as_ref(),
        }
    }
}

/// `typography` group. The size is always parsed when the group is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypographyPatch {
    pub font_family: Option<String>,
    pub font_size: PixelValue,
}

/// `spacing` group. Both values are always parsed when the group is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpacingPatch {
    pub border_radius: PixelValue,
    pub padding: PixelValue,
}

/// What an imported document changes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemePatch {
    pub colors: Option<ColorsPatch>,
    pub typography: Option<TypographyPatch>,
    pub spacing: Option<SpacingPatch>,
}

impl ThemePatch {
    /// Build the next state: fields the patch does not name keep their values.
    pub fn apply_to(&self, state: &ThemeState) -> ThemeState {
        let mut next = state.clone();
        if let Some(colors) = &self.colors {
            for field in ColorField::ALL {
                if let Some(color) = colors.get(field) {
                    next = next.with_color(field, color.clone());
                }
            }
        }
        if let Some(typography) = &self.typography {
            if let Some(family) = &typography.font_family {
                next = next.with_font_family(family.clone());
            }
            next = next.with_numeric(NumericField::FontSize, typography.font_size);
        }
        if let Some(spacing) = &self.spacing {
            next = next
                .with_numeric(NumericField::BorderRadius, spacing.border_radius)
                .with_numeric(NumericField::Padding, spacing.padding);
        }
        next
    }

    /// Pull numeric values into the control ranges. NaN stays NaN.
    pub fn clamped(mut self, ranges: &ControlRanges) -> Self {
        if let Some(typography) = self.typography.as_mut() {
            let range = ranges.for_field(NumericField::FontSize);
            typography.font_size = typography.font_size.map(|v| range.clamp(v));
        }
        if let Some(spacing) = self.spacing.as_mut() {
            let radius = ranges.for_field(NumericField::BorderRadius);
            let padding = ranges.for_field(NumericField::Padding);
            spacing.border_radius = spacing.border_radius.map(|v| radius.clamp(v));
            spacing.padding = spacing.padding.map(|v| padding.clamp(v));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_none() && self.typography.is_none() && self.spacing.is_none()
    }
}

/// Parse an imported theme file.
///
/// Fails only when `text` is not valid JSON. A valid document that is not
/// an object, or lacks every group, yields an empty patch.
pub fn parse_theme_document(text: &str) -> Result<ThemePatch> {
    let value: Value = serde_json::from_str(text)?;
    let Some(root) = value.as_object() else {
        debug!("Imported theme is not an object, nothing to apply");
        return Ok(ThemePatch::default());
    };

    let colors = group(root, "colors").map(|g| ColorsPatch {
        primary: color_field(g, ColorField::Primary),
        secondary: color_field(g, ColorField::Secondary),
        accent: color_field(g, ColorField::Accent),
    });

    let typography = group(root, "typography").map(|g| TypographyPatch {
        font_family: g
            .get("fontFamily")
            .and_then(Value::as_str)
            .map(str::to_string),
        font_size: pixel_field(g, NumericField::FontSize),
    });

    let spacing = group(root, "spacing").map(|g| SpacingPatch {
        border_radius: pixel_field(g, NumericField::BorderRadius),
        padding: pixel_field(g, NumericField::Padding),
    });

    Ok(ThemePatch {
        colors,
        typography,
        spacing,
    })
}

fn group<'a>(root: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    match root.get(key) {
        Some(Value::Object(map)) => Some(map),
        Some(Value::Null) | None => None,
        Some(other) => {
            debug!(group = key, value = %other, "Ignoring non-object theme group");
            None
        }
    }
}

fn color_field(group: &Map<String, Value>, field: ColorField) -> Option<HexColor> {
    let raw = group.get(field.key())?;
    let parsed = raw.as_str().map(HexColor::parse);
    match parsed {
        Some(Ok(color)) => Some(color),
        _ => {
            warn!(field = %field, value = %raw, "Ignoring invalid imported color");
            None
        }
    }
}

fn pixel_field(group: &Map<String, Value>, field: NumericField) -> PixelValue {
    let value = pixel_from_json(group.get(field.key()));
    if value.is_nan() {
        debug!(field = %field, "Imported value is not a number");
    }
    value
}

/// Leading-integer conversion applied to imported sizes.
///
/// Strings yield their leading integer (`"16px"` → 16). Numbers go through
/// their shortest text form first, so `16.7` → 16 and `1e21` → 1.
/// Everything else is NaN.
pub fn pixel_from_json(value: Option<&Value>) -> PixelValue {
    match value {
        Some(Value::String(s)) => parse_leading_int(s).map_or(PixelValue::NAN, PixelValue::px),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) => PixelValue::px(v),
            None => n
                .as_f64()
                .filter(|f| f.is_finite())
                .and_then(leading_int_of_float)
                .map_or(PixelValue::NAN, PixelValue::px),
        },
        _ => PixelValue::NAN,
    }
}

/// Very large and very small magnitudes print in exponent form
/// (`1e21`, `1e-7`), where only the mantissa's integer part counts.
fn leading_int_of_float(value: f64) -> Option<i64> {
    let magnitude = value.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        parse_leading_int(&format!("{:e}", value))
    } else {
        // `as` saturates at the i64 bounds
        Some(value.trunc() as i64)
    }
}

/// Parse the integer prefix of `text`: optional whitespace, optional sign,
/// then decimal digits, or hex digits after a `0x` prefix. Digit runs too
/// long for `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let (radix, digits) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let end = digits
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let magnitude = digits[..end]
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0i64, |acc, d| {
            acc.saturating_mul(i64::from(radix))
                .saturating_add(i64::from(d))
        });
    Some(if negative { magnitude.saturating_neg() } else { magnitude })
}
