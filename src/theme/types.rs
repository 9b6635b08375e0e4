//! Theme state definitions
//!
//! - `ColorField` / `NumericField` - addressable fields of the theme
//! - `PixelValue` - integer pixel size, or the not-a-number marker an
//!   unparseable import leaves behind
//! - `ThemeState` - the canonical, immutable-per-update theme record

use serde::{Deserialize, Serialize};
use std::fmt;

use super::hex_color::HexColor;
use super::presets::default_preset;

/// One of the three theme colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorField {
    Primary,
    Secondary,
    Accent,
}

impl ColorField {
    pub const ALL: [ColorField; 3] = [ColorField::Primary, ColorField::Secondary, ColorField::Accent];

    /// Key used in the exported `colors` group
    pub fn key(self) -> &'static str {
        match self {
            ColorField::Primary => "primary",
            ColorField::Secondary => "secondary",
            ColorField::Accent => "accent",
        }
    }
}

impl fmt::Display for ColorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// One of the three slider-backed pixel values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NumericField {
    FontSize,
    BorderRadius,
    Padding,
}

impl NumericField {
    pub const ALL: [NumericField; 3] = [
        NumericField::FontSize,
        NumericField::BorderRadius,
        NumericField::Padding,
    ];

    /// Key used in the exported `typography` / `spacing` groups
    pub fn key(self) -> &'static str {
        match self {
            NumericField::FontSize => "fontSize",
            NumericField::BorderRadius => "borderRadius",
            NumericField::Padding => "padding",
        }
    }
}

impl fmt::Display for NumericField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A pixel size. `None` is the "not a number" state: it is displayed as
/// `NaN` and projected as `NaNpx`, matching what the page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelValue(Option<i64>);

impl PixelValue {
    pub const NAN: PixelValue = PixelValue(None);

    pub const fn px(value: i64) -> Self {
        PixelValue(Some(value))
    }

    pub fn get(self) -> Option<i64> {
        self.0
    }

    pub fn is_nan(self) -> bool {
        self.0.is_none()
    }

    /// Raw slider value (`"16"` or `"NaN"`)
    pub fn control_text(self) -> String {
        match self.0 {
            Some(v) => v.to_string(),
            None => "NaN".to_string(),
        }
    }

    pub fn map(self, f: impl FnOnce(i64) -> i64) -> Self {
        PixelValue(self.0.map(f))
    }
}

/// Renders with the `px` suffix used by readouts, effects and exports.
impl fmt::Display for PixelValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}px", self.control_text())
    }
}

impl From<i64> for PixelValue {
    fn from(value: i64) -> Self {
        PixelValue::px(value)
    }
}

/// Canonical theme record. Handlers never mutate it in place; they build a
/// new value with the `with_*` methods and hand it to the controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeState {
    pub primary_color: HexColor,
    pub secondary_color: HexColor,
    pub accent_color: HexColor,
    pub font_family: String,
    pub font_size: PixelValue,
    pub border_radius: PixelValue,
    pub padding: PixelValue,
}

impl ThemeState {
    pub fn color(&self, field: ColorField) -> &HexColor {
        match field {
            ColorField::Primary => &self.primary_color,
            ColorField::Secondary => &self.secondary_color,
            ColorField::Accent => &self.accent_color,
        }
    }

    pub fn numeric(&self, field: NumericField) -> PixelValue {
        match field {
            NumericField::FontSize => self.font_size,
            NumericField::BorderRadius => self.border_radius,
            NumericField::Padding => self.padding,
        }
    }

    pub fn with_color(&self, field: ColorField, color: HexColor) -> Self {
        let mut next = self.clone();
        match field {
            ColorField::Primary => next.primary_color = color,
            ColorField::Secondary => next.secondary_color = color,
            ColorField::Accent => next.accent_color = color,
        }
        next
    }

    pub fn with_font_family(&self, font_family: impl Into<String>) -> Self {
        ThemeState {
            font_family: font_family.into(),
            ..self.clone()
        }
    }

    pub fn with_numeric(&self, field: NumericField, value: PixelValue) -> Self {
        let mut next = self.clone();
        match field {
            NumericField::FontSize => next.font_size = value,
            NumericField::BorderRadius => next.border_radius = value,
            NumericField::Padding => next.padding = value,
        }
        next
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        default_preset().to_state()
    }
}
