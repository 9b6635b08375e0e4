//! Built-in theme presets.
//!
//! Four fixed starting points:
//! - default (also the reset target)
//! - modern
//! - classic
//! - vibrant

use super::hex_color::HexColor;
use super::types::{PixelValue, ThemeState};

/// Name of the preset used at startup and by reset
pub const DEFAULT_PRESET: &str = "default";

/// A named, immutable bundle of theme values
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub font_family: &'static str,
    pub font_size: i64,
    pub border_radius: i64,
    pub padding: i64,
}

pub static PRESETS: [Preset; 4] = [
    Preset {
        name: "default",
        primary: "#4f60ff",
        secondary: "#8b5cf6",
        accent: "#10b981",
        font_family: "Inter",
        font_size: 16,
        border_radius: 8,
        padding: 16,
    },
    Preset {
        name: "modern",
        primary: "#6366f1",
        secondary: "#8b5cf6",
        accent: "#06b6d4",
        font_family: "Inter",
        font_size: 15,
        border_radius: 16,
        padding: 20,
    },
    Preset {
        name: "classic",
        primary: "#2563eb",
        secondary: "#7c3aed",
        accent: "#059669",
        font_family: "Arial",
        font_size: 16,
        border_radius: 4,
        padding: 14,
    },
    Preset {
        name: "vibrant",
        primary: "#dc2626",
        secondary: "#d946ef",
        accent: "#f59e0b",
        font_family: "Poppins",
        font_size: 17,
        border_radius: 12,
        padding: 18,
    },
];

impl Preset {
    pub fn to_state(&self) -> ThemeState {
        ThemeState {
            primary_color: HexColor::from_literal(self.primary),
            secondary_color: HexColor::from_literal(self.secondary),
            accent_color: HexColor::from_literal(self.accent),
            font_family: self.font_family.to_string(),
            font_size: PixelValue::px(self.font_size),
            border_radius: PixelValue::px(self.border_radius),
            padding: PixelValue::px(self.padding),
        }
    }
}

/// Look up a built-in preset by exact name
pub fn find_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.name == name)
}

pub fn default_preset() -> &'static Preset {
    &PRESETS[0]
}
