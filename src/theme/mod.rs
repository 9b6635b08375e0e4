//! Theme module - the booking widget's editable style parameters
//!
//! This module provides functionality for:
//! - Validated `#RRGGBB` colors that keep their original case
//! - The canonical `ThemeState` record
//! - Built-in presets
//! - Exported theme documents and lenient import parsing
//!
//! # Module Structure
//!
//! - `hex_color` - Hex color parsing and serialization
//! - `types` - ThemeState and field enums
//! - `presets` - default / modern / classic / vibrant
//! - `document` - export projection, import patching

pub mod document;
pub mod hex_color;
mod presets;
mod types;

pub use document::{
    export_filename, format_timestamp, parse_theme_document, ThemeDocument, ThemePatch,
};
pub use hex_color::{is_valid_hex, HexColor, InvalidHexColor};
pub use presets::{default_preset, find_preset, Preset, DEFAULT_PRESET, PRESETS};
pub use types::{ColorField, NumericField, PixelValue, ThemeState};

#[cfg(test)]
pub use document::{parse_leading_int, pixel_from_json};

#[cfg(test)]
#[path = "theme_tests.rs"]
mod tests;
