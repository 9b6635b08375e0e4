//! Configuration type definitions

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use super::defaults::*;
use crate::error::{Result, ThemeEditorError};
use crate::shortcuts::Shortcut;
use crate::theme::NumericField;

// ============================================
// CONTROL RANGES
// ============================================

/// Inclusive min/max of a slider control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlRange {
    pub min: i64,
    pub max: i64,
}

impl ControlRange {
    pub const fn new(min: i64, max: i64) -> Self {
        ControlRange { min, max }
    }

    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max.max(self.min))
    }
}

/// Slider ranges for the three numeric controls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ControlRanges {
    #[serde(default = "default_font_size_range")]
    pub font_size: ControlRange,
    #[serde(default = "default_border_radius_range")]
    pub border_radius: ControlRange,
    #[serde(default = "default_padding_range")]
    pub padding: ControlRange,
}

fn default_font_size_range() -> ControlRange {
    ControlRange::new(DEFAULT_FONT_SIZE_RANGE.0, DEFAULT_FONT_SIZE_RANGE.1)
}
fn default_border_radius_range() -> ControlRange {
    ControlRange::new(DEFAULT_BORDER_RADIUS_RANGE.0, DEFAULT_BORDER_RADIUS_RANGE.1)
}
fn default_padding_range() -> ControlRange {
    ControlRange::new(DEFAULT_PADDING_RANGE.0, DEFAULT_PADDING_RANGE.1)
}

impl ControlRanges {
    pub fn for_field(&self, field: NumericField) -> ControlRange {
        match field {
            NumericField::FontSize => self.font_size,
            NumericField::BorderRadius => self.border_radius,
            NumericField::Padding => self.padding,
        }
    }
}

impl Default for ControlRanges {
    fn default() -> Self {
        ControlRanges {
            font_size: default_font_size_range(),
            border_radius: default_border_radius_range(),
            padding: default_padding_range(),
        }
    }
}

// ============================================
// EDITOR CONFIG
// ============================================

/// Theme editor settings, read from `config.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorConfig {
    /// Export acknowledgment duration in milliseconds (default: 2000)
    #[serde(default = "default_ack_duration_ms")]
    pub ack_duration_ms: u64,
    /// Binding that triggers export (default: "mod+e")
    #[serde(default = "default_export_shortcut")]
    pub export_shortcut: String,
    /// Binding that resets to the default preset (default: "mod+r")
    #[serde(default = "default_reset_shortcut")]
    pub reset_shortcut: String,
    /// Directory downloads are written to (default: the user's download dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
    /// Clamp out-of-range imported numbers to the control ranges (default: false)
    #[serde(default = "default_clamp_imported_values")]
    pub clamp_imported_values: bool,
    #[serde(default)]
    pub control_ranges: ControlRanges,
}

fn default_ack_duration_ms() -> u64 {
    DEFAULT_ACK_DURATION_MS
}
fn default_export_shortcut() -> String {
    DEFAULT_EXPORT_SHORTCUT.to_string()
}
fn default_reset_shortcut() -> String {
    DEFAULT_RESET_SHORTCUT.to_string()
}
fn default_clamp_imported_values() -> bool {
    DEFAULT_CLAMP_IMPORTED_VALUES
}

impl Default for EditorConfig {
    fn default() -> Self {
        EditorConfig {
            ack_duration_ms: DEFAULT_ACK_DURATION_MS,
            export_shortcut: default_export_shortcut(),
            reset_shortcut: default_reset_shortcut(),
            export_dir: None,
            clamp_imported_values: DEFAULT_CLAMP_IMPORTED_VALUES,
            control_ranges: ControlRanges::default(),
        }
    }
}

impl EditorConfig {
    pub fn ack_duration(&self) -> Duration {
        Duration::from_millis(self.ack_duration_ms)
    }

    pub fn export_shortcut(&self) -> Result<Shortcut> {
        parse_binding(&self.export_shortcut)
    }

    pub fn reset_shortcut(&self) -> Result<Shortcut> {
        parse_binding(&self.reset_shortcut)
    }

    /// Where downloads land: the configured dir, else the user's download dir,
    /// else the working directory.
    pub fn resolved_export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn parse_binding(binding: &str) -> Result<Shortcut> {
    Shortcut::parse(binding).map_err(|source| ThemeEditorError::Shortcut {
        binding: binding.to_string(),
        source,
    })
}
