//! Configuration module - Editor settings
//!
//! This module provides functionality for:
//! - Loading configuration from `<config dir>/booxi-theme-editor/config.json`
//! - Default values for all settings
//! - Type definitions for config structures
//!
//! # Module Structure
//!
//! - `defaults` - All default constant values
//! - `types` - Configuration struct definitions (EditorConfig, ControlRanges)
//! - `loader` - File system loading and parsing

mod defaults;
mod loader;
mod types;

pub use defaults::{DEFAULT_ACK_DURATION_MS, EXPORT_FILENAME_PREFIX};

pub use types::{ControlRange, ControlRanges, EditorConfig};

pub use loader::{default_config_path, load_config, load_config_from, try_load_config_from};

#[cfg(test)]
pub use defaults::{DEFAULT_EXPORT_SHORTCUT, DEFAULT_RESET_SHORTCUT};

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
