//! Default configuration values
//!
//! All constants used throughout the config module are defined here.

/// How long the export button shows its acknowledgment before reverting
pub const DEFAULT_ACK_DURATION_MS: u64 = 2000;

/// Default keyboard bindings (`mod` = Cmd on macOS, Ctrl elsewhere)
pub const DEFAULT_EXPORT_SHORTCUT: &str = "mod+e";
pub const DEFAULT_RESET_SHORTCUT: &str = "mod+r";

/// Imported numeric values are accepted as-is unless clamping is enabled
pub const DEFAULT_CLAMP_IMPORTED_VALUES: bool = false;

/// Slider ranges of the host page controls, in pixels
pub const DEFAULT_FONT_SIZE_RANGE: (i64, i64) = (12, 24);
pub const DEFAULT_BORDER_RADIUS_RANGE: (i64, i64) = (0, 24);
pub const DEFAULT_PADDING_RANGE: (i64, i64) = (8, 32);

/// Prefix of exported theme filenames; the epoch-ms stamp and `.json` follow
pub const EXPORT_FILENAME_PREFIX: &str = "booxi-theme-";

/// Name of the config file inside the app's config directory
pub const CONFIG_FILE_NAME: &str = "config.json";
pub const APP_DIR_NAME: &str = "booxi-theme-editor";
