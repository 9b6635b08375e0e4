//! Structured JSONL logging plus human-readable stderr output.
//!
//! This module provides dual-output logging:
//! - **JSONL to file** (`<data dir>/booxi-theme-editor/logs/theme-editor.jsonl`)
//! - **Compact to stderr** - for developers running the editor session
//!
//! # Usage
//!
//! ```rust,ignore
//! use booxi_theme_editor::logging;
//!
//! // Initialize logging - MUST keep guard alive for duration of program
//! let _guard = logging::init();
//!
//! tracing::info!(event_type = "theme_export", filename = %name, "Theme exported");
//! ```
//!
//! # JSONL Output Format
//!
//! ```json
//! {"timestamp":"2024-12-25T10:30:45.123Z","level":"INFO","target":"booxi_theme_editor::editor::controller","fields":{"message":"Preset applied","event_type":"preset","preset":"vibrant"}}
//! ```

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_FILE_NAME: &str = "theme-editor.jsonl";

/// Guard that must be kept alive for the duration of the program.
/// Dropping this guard will flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Initialize the dual-output logging system.
///
/// Returns a guard that MUST be kept alive for the duration of the program.
/// If the log file cannot be opened, only the stderr layer is installed.
pub fn init() -> LoggingGuard {
    let log_path = log_path();
    if let Some(log_dir) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(log_dir) {
            eprintln!("[LOGGING] Failed to create log directory: {}", e);
        }
    }

    // Environment filter - default to info, allow override via RUST_LOG
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Non-blocking writer keeps event handling off the disk path
    let (json_writer, file_guard) = match open_log_file(&log_path) {
        Some(file) => {
            let (writer, guard) = tracing_appender::non_blocking(file);
            (Some(writer), Some(guard))
        }
        None => (None, None),
    };

    // Absent when the file could not be opened; stderr still works
    let json_layer = json_writer.map(|writer| {
        fmt::layer()
            .json()
            .with_writer(writer)
            .with_timer(fmt::time::UtcTime::rfc_3339())
            .with_target(true)
            .with_level(true)
            .with_thread_ids(false)
            .with_thread_names(false)
            .with_file(false)
            .with_line_number(false)
            .with_span_events(FmtSpan::NONE)
    });

    // Compact layer for stderr; stdout stays clean for CLI output
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::new(format_description!(
            "[hour]:[minute]:[second].[subsecond digits:3]"
        )))
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(stderr_layer)
        .init();

    tracing::info!(
        event_type = "app_lifecycle",
        action = "started",
        log_path = %log_path.display(),
        file_logging = file_guard.is_some(),
        "Theme editor logging initialized"
    );

    LoggingGuard {
        _file_guard: file_guard,
    }
}

/// Open the JSONL log for appending, or `None` if it cannot be written
fn open_log_file(path: &Path) -> Option<File> {
    match OpenOptions::new().create(true).append(true).open(path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("[LOGGING] Failed to open log file: {}", e);
            None
        }
    }
}

/// Get the log directory path (`<data dir>/booxi-theme-editor/logs`)
fn get_log_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|d| d.join("booxi-theme-editor").join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("booxi-theme-editor-logs"))
}

/// Get the path to the JSONL log file
pub fn log_path() -> PathBuf {
    get_log_dir().join(LOG_FILE_NAME)
}

/// Log a UI event with structured fields
pub fn log_ui_event(component: &str, action: &str, details: Option<&str>) {
    tracing::info!(
        event_type = "ui_event",
        component = component,
        action = action,
        details = details,
        "{} {}",
        component,
        action
    );
}

/// Log a keyboard event with structured fields
pub fn log_key_event(key: &str, modifiers: &str, action: &str) {
    tracing::debug!(
        event_type = "key_event",
        key = key,
        modifiers = modifiers,
        action = action,
        "Key {} {}",
        action,
        key
    );
}
