use thiserror::Error;
use tracing::{error, warn};

/// Error severity for UI display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,     // logged only
    Warning,  // recoverable
    Error,    // operation failed
    Critical, // blocking alert - requires user acknowledgment
}

/// Domain-specific errors for the theme editor
#[derive(Error, Debug)]
pub enum ThemeEditorError {
    #[error("Failed to parse theme document: {0}")]
    ImportParse(#[from] serde_json::Error),

    #[error("I/O failed for '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid shortcut '{binding}': {source}")]
    Shortcut {
        binding: String,
        #[source]
        source: crate::shortcuts::ShortcutParseError,
    },

    #[error("Download of '{filename}' failed: {reason}")]
    Download { filename: String, reason: String },
}

impl ThemeEditorError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ImportParse(_) => ErrorSeverity::Critical,
            Self::Io { .. } => ErrorSeverity::Error,
            Self::Config(_) => ErrorSeverity::Warning,
            Self::Shortcut { .. } => ErrorSeverity::Warning,
            Self::Download { .. } => ErrorSeverity::Error,
        }
    }

    pub fn user_message(&self) -> String {
        match self {
            Self::ImportParse(_) => "Invalid theme file".to_string(),
            Self::Io { path, .. } => format!("Could not access {}", path),
            Self::Config(msg) => format!("Configuration issue: {}", msg),
            Self::Shortcut { binding, .. } => format!("Unrecognized shortcut: {}", binding),
            Self::Download { filename, .. } => format!("Could not save {}", filename),
        }
    }
}

pub type Result<T> = std::result::Result<T, ThemeEditorError>;

/// Extension trait for silent error logging with caller location tracking.
/// Use when the operation is recoverable and the user doesn't need to know.
///
/// # Examples
///
/// ```ignore
/// use booxi_theme_editor::error::ResultExt;
///
/// // Log and continue if the download sink rejects the file
/// host.download(&name, &json).log_err();
/// ```
pub trait ResultExt<T> {
    /// Log error with caller location and return None. Use for recoverable failures.
    fn log_err(self) -> Option<T>;
    /// Log as warning with caller location and return None. Use for expected failures.
    fn warn_on_err(self) -> Option<T>;
}

impl<T, E: std::fmt::Debug> ResultExt<T> for std::result::Result<T, E> {
    #[track_caller]
    fn log_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                error!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation failed"
                );
                None
            }
        }
    }

    #[track_caller]
    fn warn_on_err(self) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                let caller = std::panic::Location::caller();
                warn!(
                    error = ?error,
                    file = caller.file(),
                    line = caller.line(),
                    "Operation had warning"
                );
                None
            }
        }
    }
}
