//! Host shell: the page-level services the editor calls out to.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::error::{Result, ThemeEditorError};

/// Blocking alerts and client-side downloads
pub trait HostShell {
    /// Show a blocking, user-facing message
    fn alert(&mut self, message: &str);
    /// Offer `contents` to the user as a file named `filename`
    fn download(&mut self, filename: &str, contents: &str) -> Result<()>;
}

/// Keeps every alert and download in memory
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub alerts: Vec<String>,
    pub downloads: Vec<(String, String)>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_download(&self) -> Option<&(String, String)> {
        self.downloads.last()
    }
}

impl HostShell for RecordingHost {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }

    fn download(&mut self, filename: &str, contents: &str) -> Result<()> {
        self.downloads
            .push((filename.to_string(), contents.to_string()));
        Ok(())
    }
}

/// Writes downloads into a directory and reports alerts on stderr
#[derive(Debug, Clone)]
pub struct FsHost {
    dir: PathBuf,
    saved: Vec<PathBuf>,
}

impl FsHost {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FsHost {
            dir: dir.into(),
            saved: Vec::new(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Paths written so far, oldest first
    pub fn saved(&self) -> &[PathBuf] {
        &self.saved
    }
}

impl HostShell for FsHost {
    fn alert(&mut self, message: &str) {
        warn!(event_type = "alert", message = message, "Alert shown");
        eprintln!("[ALERT] {}", message);
    }

    fn download(&mut self, filename: &str, contents: &str) -> Result<()> {
        let io_err = |source| ThemeEditorError::Io {
            path: self.dir.display().to_string(),
            source,
        };
        fs::create_dir_all(&self.dir).map_err(io_err)?;

        let path = self.dir.join(filename);
        fs::write(&path, contents).map_err(|e| ThemeEditorError::Download {
            filename: filename.to_string(),
            reason: e.to_string(),
        })?;
        info!(path = %path.display(), bytes = contents.len(), "Theme file saved");
        self.saved.push(path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_host_keeps_order() {
        let mut host = RecordingHost::new();
        host.download("a.json", "{}").unwrap();
        host.download("b.json", "[]").unwrap();
        host.alert("Invalid theme file");
        assert_eq!(host.downloads.len(), 2);
        assert_eq!(host.last_download().unwrap().0, "b.json");
        assert_eq!(host.alerts, vec!["Invalid theme file"]);
    }

    #[test]
    fn test_fs_host_writes_into_nested_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("exports");
        let mut host = FsHost::new(&dir);
        host.download("booxi-theme-1.json", "{\"x\":1}").unwrap();

        let saved = &host.saved()[0];
        assert_eq!(saved, &dir.join("booxi-theme-1.json"));
        assert_eq!(fs::read_to_string(saved).unwrap(), "{\"x\":1}");
    }
}
