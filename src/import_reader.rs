//! Background reads of dropped theme files.
//!
//! `ThemeController::drop_files` hands out a `PendingImport`; the file is
//! read off the event loop and the result comes back over a channel to be
//! passed to `ThemeController::complete_import`.

use std::thread::JoinHandle;
use tracing::{debug, instrument};

use crate::editor::{ImportTicket, PendingImport};
use crate::error::{Result, ThemeEditorError};

/// Outcome of one background read
#[derive(Debug)]
pub struct ImportRead {
    pub ticket: ImportTicket,
    pub result: Result<String>,
}

/// Only one import is in flight at a time, so a small buffer suffices
pub fn read_channel() -> (
    async_channel::Sender<ImportRead>,
    async_channel::Receiver<ImportRead>,
) {
    async_channel::bounded(4)
}

/// Read the pending file on a new thread and send the result to `tx`
pub fn spawn_read(pending: PendingImport, tx: async_channel::Sender<ImportRead>) -> JoinHandle<()> {
    std::thread::spawn(move || {
        let result = read_file(&pending);
        if tx
            .send_blocking(ImportRead {
                ticket: pending.ticket,
                result,
            })
            .is_err()
        {
            debug!(file = %pending.file.name, "Import channel closed, result dropped");
        }
    })
}

#[instrument(skip_all, fields(file = %pending.file.name))]
fn read_file(pending: &PendingImport) -> Result<String> {
    let text = std::fs::read_to_string(&pending.file.path).map_err(|source| ThemeEditorError::Io {
        path: pending.file.path.display().to_string(),
        source,
    })?;
    debug!(bytes = text.len(), "Theme file read");
    Ok(text)
}
