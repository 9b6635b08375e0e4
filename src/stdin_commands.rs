//! Editor events read from stdin.
//!
//! The `session` command drives a headless editor from JSONL on stdin,
//! one `EditorEvent` per line. Used for automation and scripted tests.
//!
//! # Example Usage
//!
//! ```bash
//! printf '%s\n' \
//!   '{"type": "applyPreset", "name": "vibrant"}' \
//!   '{"type": "setHexText", "field": "accent", "text": "#ABCDEF"}' \
//!   '{"type": "export"}' | booxi-theme-editor session --out /tmp/themes
//! ```

use tracing::{debug, info, warn};

use crate::editor::EditorEvent;

/// Bounded so a fast producer cannot grow memory without limit
const CHANNEL_CAPACITY: usize = 100;

/// Parse one stdin line. Blank and malformed lines yield `None`.
pub fn parse_event_line(line: &str) -> Option<EditorEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    match serde_json::from_str::<EditorEvent>(line) {
        Ok(event) => {
            debug!(event = ?event, "Parsed stdin event");
            Some(event)
        }
        Err(e) => {
            warn!(error = %e, line = line, "Failed to parse stdin event");
            None
        }
    }
}

/// Start a thread that reads `EditorEvent`s from stdin.
///
/// The channel closes when stdin reaches EOF. The thread exits early if the
/// receiver is dropped.
pub fn start_stdin_listener() -> async_channel::Receiver<EditorEvent> {
    use std::io::BufRead;

    let (tx, rx) = async_channel::bounded(CHANNEL_CAPACITY);

    std::thread::spawn(move || {
        info!("Stdin event listener started");
        let stdin = std::io::stdin();
        let reader = stdin.lock();

        for line in reader.lines() {
            match line {
                Ok(line) => {
                    let Some(event) = parse_event_line(&line) else {
                        continue;
                    };
                    // send_blocking since we're in a sync thread
                    if tx.send_blocking(event).is_err() {
                        debug!("Event channel closed, exiting");
                        break;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Error reading stdin");
                    break;
                }
            }
        }
        info!("Stdin event listener exiting");
    });

    rx
}
