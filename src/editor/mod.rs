//! Editor module - the interactive theme editing session
//!
//! # Module Structure
//!
//! - `controls` - View model of swatches, hex fields, sliders and the export button
//! - `preview` - `PreviewTarget` trait and the in-memory `StyleMap`
//! - `host` - `HostShell` trait for alerts and downloads
//! - `events` - User events, also the JSONL session protocol
//! - `controller` - `ThemeController`, which ties them together

mod controller;
mod controls;
mod events;
mod host;
mod preview;

pub use controller::{
    EventOutcome, ImportTicket, KeyHandling, PendingImport, ThemeController, JSON_CONTENT_TYPE,
};
pub use controls::{ColorControl, ControlPanel, SliderControl, EXPORT_ACK_LABEL, EXPORT_LABEL};
pub use events::{DroppedFile, EditorEvent};
pub use host::{FsHost, HostShell, RecordingHost};
pub use preview::{
    theme_properties, PreviewTarget, StyleMap, ACCENT_PROPERTY, DARK_MODE_CLASS, DRAG_OPACITY,
    FONT_FAMILY_PROPERTY, FONT_SIZE_PROPERTY, PADDING_PROPERTY, PRIMARY_PROPERTY,
    RADIUS_PROPERTY, SECONDARY_PROPERTY,
};
