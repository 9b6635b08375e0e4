//! Booxi Theme Editor - live theming for the booking widget
//!
//! This library provides a headless theme editor: a canonical theme state,
//! built-in presets, JSON export and lenient import, and a controller that
//! keeps the editing controls and a live preview in step with that state.
//! Rendering surfaces plug in through the `PreviewTarget` and `HostShell`
//! traits.

pub mod config;
pub mod editor;
pub mod error;
pub mod import_reader;
pub mod logging;
pub mod scheduler;
pub mod shortcuts;
pub mod stdin_commands;
pub mod theme;
