//! Keyboard shortcut parsing and matching.
//!
//! Bindings are written as strings (`"mod+e"`) where `mod` is the platform
//! accelerator: Command on macOS, Ctrl elsewhere, and either one is accepted
//! at match time.
//!
//! # Example
//!
//! ```ignore
//! use booxi_theme_editor::shortcuts::{KeyPress, Modifiers, Shortcut};
//!
//! let export = Shortcut::parse("mod+e")?;
//! assert!(export.matches(&KeyPress::new("e", Modifiers::ctrl())));
//! println!("Export: {}", export.display()); // ⌘E on macOS
//! ```

mod types;

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;

pub use types::{
    canonicalize_key, is_known_key, KeyPress, Modifiers, Platform, Shortcut, ShortcutParseError,
};
