//! Core shortcut types with proper error handling and platform-aware display.
//!
//! This module provides:
//! - `Shortcut` - A keyboard shortcut (modifiers + key)
//! - `Modifiers` - Modifier key flags (cmd, ctrl, alt, shift)
//! - `KeyPress` - A key event as delivered by the host page
//! - `ShortcutParseError` - Detailed parse errors for user feedback

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a shortcut string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutParseError {
    #[error("shortcut string is empty")]
    Empty,
    #[error("shortcut has no key, only modifiers")]
    MissingKey,
    #[error("unknown token '{0}' in shortcut")]
    UnknownToken(String),
    #[error("unknown key '{0}'")]
    UnknownKey(String),
}

/// Modifier keys for a shortcut or key press.
///
/// In a parsed `Shortcut`, `cmd` is the platform accelerator: it is satisfied
/// by either Command (⌘) or Ctrl on the key press, like `ctrlKey || metaKey`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub cmd: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Modifiers {
    pub fn cmd() -> Self {
        Self {
            cmd: true,
            ..Default::default()
        }
    }
    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Default::default()
        }
    }
    /// Build from modifier names as sent over JSONL (`["cmd", "shift"]`).
    /// Unknown names are ignored.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut modifiers = Self::default();
        for name in names {
            match name.as_ref().to_lowercase().as_str() {
                "cmd" | "command" | "meta" | "super" => modifiers.cmd = true,
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" | "opt" | "option" => modifiers.alt = true,
                "shift" => modifiers.shift = true,
                _ => {}
            }
        }
        modifiers
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<&str> = Vec::new();
        if self.cmd {
            parts.push("cmd");
        }
        if self.ctrl {
            parts.push("ctrl");
        }
        if self.alt {
            parts.push("alt");
        }
        if self.shift {
            parts.push("shift");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// Platform enum for display formatting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    MacOS,
    Windows,
    Linux,
}

impl Platform {
    pub fn current() -> Self {
        #[cfg(target_os = "macos")]
        {
            Platform::MacOS
        }
        #[cfg(target_os = "windows")]
        {
            Platform::Windows
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            Platform::Linux
        }
    }
}

/// A key event delivered by the host.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyPress {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// A keyboard shortcut consisting of modifier keys and a main key.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Shortcut {
    pub key: String,
    pub modifiers: Modifiers,
}

impl Shortcut {
    pub fn new(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: canonicalize_key(&key.into()),
            modifiers,
        }
    }

    pub fn parse(s: &str) -> Result<Self, ShortcutParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let normalized = s.replace('+', " ");
        let parts: Vec<&str> = normalized.split_whitespace().collect();
        if parts.is_empty() {
            return Err(ShortcutParseError::Empty);
        }

        let mut modifiers = Modifiers::default();
        let mut key_part: Option<&str> = None;

        for part in &parts {
            let part_lower = part.to_lowercase();
            match part_lower.as_str() {
                "cmd" | "command" | "meta" | "super" | "⌘" | "mod" => modifiers.cmd = true,
                "ctrl" | "control" | "ctl" | "^" => modifiers.ctrl = true,
                "alt" | "opt" | "option" | "⌥" => modifiers.alt = true,
                "shift" | "⇧" => modifiers.shift = true,
                _ => {
                    if key_part.is_some() {
                        return Err(ShortcutParseError::UnknownToken(part.to_string()));
                    }
                    key_part = Some(part);
                }
            }
        }

        let key = key_part.ok_or(ShortcutParseError::MissingKey)?;
        let canonical_key = canonicalize_key(key);
        if !is_known_key(&canonical_key) {
            return Err(ShortcutParseError::UnknownKey(key.to_string()));
        }

        Ok(Self {
            key: canonical_key,
            modifiers,
        })
    }

    /// Whether a key press triggers this shortcut.
    ///
    /// The accelerator (`cmd`) accepts Command or Ctrl. Shift and Alt must
    /// match exactly so that `Ctrl+Shift+E` does not fire `mod+e`.
    pub fn matches(&self, press: &KeyPress) -> bool {
        if canonicalize_key(&press.key) != self.key {
            return false;
        }
        let accelerator_held = press.modifiers.cmd || press.modifiers.ctrl;
        let accelerator_ok = if self.modifiers.cmd {
            accelerator_held
        } else {
            press.modifiers.cmd == self.modifiers.cmd && press.modifiers.ctrl == self.modifiers.ctrl
        };
        accelerator_ok
            && press.modifiers.alt == self.modifiers.alt
            && press.modifiers.shift == self.modifiers.shift
    }

    pub fn display(&self) -> String {
        self.display_for_platform(Platform::current())
    }

    pub fn display_for_platform(&self, platform: Platform) -> String {
        match platform {
            Platform::MacOS => {
                let mut s = String::new();
                if self.modifiers.ctrl {
                    s.push('⌃');
                }
                if self.modifiers.alt {
                    s.push('⌥');
                }
                if self.modifiers.shift {
                    s.push('⇧');
                }
                if self.modifiers.cmd {
                    s.push('⌘');
                }
                s.push_str(&self.key.to_uppercase());
                s
            }
            Platform::Windows | Platform::Linux => {
                let mut parts: Vec<String> = Vec::new();
                // The accelerator is Ctrl off macOS
                if self.modifiers.ctrl || self.modifiers.cmd {
                    parts.push("Ctrl".to_string());
                }
                if self.modifiers.alt {
                    parts.push("Alt".to_string());
                }
                if self.modifiers.shift {
                    parts.push("Shift".to_string());
                }
                parts.push(self.key.to_uppercase());
                parts.join("+")
            }
        }
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Canonicalize a key name to the internal standard form.
pub fn canonicalize_key(key: &str) -> String {
    let key_lower = key.to_lowercase();
    match key_lower.as_str() {
        "return" => "enter",
        "esc" => "escape",
        "del" => "delete",
        " " | "spacebar" => "space",
        _ => return key_lower,
    }
    .to_string()
}

/// Check if a key name is known/valid.
pub fn is_known_key(key: &str) -> bool {
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return c.is_ascii_alphanumeric();
    }
    matches!(
        key,
        "space" | "enter" | "tab" | "escape" | "backspace" | "delete"
    ) || key
        .strip_prefix('f')
        .and_then(|n| n.parse::<u8>().ok())
        .is_some_and(|n| (1..=12).contains(&n))
}
