//! Hex color parsing and serialization
//!
//! Colors are kept as the exact text the user or file supplied. Validation
//! is `^#[0-9A-Fa-f]{6}$`; case is never normalized.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;
use thiserror::Error;

static HEX_PATTERN: OnceLock<Regex> = OnceLock::new();

fn hex_pattern() -> &'static Regex {
    HEX_PATTERN.get_or_init(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("Invalid regex"))
}

/// Whether `text` is a `#` followed by exactly six hex digits.
pub fn is_valid_hex(text: &str) -> bool {
    hex_pattern().is_match(text)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{0}' is not a #RRGGBB color")]
pub struct InvalidHexColor(pub String);

/// A validated `#RRGGBB` color, stored as given
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn parse(text: &str) -> Result<Self, InvalidHexColor> {
        if is_valid_hex(text) {
            Ok(HexColor(text.to_string()))
        } else {
            Err(InvalidHexColor(text.to_string()))
        }
    }

    /// For compile-time literals that are checked by the preset tests.
    pub(crate) fn from_literal(text: &'static str) -> Self {
        debug_assert!(is_valid_hex(text), "bad color literal {}", text);
        HexColor(text.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = InvalidHexColor;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if is_valid_hex(&value) {
            Ok(HexColor(value))
        } else {
            Err(InvalidHexColor(value))
        }
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

impl AsRef<str> for HexColor {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
