//! Color value parsing and canonical formatting.
//!
//! Supports:
//!
//! - Named colors: `red`, `blue`, `clear`, etc. (case-insensitive)
//! - Hex: `#rgb`, `#rrggbb`, `#rrggbbaa` (case-insensitive)
//!
//! Missing alpha means fully opaque. Formatting is always `#RRGGBBAA` in
//! uppercase, so every color has exactly one serialized form.
//!
//! # Example
//!
//! ```rust
//! use viewcss::style::Color;
//!
//! let blue = Color::parse("blue").unwrap();
//! assert_eq!(blue.to_css(), "#0000FFFF");
//!
//! let translucent = Color::parse("#ff000080").unwrap();
//! assert_eq!(translucent.a, 0x80);
//! assert_eq!(Color::parse(&translucent.to_css()).unwrap(), translucent);
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::error::ValueError;

/// An 8-bit-per-channel RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Named colors, matching the platform's predefined color constants.
const NAMED_COLORS: &[(&str, Color)] = &[
    ("black", Color::rgb(0x00, 0x00, 0x00)),
    ("darkgray", Color::rgb(0x55, 0x55, 0x55)),
    ("lightgray", Color::rgb(0xAA, 0xAA, 0xAA)),
    ("white", Color::rgb(0xFF, 0xFF, 0xFF)),
    ("gray", Color::rgb(0x80, 0x80, 0x80)),
    ("red", Color::rgb(0xFF, 0x00, 0x00)),
    ("green", Color::rgb(0x00, 0xFF, 0x00)),
    ("blue", Color::rgb(0x00, 0x00, 0xFF)),
    ("cyan", Color::rgb(0x00, 0xFF, 0xFF)),
    ("yellow", Color::rgb(0xFF, 0xFF, 0x00)),
    ("magenta", Color::rgb(0xFF, 0x00, 0xFF)),
    ("orange", Color::rgb(0xFF, 0x80, 0x00)),
    ("purple", Color::rgb(0x80, 0x00, 0x80)),
    ("brown", Color::rgb(0x99, 0x66, 0x33)),
    ("clear", Color::TRANSPARENT),
    ("transparent", Color::TRANSPARENT),
];

impl Color {
    /// Fully transparent black.
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    /// An opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parses a named or hex color literal.
    ///
    /// # Errors
    ///
    /// [`ValueError::InvalidColor`] for unknown names, non-hex digits, or a
    /// hex length other than 3, 6 or 8.
    pub fn parse(s: &str) -> Result<Self, ValueError> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex).ok_or_else(|| ValueError::InvalidColor(s.to_string()));
        }

        Self::parse_named(s)
    }

    /// Parses a hex color code (without the # prefix).
    fn parse_hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();

        match hex.len() {
            // #rgb -> #rrggbb
            3 => {
                let short = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|v| v * 17);
                Some(Color::rgb(short(0)?, short(1)?, short(2)?))
            }
            6 => Some(Color::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Some(Color::rgba(
                channel(0)?,
                channel(2)?,
                channel(4)?,
                channel(6)?,
            )),
            _ => None,
        }
    }

    fn parse_named(name: &str) -> Result<Self, ValueError> {
        NAMED_COLORS
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, color)| *color)
            .ok_or_else(|| ValueError::InvalidColor(name.to_string()))
    }

    /// Canonical `#RRGGBBAA` form.
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha(&self) -> f64 {
        f64::from(self.a) / 255.0
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{:02X}{:02X}{:02X}{:02X}",
            self.r, self.g, self.b, self.a
        )
    }
}

impl FromStr for Color {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Color::parse(&s).map_err(serde::de::Error::custom)
    }
}
