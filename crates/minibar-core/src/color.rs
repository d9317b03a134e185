// File: crates/minibar-core/src/color.rs
// Summary: RGB color type, hex parsing, and per-series fallback colors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `rrggbb`, with one optional leading `#`.
    pub fn from_hex(hex: &str) -> ChartResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ChartError::InvalidColor(hex.to_string()));
        }
        let channel = |i: usize| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| ChartError::InvalidColor(hex.to_string()))
        };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?))
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Which series renderer a color is meant for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    #[default]
    Line,
    Bar,
}

impl SeriesKind {
    pub const fn fallback_color(self) -> Rgb {
        match self {
            SeriesKind::Line => Rgb::RED,
            SeriesKind::Bar => Rgb::GREEN,
        }
    }
}

/// Parse `hex`, or fall back to the series kind's default when it is malformed.
pub fn resolve_series_color(hex: &str, kind: SeriesKind) -> Rgb {
    resolve_color_or(hex, kind.fallback_color())
}

/// Parse `hex`, substituting `fallback` for malformed input. Never fails.
pub fn resolve_color_or(hex: &str, fallback: Rgb) -> Rgb {
    match Rgb::from_hex(hex) {
        Ok(c) => c,
        Err(err) => {
            tracing::debug!(%err, %fallback, "using fallback series color");
            fallback
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_with_and_without_hash() {
        assert_eq!(Rgb::from_hex("#ff8000").unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(Rgb::from_hex("0A0b0C").unwrap(), Rgb::new(10, 11, 12));
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        for bad in ["", "#", "fff", "#ff00000", "notacolor", "gg0000", "##ff0000", "+f0000"] {
            assert!(matches!(Rgb::from_hex(bad), Err(ChartError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn multibyte_input_is_rejected_not_panicking() {
        assert!(Rgb::from_hex("ééé").is_err());
    }

    #[test]
    fn fallback_per_kind() {
        assert_eq!(resolve_series_color("notacolor", SeriesKind::Line), Rgb::RED);
        assert_eq!(resolve_series_color("notacolor", SeriesKind::Bar), Rgb::GREEN);
        assert_eq!(resolve_series_color("#123456", SeriesKind::Bar), Rgb::new(0x12, 0x34, 0x56));
    }

    #[test]
    fn hex_display() {
        assert_eq!(Rgb::new(1, 2, 255).to_string(), "#0102ff");
    }
}
