// Copyright 2026 the Strata Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use core::fmt;
use core::str::FromStr;

use peniko::Color;
use peniko::color::{Srgb, parse_color};

use crate::ColorParseError;

/// An opaque 24-bit sRGB color used for layer tints and the background.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Creates a color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Per-channel integer average of two colors, rounding down.
    #[must_use]
    pub const fn average(self, other: Self) -> Self {
        Self::new(
            mid(self.r, other.r),
            mid(self.g, other.g),
            mid(self.b, other.b),
        )
    }

    /// Channels as an `[r, g, b]` array.
    #[must_use]
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Converts into an opaque peniko color.
    #[must_use]
    pub fn to_color(self) -> Color {
        Color::from_rgb8(self.r, self.g, self.b)
    }

    /// Converts from a peniko color, dropping alpha.
    #[must_use]
    pub fn from_color(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b)
    }
}

const fn mid(a: u8, b: u8) -> u8 {
    a / 2 + b / 2 + (a & b & 1)
}

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        rgb.to_color()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex_color(s)
    }
}

/// Parses a hex color of 3 or 6 digits with an optional leading `#`.
///
/// ```rust
/// use strata_layers::{Rgb, parse_hex_color};
///
/// assert_eq!(parse_hex_color("#3399ff"), Ok(Rgb::new(0x33, 0x99, 0xff)));
/// assert_eq!(parse_hex_color("fa0"), Ok(Rgb::new(0xff, 0xaa, 0x00)));
/// assert!(parse_hex_color("#12345").is_err());
/// ```
pub fn parse_hex_color(s: &str) -> Result<Rgb, ColorParseError> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    let len = digits.chars().count();
    if len != 3 && len != 6 {
        return Err(ColorParseError::Length { len });
    }
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidDigit);
    }
    let color = parse_color(&format!("#{digits}")).map_err(|_| ColorParseError::InvalidDigit)?;
    Ok(Rgb::from_color(color.to_alpha_color::<Srgb>()))
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::{Rgb, parse_hex_color};
    use crate::ColorParseError;

    #[test]
    fn parses_short_and_long_forms() {
        assert_eq!(parse_hex_color("#dfbf9f"), Ok(Rgb::new(0xdf, 0xbf, 0x9f)));
        assert_eq!(parse_hex_color("B3FF99"), Ok(Rgb::new(0xb3, 0xff, 0x99)));
        assert_eq!(parse_hex_color("#0f8"), Ok(Rgb::new(0x00, 0xff, 0x88)));
    }

    #[test]
    fn rejects_bad_lengths_and_digits() {
        assert_eq!(parse_hex_color(""), Err(ColorParseError::Length { len: 0 }));
        assert_eq!(
            parse_hex_color("#ffff"),
            Err(ColorParseError::Length { len: 4 })
        );
        assert_eq!(parse_hex_color("#ggg"), Err(ColorParseError::InvalidDigit));
        assert_eq!(parse_hex_color("red"), Err(ColorParseError::InvalidDigit));
    }

    #[test]
    fn display_is_lowercase_hex() {
        assert_eq!(Rgb::new(0xAB, 0x01, 0xFF).to_string(), "#ab01ff");
        let parsed: Rgb = "#AB01FF".parse().unwrap();
        assert_eq!(parsed.to_string(), "#ab01ff");
    }

    #[test]
    fn average_rounds_down_per_channel() {
        let a = Rgb::new(255, 0, 3);
        let b = Rgb::new(254, 1, 4);
        assert_eq!(a.average(b), Rgb::new(254, 0, 3));
        assert_eq!(a.average(a), a);
    }

    #[test]
    fn peniko_round_trip_is_exact() {
        let c = Rgb::new(0x33, 0x99, 0xff);
        assert_eq!(Rgb::from_color(c.to_color()), c);
    }
}
