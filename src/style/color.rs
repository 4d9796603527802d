use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::{RoundelError, RoundelResult};

/// Opaque sRGB color written as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HexColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl HexColor {
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    /// Highlight used when white is lightened; clamping would leave it invisible.
    pub const NEAR_WHITE: Self = Self::rgb(0xf0, 0xf0, 0xf0);
    /// Shade used when black is darkened.
    pub const NEAR_BLACK: Self = Self::rgb(0x10, 0x10, 0x10);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `#rrggbb` (the leading `#` is optional, hex digits are case-insensitive).
    pub fn parse(s: &str) -> RoundelResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RoundelError::validation(format!(
                "hex color must be #RRGGBB, got \"{s}\""
            )));
        }

        let channel = |pair: &str| -> RoundelResult<u8> {
            u8::from_str_radix(pair, 16).map_err(|_| {
                RoundelError::validation(format!("invalid hex byte \"{pair}\" in \"{s}\""))
            })
        };

        Ok(Self {
            r: channel(&digits[0..2])?,
            g: channel(&digits[2..4])?,
            b: channel(&digits[4..6])?,
        })
    }

    /// Add `delta` to every channel, clamping each to `[0, 255]`.
    ///
    /// Lightening pure white yields [`HexColor::NEAR_WHITE`] and darkening pure black yields
    /// [`HexColor::NEAR_BLACK`], so a bevel built from the pair keeps a visible highlight.
    pub fn adjust(self, delta: i32) -> Self {
        if delta > 0 && self == Self::WHITE {
            return Self::NEAR_WHITE;
        }
        if delta < 0 && self == Self::BLACK {
            return Self::NEAR_BLACK;
        }

        let shift = |c: u8| -> u8 { (i32::from(c) + delta).clamp(0, 255) as u8 };
        Self {
            r: shift(self.r),
            g: shift(self.g),
            b: shift(self.b),
        }
    }

    /// Bevel highlight: [`HexColor::adjust`] by `+amount`.
    pub fn lighten(self, amount: u8) -> Self {
        self.adjust(i32::from(amount))
    }

    /// Bevel shade: [`HexColor::adjust`] by `-amount`.
    pub fn darken(self, amount: u8) -> Self {
        self.adjust(-i32::from(amount))
    }

    pub fn to_rgba8_premul(self) -> Rgba8Premul {
        Rgba8Premul::opaque(self.r, self.g, self.b)
    }

    /// Same color with straight alpha applied, premultiplied.
    pub fn with_alpha(self, alpha: f32) -> Rgba8Premul {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, a)
    }
}

/// String form of [`HexColor::adjust`].
pub fn adjust_hex(hex: &str, delta: i32) -> RoundelResult<String> {
    Ok(HexColor::parse(hex)?.adjust(delta).to_string())
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl FromStr for HexColor {
    type Err = RoundelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for HexColor {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/color.rs"]
mod tests;
