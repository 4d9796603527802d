use std::fs::File;
use std::io::BufReader;
use std::ops::RangeInclusive;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{RoundelError, RoundelResult};
use crate::style::color::HexColor;

pub const BORDER_WIDTH_RANGE: RangeInclusive<u32> = 0..=10;
pub const BORDER_RADIUS_PERCENT_RANGE: RangeInclusive<u32> = 0..=50;
pub const SIZE_RANGE: RangeInclusive<u32> = 50..=300;
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 20..=120;

/// Visual style of an avatar.
///
/// Numeric fields are clamped into their documented ranges by [`StyleConfig::clamped`].
/// Deserialization goes through the same clamping, so a style read from JSON is always in range.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawStyleConfig")]
pub struct StyleConfig {
    pub background_color: HexColor,
    pub border_color: HexColor,
    /// Border stroke width in pixels, `0..=10`.
    pub border_width: u32,
    /// Corner rounding in percent, `0..=50`. The avatar clip is always a circle.
    pub border_radius_percent: u32,
    /// Side of the square output in pixels, `50..=300`.
    pub size: u32,
    /// CSS-style family list, e.g. `"'Playfair Display', serif"`.
    pub font_family: String,
    /// Initial glyph size in pixels, `20..=120`.
    pub font_size: u32,
    pub text_color: HexColor,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            background_color: HexColor::rgb(0xf0, 0xf4, 0xf8),
            border_color: HexColor::rgb(0x4a, 0x90, 0xe2),
            border_width: 3,
            border_radius_percent: 50,
            size: 200,
            font_family: "Inter, sans-serif".to_owned(),
            font_size: 64,
            text_color: HexColor::rgb(0x2d, 0x37, 0x48),
        }
    }
}

impl StyleConfig {
    /// Return a copy with every numeric field clamped to its closed range.
    pub fn clamped(mut self) -> Self {
        self.border_width = clamp_to(self.border_width, &BORDER_WIDTH_RANGE);
        self.border_radius_percent =
            clamp_to(self.border_radius_percent, &BORDER_RADIUS_PERCENT_RANGE);
        self.size = clamp_to(self.size, &SIZE_RANGE);
        self.font_size = clamp_to(self.font_size, &FONT_SIZE_RANGE);
        if self.font_family.trim().is_empty() {
            self.font_family = Self::default().font_family;
        }
        self
    }

    /// Parse a style from JSON. Missing fields take their defaults, numbers are clamped.
    ///
    /// Negative numbers are accepted and clamped like any other out-of-range value.
    pub fn from_reader<R: std::io::Read>(r: R) -> RoundelResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| RoundelError::validation(format!("parse style JSON: {e}")))
    }

    /// Parse a style from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> RoundelResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            RoundelError::validation(format!("open style JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn to_json_pretty(&self) -> RoundelResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| RoundelError::serde(e.to_string()))
    }

    pub fn center(&self) -> f64 {
        f64::from(self.size) / 2.0
    }

    /// Radius of the circular clip that bounds photo content.
    pub fn clip_radius(&self) -> f64 {
        (self.center() - f64::from(self.border_width)).max(0.0)
    }
}

fn clamp_to(v: u32, range: &RangeInclusive<u32>) -> u32 {
    v.clamp(*range.start(), *range.end())
}

fn clamp_signed(v: i64, range: &RangeInclusive<u32>) -> u32 {
    v.clamp(i64::from(*range.start()), i64::from(*range.end())) as u32
}

/// Wire form of [`StyleConfig`]: signed integers so that `-3` clamps instead of failing to parse.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawStyleConfig {
    background_color: HexColor,
    border_color: HexColor,
    border_width: i64,
    border_radius_percent: i64,
    size: i64,
    font_family: String,
    font_size: i64,
    text_color: HexColor,
}

impl Default for RawStyleConfig {
    fn default() -> Self {
        let d = StyleConfig::default();
        Self {
            background_color: d.background_color,
            border_color: d.border_color,
            border_width: i64::from(d.border_width),
            border_radius_percent: i64::from(d.border_radius_percent),
            size: i64::from(d.size),
            font_family: d.font_family,
            font_size: i64::from(d.font_size),
            text_color: d.text_color,
        }
    }
}

impl From<RawStyleConfig> for StyleConfig {
    fn from(raw: RawStyleConfig) -> Self {
        StyleConfig {
            background_color: raw.background_color,
            border_color: raw.border_color,
            border_width: clamp_signed(raw.border_width, &BORDER_WIDTH_RANGE),
            border_radius_percent: clamp_signed(
                raw.border_radius_percent,
                &BORDER_RADIUS_PERCENT_RANGE,
            ),
            size: clamp_signed(raw.size, &SIZE_RANGE),
            font_family: raw.font_family,
            font_size: clamp_signed(raw.font_size, &FONT_SIZE_RANGE),
            text_color: raw.text_color,
        }
        .clamped()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/config.rs"]
mod tests;
