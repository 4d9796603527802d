use crate::foundation::error::{RoundelError, RoundelResult};
use crate::style::color::HexColor;
use crate::style::config::StyleConfig;

/// Matching background/border/text colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorPreset {
    pub name: &'static str,
    pub background: HexColor,
    pub border: HexColor,
    pub text: HexColor,
}

/// Typography for the initials glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FontPreset {
    pub name: &'static str,
    pub family: &'static str,
    pub size: u32,
    pub color: HexColor,
}

pub const COLOR_PRESETS: [ColorPreset; 6] = [
    ColorPreset {
        name: "slate",
        background: HexColor::rgb(0xf0, 0xf4, 0xf8),
        border: HexColor::rgb(0x4a, 0x90, 0xe2),
        text: HexColor::rgb(0x2d, 0x37, 0x48),
    },
    ColorPreset {
        name: "sky",
        background: HexColor::rgb(0xeb, 0xf8, 0xff),
        border: HexColor::rgb(0x31, 0x82, 0xce),
        text: HexColor::rgb(0x2c, 0x52, 0x82),
    },
    ColorPreset {
        name: "lavender",
        background: HexColor::rgb(0xf9, 0xf7, 0xfc),
        border: HexColor::rgb(0x80, 0x5a, 0xd5),
        text: HexColor::rgb(0x55, 0x3c, 0x9a),
    },
    ColorPreset {
        name: "rose",
        background: HexColor::rgb(0xff, 0xf5, 0xf5),
        border: HexColor::rgb(0xe5, 0x3e, 0x3e),
        text: HexColor::rgb(0x9b, 0x2c, 0x2c),
    },
    ColorPreset {
        name: "mint",
        background: HexColor::rgb(0xf0, 0xff, 0xf4),
        border: HexColor::rgb(0x38, 0xa1, 0x69),
        text: HexColor::rgb(0x27, 0x67, 0x49),
    },
    ColorPreset {
        name: "night",
        background: HexColor::rgb(0x2d, 0x37, 0x48),
        border: HexColor::rgb(0xa0, 0xae, 0xc0),
        text: HexColor::rgb(0xf7, 0xfa, 0xfc),
    },
];

pub const FONT_PRESETS: [FontPreset; 5] = [
    FontPreset {
        name: "inter",
        family: "Inter, sans-serif",
        size: 64,
        color: HexColor::rgb(0x2d, 0x37, 0x48),
    },
    FontPreset {
        name: "montserrat",
        family: "'Montserrat', sans-serif",
        size: 68,
        color: HexColor::rgb(0x1a, 0x36, 0x5d),
    },
    FontPreset {
        name: "georgia",
        family: "Georgia, serif",
        size: 60,
        color: HexColor::rgb(0x2c, 0x52, 0x82),
    },
    FontPreset {
        name: "playfair",
        family: "'Playfair Display', serif",
        size: 58,
        color: HexColor::rgb(0x55, 0x3c, 0x9a),
    },
    FontPreset {
        name: "roboto-mono",
        family: "'Roboto Mono', monospace",
        size: 56,
        color: HexColor::rgb(0x27, 0x67, 0x49),
    },
];

impl ColorPreset {
    /// Look a preset up by name (case-insensitive) or by zero-based index.
    pub fn find(key: &str) -> RoundelResult<Self> {
        find_preset(&COLOR_PRESETS, key, |p| p.name, "color")
    }

    /// Set background, border and text colors; everything else is left as is.
    pub fn apply(&self, style: &mut StyleConfig) {
        style.background_color = self.background;
        style.border_color = self.border;
        style.text_color = self.text;
    }
}

impl FontPreset {
    /// Look a preset up by name (case-insensitive) or by zero-based index.
    pub fn find(key: &str) -> RoundelResult<Self> {
        find_preset(&FONT_PRESETS, key, |p| p.name, "font")
    }

    /// Set font family, font size and text color; everything else is left as is.
    pub fn apply(&self, style: &mut StyleConfig) {
        style.font_family = self.family.to_owned();
        style.font_size = self.size;
        style.text_color = self.color;
    }
}

fn find_preset<T: Copy>(
    presets: &[T],
    key: &str,
    name: impl Fn(&T) -> &'static str,
    kind: &str,
) -> RoundelResult<T> {
    let key = key.trim();
    if let Ok(idx) = key.parse::<usize>() {
        return presets.get(idx).copied().ok_or_else(|| {
            RoundelError::validation(format!(
                "{kind} preset index {idx} out of range (0..{})",
                presets.len()
            ))
        });
    }
    presets
        .iter()
        .find(|p| name(*p).eq_ignore_ascii_case(key))
        .copied()
        .ok_or_else(|| {
            let known: Vec<_> = presets.iter().map(&name).collect();
            RoundelError::validation(format!(
                "unknown {kind} preset \"{key}\" (known: {})",
                known.join(", ")
            ))
        })
}

#[cfg(test)]
#[path = "../../tests/unit/style/presets.rs"]
mod tests;
