use crate::assets::decode::DecodedImage;
use crate::foundation::error::{RoundelError, RoundelResult};

/// What an avatar is drawn from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    /// A decoded photo, panned/zoomed/rotated into the circle.
    Image(DecodedImage),
    /// A non-empty name; only its first character is drawn.
    Initials { text: String },
}

impl InputSource {
    /// Pick the input for a render. An image always wins over a name; a blank name counts as absent.
    pub fn select(image: Option<DecodedImage>, name: Option<&str>) -> RoundelResult<Self> {
        if let Some(image) = image {
            return Ok(Self::Image(image));
        }
        match name {
            Some(text) if initial_glyph(text).is_some() => Ok(Self::Initials {
                text: text.to_owned(),
            }),
            _ => Err(RoundelError::NoInput),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Image(_) => "image",
            Self::Initials { .. } => "initials",
        }
    }
}

/// Uppercased first character of `text`, after leading whitespace.
///
/// Uppercasing is full Unicode, so a single character may expand (`ß` gives `SS`).
pub fn initial_glyph(text: &str) -> Option<String> {
    let first = text.trim_start().chars().next()?;
    Some(first.to_uppercase().collect())
}

#[cfg(test)]
#[path = "../../tests/unit/render/input.rs"]
mod tests;
