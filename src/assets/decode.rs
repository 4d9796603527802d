use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{RoundelError, RoundelResult};
use crate::foundation::math::premultiply_rgba8_in_place;

/// Decoded raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodedImage {
    /// Natural width in pixels.
    pub width: u32,
    /// Natural height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Wrap already-premultiplied RGBA8 pixels.
    pub fn from_premul_rgba8(width: u32, height: u32, rgba8_premul: Vec<u8>) -> RoundelResult<Self> {
        check_dimensions(width, height)?;
        let expected = (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4);
        if rgba8_premul.len() != expected {
            return Err(RoundelError::decode(format!(
                "pixel buffer is {} bytes, expected {expected} for {width}x{height}",
                rgba8_premul.len()
            )));
        }
        Ok(Self {
            width,
            height,
            rgba8_premul: Arc::new(rgba8_premul),
        })
    }

    /// Wrap straight-alpha RGBA8 pixels, premultiplying them.
    pub fn from_straight_rgba8(width: u32, height: u32, mut rgba8: Vec<u8>) -> RoundelResult<Self> {
        premultiply_rgba8_in_place(&mut rgba8);
        Self::from_premul_rgba8(width, height, rgba8)
    }
}

/// Decode encoded image bytes and convert to premultiplied RGBA8.
///
/// `mime_hint` is the media type reported by whoever supplied the bytes. Anything outside
/// `image/*` is rejected without decoding; a known image type selects the decoder, otherwise the
/// format is sniffed from the content.
#[tracing::instrument(skip(bytes), fields(len = bytes.len()))]
pub fn decode_image(bytes: &[u8], mime_hint: Option<&str>) -> RoundelResult<DecodedImage> {
    if bytes.is_empty() {
        return Err(RoundelError::decode("no image bytes supplied"));
    }

    let format = match mime_hint.map(str::trim).filter(|m| !m.is_empty()) {
        Some(mime) => {
            let mime = mime.to_ascii_lowercase();
            if !mime.starts_with("image/") {
                return Err(RoundelError::decode(format!(
                    "expected an image/* media type, got \"{mime}\""
                )));
            }
            image::ImageFormat::from_mime_type(&mime)
        }
        None => None,
    };

    let dyn_img = match format {
        Some(f) => image::load_from_memory_with_format(bytes, f),
        None => image::load_from_memory(bytes),
    }
    .map_err(|e| RoundelError::decode(format!("decode image from memory: {e}")))?;

    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();
    tracing::debug!(width, height, ?format, "decoded image");

    DecodedImage::from_straight_rgba8(width, height, rgba.into_raw())
}

/// Read and decode an image file, using its extension as the format hint.
pub fn decode_image_path(path: impl AsRef<Path>) -> RoundelResult<DecodedImage> {
    let path = path.as_ref();
    let bytes =
        std::fs::read(path).with_context(|| format!("read image bytes from '{}'", path.display()))?;
    let mime = image::ImageFormat::from_path(path)
        .ok()
        .map(|f| f.to_mime_type());
    decode_image(&bytes, mime)
}

fn check_dimensions(width: u32, height: u32) -> RoundelResult<()> {
    if width == 0 || height == 0 {
        return Err(RoundelError::decode(format!(
            "image has zero-sized dimensions {width}x{height}"
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
