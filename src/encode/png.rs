use std::io::Cursor;
use std::path::Path;

use anyhow::Context;

use crate::foundation::error::{RoundelError, RoundelResult};
use crate::foundation::math::unpremultiply_rgba8_in_place;
use crate::render::compositor::RenderResult;

/// File name used when an avatar is exported without an explicit path.
pub const DEFAULT_FILE_NAME: &str = "avatar.png";

/// Encode a rendered avatar as PNG bytes (straight alpha, lossless).
#[tracing::instrument(skip(result), fields(width = result.width, height = result.height))]
pub fn encode(result: &RenderResult) -> RoundelResult<Vec<u8>> {
    let rgba = straight_rgba(result)?;
    let mut out = Vec::new();
    image::write_buffer_with_format(
        &mut Cursor::new(&mut out),
        &rgba,
        result.width,
        result.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .context("encode png")?;
    tracing::debug!(bytes = out.len(), "encoded png");
    Ok(out)
}

/// Encode and write to `path`, creating parent directories as needed.
pub fn encode_to_path(result: &RenderResult, path: impl AsRef<Path>) -> RoundelResult<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let bytes = encode(result)?;
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn straight_rgba(result: &RenderResult) -> RoundelResult<Vec<u8>> {
    let expected = result.width as usize * result.height as usize * 4;
    if result.data.len() != expected {
        return Err(RoundelError::Other(anyhow::anyhow!(
            "render result is {} bytes, expected {expected} for {}x{}",
            result.data.len(),
            result.width,
            result.height
        )));
    }
    let mut rgba = result.data.clone();
    unpremultiply_rgba8_in_place(&mut rgba);
    Ok(rgba)
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
