use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::assets::decode::{DecodedImage, decode_image};
use crate::encode::png::{DEFAULT_FILE_NAME, encode};
use crate::foundation::error::{RoundelError, RoundelResult};
use crate::render::compositor::{RenderResult, render};
use crate::render::input::InputSource;
use crate::style::config::StyleConfig;
use crate::style::transform::TransformState;

/// Last rendered avatar together with its PNG encoding.
#[derive(Clone, Debug)]
pub struct Preview {
    pub result: RenderResult,
    pub png: Vec<u8>,
}

/// Interactive editing session: one optional photo, one optional name, a style and a transform.
///
/// Every mutation keeps style and transform in range. A preview is only produced by
/// [`AvatarEditor::create`]; loading a new photo throws the old preview away.
#[derive(Debug, Default)]
pub struct AvatarEditor {
    image: Option<DecodedImage>,
    name: String,
    style: StyleConfig,
    transform: TransformState,
    preview: Option<Preview>,
}

impl AvatarEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(style: StyleConfig) -> Self {
        Self {
            style: style.clamped(),
            ..Self::default()
        }
    }

    /// Decode and adopt a photo. On failure the session is left exactly as it was.
    pub fn load_image_bytes(&mut self, bytes: &[u8], mime: Option<&str>) -> RoundelResult<()> {
        let image = decode_image(bytes, mime)?;
        tracing::debug!(width = image.width, height = image.height, "editor image loaded");
        self.image = Some(image);
        self.transform = TransformState::default();
        self.preview = None;
        Ok(())
    }

    pub fn clear_image(&mut self) {
        self.image = None;
        self.transform = TransformState::default();
        self.preview = None;
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }

    pub fn image(&self) -> Option<&DecodedImage> {
        self.image.as_ref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    /// Mutate the style in place; the result is clamped when the guard is dropped.
    pub fn style_mut(&mut self) -> StyleGuard<'_> {
        StyleGuard {
            style: &mut self.style,
        }
    }

    pub fn set_style(&mut self, style: StyleConfig) {
        self.style = style.clamped();
    }

    pub fn transform(&self) -> &TransformState {
        &self.transform
    }

    pub fn set_zoom(&mut self, zoom_factor: f64) {
        self.transform = TransformState {
            zoom_factor,
            ..self.transform
        }
        .clamped();
    }

    pub fn set_offset(&mut self, offset_x: i32, offset_y: i32) {
        self.transform = TransformState {
            offset_x,
            offset_y,
            ..self.transform
        }
        .clamped();
    }

    pub fn set_rotation(&mut self, rotation_degrees: i32) {
        self.transform = TransformState {
            rotation_degrees,
            ..self.transform
        }
        .clamped();
    }

    /// Render the current state and keep it as the preview.
    pub fn create(&mut self) -> RoundelResult<&RenderResult> {
        let input = InputSource::select(self.image.clone(), Some(self.name.as_str()))?;
        let result = render(&input, &self.style, &self.transform)?;
        let png = encode(&result)?;
        let preview = self.preview.insert(Preview { result, png });
        Ok(&preview.result)
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    /// Write the preview to `dir/avatar.png` and return the written path.
    pub fn save(&self, dir: impl AsRef<Path>) -> RoundelResult<PathBuf> {
        let preview = self.preview.as_ref().ok_or_else(|| {
            RoundelError::validation("nothing to save: create an avatar first")
        })?;
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("create output dir '{}'", dir.display()))?;
        let path = dir.join(DEFAULT_FILE_NAME);
        std::fs::write(&path, &preview.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "saved avatar");
        Ok(path)
    }

    /// Back to a blank session with default style.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Mutable access to an editor's style that clamps on drop.
pub struct StyleGuard<'a> {
    style: &'a mut StyleConfig,
}

impl std::ops::Deref for StyleGuard<'_> {
    type Target = StyleConfig;

    fn deref(&self) -> &StyleConfig {
        &*self.style
    }
}

impl std::ops::DerefMut for StyleGuard<'_> {
    fn deref_mut(&mut self) -> &mut StyleConfig {
        &mut *self.style
    }
}

impl Drop for StyleGuard<'_> {
    fn drop(&mut self) {
        *self.style = std::mem::take(&mut *self.style).clamped();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/session.rs"]
mod tests;
