//! Roundel renders circular profile avatars.
//!
//! An avatar is either a photo (panned, zoomed and rotated inside a circular clip with a soft
//! vignette) or a single uppercase initial, drawn over a solid background and finished with an
//! optional border ring. Wide borders get a diagonal light-to-dark bevel.
//!
//! The pipeline is:
//!
//! - Decode a photo with [`decode_image`] or take a name
//! - Pick the [`InputSource`] (a photo always wins over a name)
//! - [`render`] it with a [`StyleConfig`] and [`TransformState`]
//! - [`encode`] the [`RenderResult`] as PNG
//!
//! [`AvatarEditor`] wraps these steps in a stateful session and [`render_batch`] renders many
//! avatars in parallel.
#![forbid(unsafe_code)]

mod foundation;

/// Image decoding and fonts.
pub mod assets;
/// Stateful editing session.
pub mod editor;
pub mod encode;
pub mod render;
pub mod style;

pub use crate::foundation::core::{Affine, Point, Rgba8Premul, Vec2};
pub use crate::foundation::error::{RoundelError, RoundelResult};

pub use crate::assets::decode::{DecodedImage, decode_image, decode_image_path};
pub use crate::editor::session::AvatarEditor;
pub use crate::encode::png::{DEFAULT_FILE_NAME, encode, encode_to_path};
pub use crate::render::batch::{RenderJob, render_batch};
pub use crate::render::compositor::{BorderPaint, ImagePlacement, RenderResult, render};
pub use crate::render::input::{InputSource, initial_glyph};
pub use crate::style::color::{HexColor, adjust_hex};
pub use crate::style::config::StyleConfig;
pub use crate::style::presets::{COLOR_PRESETS, ColorPreset, FONT_PRESETS, FontPreset};
pub use crate::style::transform::TransformState;
