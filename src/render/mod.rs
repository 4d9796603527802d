//! CPU compositing of circular avatars.

/// Parallel rendering of many avatars.
pub mod batch;
/// The avatar compositor.
pub mod compositor;
pub(crate) mod glyph;
/// Image-vs-initials input selection.
pub mod input;
pub(crate) mod surface;
