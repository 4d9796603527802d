/// Image decoding into premultiplied RGBA8.
pub mod decode;
/// Process-wide font database for initials.
pub mod fonts;
