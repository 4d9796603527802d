//! Avatar styling: hex colors, the style record, photo transform and presets.

/// `#rrggbb` colors and the lighten/darken adjustment used by bevel borders.
pub mod color;
/// [`StyleConfig`](config::StyleConfig) and its JSON form.
pub mod config;
/// Built-in color and font presets.
pub mod presets;
/// Pan/zoom/rotation of a loaded photo.
pub mod transform;
