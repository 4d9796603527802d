use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::foundation::core::{Affine, Vec2};

pub const ZOOM_RANGE: RangeInclusive<f64> = 0.5..=3.0;
pub const OFFSET_RANGE: RangeInclusive<i32> = -100..=100;

/// Pan/zoom/rotation applied to a loaded photo.
///
/// A fresh default value is created whenever a new image is loaded; a previous image's transform
/// is never carried over.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransformState {
    /// Uniform scale applied to the photo's natural size, `0.5..=3.0`.
    pub zoom_factor: f64,
    /// Horizontal pan in output pixels, `-100..=100`.
    pub offset_x: i32,
    /// Vertical pan in output pixels, `-100..=100`.
    pub offset_y: i32,
    /// Clockwise rotation in degrees, `0..360`.
    pub rotation_degrees: i32,
}

impl Default for TransformState {
    fn default() -> Self {
        Self {
            zoom_factor: 1.0,
            offset_x: 0,
            offset_y: 0,
            rotation_degrees: 0,
        }
    }
}

impl TransformState {
    /// Return a copy with zoom and offsets clamped and rotation wrapped into `0..360`.
    pub fn clamped(self) -> Self {
        let zoom_factor = if self.zoom_factor.is_finite() {
            self.zoom_factor.clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end())
        } else {
            Self::default().zoom_factor
        };
        Self {
            zoom_factor,
            offset_x: self.offset_x.clamp(*OFFSET_RANGE.start(), *OFFSET_RANGE.end()),
            offset_y: self.offset_y.clamp(*OFFSET_RANGE.start(), *OFFSET_RANGE.end()),
            rotation_degrees: self.rotation_degrees.rem_euclid(360),
        }
    }

    pub fn rotation_rad(&self) -> f64 {
        f64::from(self.rotation_degrees).to_radians()
    }

    pub fn offset(&self) -> Vec2 {
        Vec2::new(f64::from(self.offset_x), f64::from(self.offset_y))
    }

    /// Rotation about `(center, center)`: translate the center to the origin, rotate, translate
    /// back.
    pub fn rotation_about(&self, center: f64) -> Affine {
        let c = Vec2::new(center, center);
        Affine::translate(c) * Affine::rotate(self.rotation_rad()) * Affine::translate(-c)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/style/transform.rs"]
mod tests;
