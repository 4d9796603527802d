use crate::assets::decode::DecodedImage;
use crate::foundation::core::{Affine, Point, Rgba8Premul, Vec2};
use crate::foundation::error::RoundelResult;
use crate::render::glyph::rasterize_initial;
use crate::render::input::{InputSource, initial_glyph};
use crate::render::surface::{
    affine_to_cpu, clear_pixmap, disk_coverage, image_paint, mask_in_place, new_pixmap, over,
    over_in_place, ring_coverage,
};
use crate::style::color::HexColor;
use crate::style::config::StyleConfig;
use crate::style::transform::TransformState;

/// Vignette is transparent up to this fraction of the outer radius.
pub const VIGNETTE_INNER_STOP: f64 = 0.6;
/// Vignette opacity (black) at the outer radius and beyond.
pub const VIGNETTE_OUTER_ALPHA: f64 = 0.15;
/// Borders at least this wide get the bevel gradient.
pub const BEVEL_MIN_WIDTH: u32 = 3;
/// Channel shift between the border color and each end of the bevel gradient.
pub const BEVEL_DELTA: u8 = 25;

/// A finished avatar: `size`x`size` premultiplied RGBA8, row-major, tightly packed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderResult {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl RenderResult {
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        let px = self.data.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Where the photo lands on the avatar before rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ImagePlacement {
    pub scaled_width: f64,
    pub scaled_height: f64,
    pub draw_x: f64,
    pub draw_y: f64,
}

impl ImagePlacement {
    /// Scale the natural size by the zoom factor, center it on the square, then shift by the
    /// pan offset.
    pub fn compute(
        natural_width: u32,
        natural_height: u32,
        style: &StyleConfig,
        transform: &TransformState,
    ) -> Self {
        let size = f64::from(style.size);
        let scaled_width = f64::from(natural_width) * transform.zoom_factor;
        let scaled_height = f64::from(natural_height) * transform.zoom_factor;
        let pan = transform.offset();
        Self {
            scaled_width,
            scaled_height,
            draw_x: (size - scaled_width) / 2.0 + pan.x,
            draw_y: (size - scaled_height) / 2.0 + pan.y,
        }
    }

    /// Image space to avatar space: zoom, move to the draw origin, rotate about the center.
    pub fn affine(&self, style: &StyleConfig, transform: &TransformState) -> Affine {
        transform.rotation_about(style.center())
            * Affine::translate(Vec2::new(self.draw_x, self.draw_y))
            * Affine::scale(transform.zoom_factor)
    }
}

/// How the border ring is colored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BorderPaint {
    Flat(HexColor),
    /// Diagonal gradient from `light` at the top-left corner to `dark` at the bottom-right.
    Bevel { light: HexColor, dark: HexColor },
}

impl BorderPaint {
    pub fn for_style(style: &StyleConfig) -> Option<Self> {
        match style.border_width {
            0 => None,
            w if w < BEVEL_MIN_WIDTH => Some(Self::Flat(style.border_color)),
            _ => Some(Self::Bevel {
                light: style.border_color.lighten(BEVEL_DELTA),
                dark: style.border_color.darken(BEVEL_DELTA),
            }),
        }
    }

    /// Paint color at a point of a `size` square.
    pub fn color_at(&self, x: f64, y: f64, size: f64) -> Rgba8Premul {
        match *self {
            Self::Flat(c) => c.to_rgba8_premul(),
            Self::Bevel { light, dark } => {
                let t = if size > 0.0 { (x + y) / (2.0 * size) } else { 0.0 };
                light
                    .to_rgba8_premul()
                    .lerp(dark.to_rgba8_premul(), t as f32)
            }
        }
    }

    fn layer(&self, size: u32, coverage: &[u8]) -> RoundelResult<Vec<u8>> {
        let side = f64::from(size);
        let mut out = vec![0u8; coverage.len() * 4];
        for (i, (px, &m)) in out.chunks_exact_mut(4).zip(coverage).enumerate() {
            if m == 0 {
                continue;
            }
            let (x, y) = pixel_center(i, size);
            let color = self.color_at(x, y, side);
            px.copy_from_slice(&color.to_array());
        }
        mask_in_place(&mut out, coverage)?;
        Ok(out)
    }
}

/// Vignette opacity at `t`, the distance from the center over the outer radius.
pub fn vignette_alpha(t: f64) -> f32 {
    let ramp = ((t - VIGNETTE_INNER_STOP) / (1.0 - VIGNETTE_INNER_STOP)).clamp(0.0, 1.0);
    (ramp * VIGNETTE_OUTER_ALPHA) as f32
}

/// Composite one avatar.
///
/// Background first, then either the clipped photo with its vignette or the unclipped initial,
/// then the border ring on top. Inputs are clamped before use, so any `StyleConfig` and
/// `TransformState` produce a valid raster; errors only come from the rasterizer itself.
#[tracing::instrument(
    skip(input, style, transform),
    fields(kind = input.kind(), size = style.size, border = style.border_width)
)]
pub fn render(
    input: &InputSource,
    style: &StyleConfig,
    transform: &TransformState,
) -> RoundelResult<RenderResult> {
    let style = style.clone().clamped();
    let transform = transform.clamped();
    let size = style.size;
    let center = Point::new(style.center(), style.center());

    let mut surface = new_pixmap(size, size)?;
    clear_pixmap(&mut surface, style.background_color.to_rgba8_premul());

    let clip = disk_coverage(size, center, style.clip_radius())?;

    match input {
        InputSource::Image(img) => {
            let layer = photo_layer(img, &style, &transform, &clip)?;
            over_in_place(surface.data_as_u8_slice_mut(), &layer)?;
        }
        InputSource::Initials { text } => match initial_glyph(text) {
            Some(glyph) => {
                tracing::debug!(%glyph, family = %style.font_family, "drawing initial");
                let layer = rasterize_initial(&glyph, &style)?;
                over_in_place(surface.data_as_u8_slice_mut(), &layer)?;
            }
            None => tracing::warn!("initials text is blank; drawing background only"),
        },
    }

    if let Some(paint) = BorderPaint::for_style(&style) {
        tracing::debug!(?paint, "drawing border");
        let outer = disk_coverage(size, center, style.center())?;
        let ring = ring_coverage(&outer, &clip);
        let layer = paint.layer(size, &ring)?;
        over_in_place(surface.data_as_u8_slice_mut(), &layer)?;
    }

    Ok(RenderResult {
        width: size,
        height: size,
        data: surface.data_as_u8_slice().to_vec(),
    })
}

fn photo_layer(
    img: &DecodedImage,
    style: &StyleConfig,
    transform: &TransformState,
    clip: &[u8],
) -> RoundelResult<Vec<u8>> {
    let placement = ImagePlacement::compute(img.width, img.height, style, transform);
    tracing::debug!(?placement, rotation = transform.rotation_degrees, "placing image");

    let paint = image_paint(img)?;
    let mut pixmap = new_pixmap(style.size, style.size)?;
    let mut ctx = vello_cpu::RenderContext::new(pixmap.width(), pixmap.height());
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
    ctx.set_transform(affine_to_cpu(placement.affine(style, transform)));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(img.width),
        f64::from(img.height),
    ));
    ctx.flush();
    ctx.render_to_pixmap(&mut pixmap);

    let mut layer = pixmap.data_as_u8_slice().to_vec();
    apply_vignette(&mut layer, style.size);
    mask_in_place(&mut layer, clip)?;
    Ok(layer)
}

fn apply_vignette(layer: &mut [u8], size: u32) {
    let radius = f64::from(size) / 2.0;
    if radius <= 0.0 {
        return;
    }
    for (i, px) in layer.chunks_exact_mut(4).enumerate() {
        let (x, y) = pixel_center(i, size);
        let t = (x - radius).hypot(y - radius) / radius;
        let shade = HexColor::BLACK.with_alpha(vignette_alpha(t));
        if shade.a == 0 {
            continue;
        }
        let out = over([px[0], px[1], px[2], px[3]], shade.to_array());
        px.copy_from_slice(&out);
    }
}

fn pixel_center(index: usize, size: u32) -> (f64, f64) {
    let size = size as usize;
    ((index % size) as f64 + 0.5, (index / size) as f64 + 0.5)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
