//! Pixel-level helpers shared by the compositor: pixmap allocation, premultiplied `over`, coverage
//! masks and conversions into `vello_cpu` types.

use kurbo::Shape;

use crate::assets::decode::DecodedImage;
use crate::foundation::core::{Affine, BezPath, Circle, Point, Rgba8Premul};
use crate::foundation::error::{RoundelError, RoundelResult};
use crate::foundation::math::mul_div255_u8;

/// Flattening tolerance for circles, in pixels.
const PATH_TOLERANCE: f64 = 0.05;

pub(crate) fn dimension_u16(v: u32, what: &str) -> RoundelResult<u16> {
    u16::try_from(v)
        .map_err(|_| RoundelError::Other(anyhow::anyhow!("{what} {v} exceeds the 65535px limit")))
}

pub(crate) fn new_pixmap(width: u32, height: u32) -> RoundelResult<vello_cpu::Pixmap> {
    let w = dimension_u16(width, "surface width")?;
    let h = dimension_u16(height, "surface height")?;
    Ok(vello_cpu::Pixmap::new(w, h))
}

pub(crate) fn clear_pixmap(pixmap: &mut vello_cpu::Pixmap, color: Rgba8Premul) {
    let rgba = color.to_array();
    for px in pixmap.data_as_u8_slice_mut().chunks_exact_mut(4) {
        px.copy_from_slice(&rgba);
    }
}

/// Source-over of one premultiplied pixel onto another.
pub(crate) fn over(dst: [u8; 4], src: [u8; 4]) -> [u8; 4] {
    if src[3] == 0 {
        return dst;
    }
    if src[3] == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(src[3]);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> RoundelResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(RoundelError::Other(anyhow::anyhow!(
            "over_in_place expects equal-length rgba8 buffers"
        )));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Scale every premultiplied pixel by the matching coverage value.
pub(crate) fn mask_in_place(rgba: &mut [u8], coverage: &[u8]) -> RoundelResult<()> {
    if rgba.len() != coverage.len() * 4 {
        return Err(RoundelError::Other(anyhow::anyhow!(
            "mask_in_place expects one coverage byte per pixel"
        )));
    }
    for (px, &m) in rgba.chunks_exact_mut(4).zip(coverage) {
        match m {
            255 => {}
            0 => px.fill(0),
            _ => {
                for c in px.iter_mut() {
                    *c = mul_div255_u8(u16::from(*c), u16::from(m));
                }
            }
        }
    }
    Ok(())
}

/// Anti-aliased coverage (one byte per pixel) of a filled disk on a `size`x`size` grid.
pub(crate) fn disk_coverage(size: u32, center: Point, radius: f64) -> RoundelResult<Vec<u8>> {
    let mut pixmap = new_pixmap(size, size)?;
    if radius > 0.0 {
        let mut ctx = vello_cpu::RenderContext::new(pixmap.width(), pixmap.height());
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 255, 255, 255));
        let path = Circle::new(center, radius).to_path(PATH_TOLERANCE);
        ctx.fill_path(&bezpath_to_cpu(&path));
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
    }
    Ok(pixmap
        .data_as_u8_slice()
        .chunks_exact(4)
        .map(|px| px[3])
        .collect())
}

/// Coverage of the annulus between two concentric disks.
pub(crate) fn ring_coverage(outer: &[u8], inner: &[u8]) -> Vec<u8> {
    outer
        .iter()
        .zip(inner)
        .map(|(&o, &i)| o.saturating_sub(i))
        .collect()
}

pub(crate) fn image_paint(img: &DecodedImage) -> RoundelResult<vello_cpu::Image> {
    let pixmap = image_premul_bytes_to_pixmap(img.rgba8_premul.as_slice(), img.width, img.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(std::sync::Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

fn image_premul_bytes_to_pixmap(
    rgba8_premul: &[u8],
    width: u32,
    height: u32,
) -> RoundelResult<vello_cpu::Pixmap> {
    let w = dimension_u16(width, "image width")?;
    let h = dimension_u16(height, "image height")?;
    if rgba8_premul.len() != width as usize * height as usize * 4 {
        return Err(RoundelError::Other(anyhow::anyhow!(
            "decoded image byte length mismatch"
        )));
    }

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity(width as usize * height as usize);
    for px in rgba8_premul.chunks_exact(4) {
        let a = px[3];
        may_have_opacities |= a != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8 {
            r: px[0],
            g: px[1],
            b: px[2],
            a,
        });
    }

    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        w,
        h,
        may_have_opacities,
    ))
}

pub(crate) fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
