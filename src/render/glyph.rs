use anyhow::Context;

use crate::assets::fonts::{pinned_resolver, resolve_face, shared_fontdb};
use crate::foundation::error::{RoundelError, RoundelResult};
use crate::style::config::StyleConfig;

/// Rasterize `glyph` centered on a `style.size` square, returning premultiplied RGBA8.
///
/// The face is resolved once from `style.font_family`. With no fonts installed the layer is left
/// transparent.
pub(crate) fn rasterize_initial(glyph: &str, style: &StyleConfig) -> RoundelResult<Vec<u8>> {
    let fontdb = shared_fontdb();
    let Some(face) = resolve_face(&fontdb, &style.font_family) else {
        tracing::warn!(%glyph, "no font faces available; initial left blank");
        let side = style.size as usize;
        return Ok(vec![0; side * side * 4]);
    };

    let svg = initial_svg(glyph, style);
    let opts = usvg::Options {
        fontdb,
        font_resolver: pinned_resolver(face),
        ..Default::default()
    };
    let tree = usvg::Tree::from_str(&svg, &opts).context("parse initials svg")?;

    let mut pixmap = resvg::tiny_skia::Pixmap::new(style.size, style.size)
        .ok_or_else(|| RoundelError::Other(anyhow::anyhow!("failed to allocate glyph pixmap")))?;
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::identity(),
        &mut pixmap.as_mut(),
    );
    Ok(pixmap.data().to_vec())
}

pub(crate) fn initial_svg(glyph: &str, style: &StyleConfig) -> String {
    let size = style.size;
    let c = style.center();
    format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            r#"<text x="{c}" y="{c}" font-family="{family}" font-size="{font_size}" fill="{fill}" "#,
            r#"text-anchor="middle" dominant-baseline="central">{text}</text></svg>"#
        ),
        size = size,
        c = c,
        family = xml_escape(&style.font_family),
        font_size = style.font_size,
        fill = style.text_color,
        text = xml_escape(glyph),
    )
}

fn xml_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/glyph.rs"]
mod tests;
