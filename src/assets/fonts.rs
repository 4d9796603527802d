use std::path::Path;
use std::sync::{Arc, OnceLock};

use usvg::fontdb::{Database, Family, ID, Query, Stretch, Style, Weight};

/// Directory of extra `.ttf`/`.otf`/`.ttc` files loaded alongside the system fonts.
pub const FONTS_DIR_ENV: &str = "ROUNDEL_FONTS_DIR";

const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

static FONT_DB: OnceLock<Arc<Database>> = OnceLock::new();

/// Process-wide font database, built on first use and immutable afterwards.
pub fn shared_fontdb() -> Arc<Database> {
    FONT_DB
        .get_or_init(|| {
            let extra = std::env::var_os(FONTS_DIR_ENV);
            build_fontdb(extra.as_deref().map(Path::new))
        })
        .clone()
}

/// Build a font database from the system fonts plus an optional directory of font files.
pub fn build_fontdb(extra_dir: Option<&Path>) -> Arc<Database> {
    let mut db = Database::new();
    db.load_system_fonts();
    if let Some(dir) = extra_dir {
        load_avatar_fonts(&mut db, dir);
    }

    match db.faces().count() {
        0 => tracing::warn!("no font faces found; initials avatars will render without a glyph"),
        faces => tracing::debug!(faces, "font database ready"),
    }
    Arc::new(db)
}

fn load_avatar_fonts(db: &mut Database, dir: &Path) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(dir = %dir.display(), error = %e, "font directory is not readable");
            return;
        }
    };

    let font_files = entries.flatten().map(|e| e.path()).filter(|p| {
        p.is_file()
            && p.extension()
                .and_then(|s| s.to_str())
                .is_some_and(|ext| FONT_EXTENSIONS.iter().any(|f| ext.eq_ignore_ascii_case(f)))
    });
    for path in font_files {
        if let Err(e) = db.load_font_file(&path) {
            tracing::warn!(path = %path.display(), error = %e, "skipping unreadable font file");
        }
    }
}

/// Split a CSS `font-family` value such as `"'Roboto Mono', monospace"` into fontdb families.
///
/// Quotes are stripped from names and the five generic keywords map to fontdb's generic families.
pub fn css_families(value: &str) -> Vec<Family<'_>> {
    value
        .split(',')
        .map(|part| part.trim().trim_matches(['"', '\'']).trim())
        .filter(|name| !name.is_empty())
        .map(|name| match name.to_ascii_lowercase().as_str() {
            "serif" => Family::Serif,
            "sans-serif" => Family::SansSerif,
            "monospace" => Family::Monospace,
            "cursive" => Family::Cursive,
            "fantasy" => Family::Fantasy,
            _ => Family::Name(name),
        })
        .collect()
}

/// Pick the regular face for an initial drawn in `font_family`.
///
/// The listed families are tried in order, then `sans-serif` like a canvas would. When none of
/// them is installed the first face in the database is used so the initial still shows. `None`
/// means the database is empty.
pub fn resolve_face(db: &Database, font_family: &str) -> Option<ID> {
    let mut families = css_families(font_family);
    families.push(Family::SansSerif);

    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };
    let (id, matched) = match db.query(&query) {
        Some(id) => (id, true),
        None => (db.faces().next()?.id, false),
    };

    if let Some(face) = db.face(id) {
        if matched {
            tracing::debug!(
                family = %font_family,
                face = %face.post_script_name,
                "resolved initials font"
            );
        } else {
            tracing::warn!(
                family = %font_family,
                face = %face.post_script_name,
                "no listed family installed; using first available face"
            );
        }
    }
    Some(id)
}

/// usvg resolver that gives every text run the face picked by [`resolve_face`]. Characters the
/// face lacks still go through usvg's fallback selection.
pub fn pinned_resolver(face: ID) -> usvg::FontResolver<'static> {
    usvg::FontResolver {
        select_font: Box::new(move |_, _| Some(face)),
        select_fallback: usvg::FontResolver::default_fallback_selector(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
