use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::Arc;

use crate::foundation::color::Color;
use crate::foundation::error::{SceneError, SceneResult};

const CACHE_LIMIT: usize = 512;
const PAD: f32 = 2.0;

/// A rasterized label, premultiplied, ready to paint at pixel offset `(0, 0)`.
#[derive(Clone)]
pub struct TextSprite {
    pub paint: vello_cpu::Image,
    pub width: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
struct SpriteKey {
    text: String,
    color: Color,
    /// Font size in 1/64 px.
    size: u32,
}

/// Rasterizes plain text through `usvg`/`resvg` using the system fonts.
///
/// Text that resolves to no glyphs (for example when no font is installed) yields `None` and is
/// skipped by the renderer.
pub struct LabelRasterizer {
    fontdb: Arc<usvg::fontdb::Database>,
    cache: HashMap<SpriteKey, Option<TextSprite>>,
}

impl LabelRasterizer {
    pub fn new() -> Self {
        let mut db = usvg::fontdb::Database::new();
        db.load_system_fonts();
        tracing::debug!(faces = db.faces().count(), "loaded system fonts");
        Self {
            fontdb: Arc::new(db),
            cache: HashMap::new(),
        }
    }

    pub fn face_count(&self) -> usize {
        self.fontdb.faces().count()
    }

    pub fn sprite(
        &mut self,
        text: &str,
        color: Color,
        size_px: f64,
    ) -> SceneResult<Option<TextSprite>> {
        if text.trim().is_empty() || size_px <= 0.0 {
            return Ok(None);
        }
        let key = SpriteKey {
            text: text.to_string(),
            color,
            size: (size_px * 64.0).round() as u32,
        };
        if let Some(hit) = self.cache.get(&key) {
            return Ok(hit.clone());
        }
        if self.cache.len() >= CACHE_LIMIT {
            self.cache.clear();
        }
        let sprite = self.rasterize(text, color, size_px as f32)?;
        self.cache.insert(key, sprite.clone());
        Ok(sprite)
    }

    fn rasterize(&self, text: &str, color: Color, size: f32) -> SceneResult<Option<TextSprite>> {
        let svg = label_svg(text, color, size);
        let opts = usvg::Options {
            fontdb: self.fontdb.clone(),
            ..Default::default()
        };
        let tree = usvg::Tree::from_str(&svg, &opts)
            .map_err(|e| SceneError::evaluation(format!("failed to lay out label '{text}': {e}")))?;

        let root = tree.root();
        if !root.has_children() {
            return Ok(None);
        }
        let bbox = root.abs_bounding_box();
        if bbox.width() <= 0.0 || bbox.height() <= 0.0 {
            return Ok(None);
        }

        let width = (bbox.width() + 2.0 * PAD).ceil() as u32;
        let height = (bbox.height() + 2.0 * PAD).ceil() as u32;
        let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
            .ok_or_else(|| SceneError::evaluation("failed to allocate label pixmap"))?;
        let xform = resvg::tiny_skia::Transform::from_translate(PAD - bbox.x(), PAD - bbox.y());
        resvg::render(&tree, xform, &mut pixmap.as_mut());

        let pixmap = pixmap_from_premul_bytes(pixmap.data(), width, height)?;
        Ok(Some(TextSprite {
            paint: vello_cpu::Image {
                image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
                sampler: vello_cpu::peniko::ImageSampler::default(),
            },
            width,
            height,
        }))
    }
}

impl Default for LabelRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// A single `<text>` element on a canvas wide enough for any glyph run of `text`.
pub(crate) fn label_svg(text: &str, color: Color, size: f32) -> String {
    let chars = text.chars().count().max(1) as f32;
    let w = (size * chars + 2.0 * size).ceil();
    let h = (size * 2.0).ceil();
    let mut out = String::new();
    let _ = write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
    );
    let _ = write!(
        out,
        r#"<text x="{}" y="{}" font-family="sans-serif" font-size="{size}" fill="{}" fill-opacity="{}">{}</text></svg>"#,
        size,
        size * 1.4,
        color.to_hex_rgb(),
        f32::from(color.a) / 255.0,
        escape_xml(text)
    );
    out
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

pub(crate) fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> SceneResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| SceneError::evaluation("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| SceneError::evaluation("pixmap height exceeds u16"))?;
    if bytes.len() != (width as usize) * (height as usize) * 4 {
        return Err(SceneError::evaluation("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}
