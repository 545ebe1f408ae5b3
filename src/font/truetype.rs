//! TrueType font rendering through ab_glyph

use std::fs;
use std::path::{Path, PathBuf};

use ab_glyph::{Font, FontVec, GlyphId, OutlinedGlyph, PxScale, ScaleFont, point};
use image::{Rgba, RgbaImage};

use super::InkBox;
use crate::error::FontError;

pub struct TrueTypeFont {
    font: FontVec,
    scale: PxScale,
    source: PathBuf,
}

impl TrueTypeFont {
    pub fn from_file(path: &Path, size: f32) -> Result<Self, FontError> {
        let data = fs::read(path).map_err(|source| FontError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontVec::try_from_vec(data).map_err(|source| FontError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self {
            font,
            scale: PxScale::from(size),
            source: path.to_path_buf(),
        })
    }

    /// File the font was loaded from
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Single line layout with the caret starting at (0, ascent).
    /// Glyphs without an outline (spaces) only advance the caret.
    fn layout(&self, text: &str) -> Vec<OutlinedGlyph> {
        let scaled = self.font.as_scaled(self.scale);
        let mut caret = 0.0;
        let mut prev: Option<GlyphId> = None;
        let mut glyphs = Vec::new();

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, scaled.ascent()));
            caret += scaled.h_advance(id);
            prev = Some(id);

            if let Some(outlined) = self.font.outline_glyph(glyph) {
                glyphs.push(outlined);
            }
        }

        glyphs
    }

    pub fn ink_box(&self, text: &str) -> Option<InkBox> {
        self.layout(text)
            .iter()
            .map(|g| {
                let bounds = g.px_bounds();
                InkBox {
                    min_x: bounds.min.x as i32,
                    min_y: bounds.min.y as i32,
                    max_x: bounds.max.x as i32,
                    max_y: bounds.max.y as i32,
                }
            })
            .reduce(InkBox::union)
    }

    pub fn draw(&self, canvas: &mut RgbaImage, origin: (i32, i32), color: Rgba<u8>, text: &str) {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);

        for glyph in self.layout(text) {
            let bounds = glyph.px_bounds();
            let left = origin.0 + bounds.min.x as i32;
            let top = origin.1 + bounds.min.y as i32;

            glyph.draw(|gx, gy, coverage| {
                let x = left + gx as i32;
                let y = top + gy as i32;
                if (0..width).contains(&x) && (0..height).contains(&y) {
                    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
                    *pixel = blend_over(*pixel, color, coverage);
                }
            });
        }
    }
}

/// Source-over composite of `src` scaled by glyph coverage onto `dst`
fn blend_over(dst: Rgba<u8>, src: Rgba<u8>, coverage: f32) -> Rgba<u8> {
    let src_alpha = src[3] as f32 / 255.0 * coverage.clamp(0.0, 1.0);
    let dst_alpha = dst[3] as f32 / 255.0;
    let out_alpha = src_alpha + dst_alpha * (1.0 - src_alpha);
    if out_alpha <= 0.0 {
        return dst;
    }

    let channel = |i: usize| {
        let value =
            (src[i] as f32 * src_alpha + dst[i] as f32 * dst_alpha * (1.0 - src_alpha)) / out_alpha;
        value.round().clamp(0.0, 255.0) as u8
    };
    Rgba([
        channel(0),
        channel(1),
        channel(2),
        (out_alpha * 255.0).round().clamp(0.0, 255.0) as u8,
    ])
}
