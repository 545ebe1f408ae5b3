//! Fonts used to rasterize numerals
//!
//! A named TrueType font is preferred. When it cannot be found or parsed the
//! builtin 5x7 bitmap glyph set takes its place at the same nominal size.

pub mod builtin;
pub mod search;
pub mod truetype;

use image::{Rgba, RgbaImage};

use crate::error::FontError;
use crate::logging::{debug, warn};

pub use builtin::BuiltinFont;
pub use search::find_font;
pub use truetype::TrueTypeFont;

/// Bounding box of rendered (non-background) pixels, relative to the layout
/// origin. `max_x`/`max_y` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InkBox {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl InkBox {
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> i32 {
        self.max_y - self.min_y
    }

    /// Smallest box covering both
    pub fn union(self, other: InkBox) -> InkBox {
        InkBox {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }
}

/// Font loaded for a generation run
pub enum TextureFont {
    TrueType(TrueTypeFont),
    Builtin(BuiltinFont),
}

impl TextureFont {
    /// Load a TrueType font by file name or path
    pub fn load(name: &str, size: f32) -> Result<Self, FontError> {
        let path = find_font(name).ok_or_else(|| FontError::NotFound(name.to_string()))?;
        TrueTypeFont::from_file(&path, size).map(Self::TrueType)
    }

    pub fn builtin(size: f32) -> Self {
        Self::Builtin(BuiltinFont::new(size))
    }

    /// Load a TrueType font, substituting the builtin font on any failure
    pub fn load_or_default(name: &str, size: f32) -> Self {
        match Self::load(name, size) {
            Ok(font) => {
                if let Self::TrueType(tt) = &font {
                    debug!("Loaded font {}", tt.source().display());
                }
                font
            }
            Err(e) => {
                warn!("{}, falling back to builtin font", e);
                Self::builtin(size)
            }
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::TrueType(_) => "truetype",
            Self::Builtin(_) => "builtin",
        }
    }

    /// Ink bounds of `text` laid out at the origin, `None` if nothing is drawn
    pub fn ink_box(&self, text: &str) -> Option<InkBox> {
        match self {
            Self::TrueType(font) => font.ink_box(text),
            Self::Builtin(font) => font.ink_box(text),
        }
    }

    /// Draw `text` with its layout origin at `origin`, clipped to the canvas
    pub fn draw(&self, canvas: &mut RgbaImage, origin: (i32, i32), color: Rgba<u8>, text: &str) {
        match self {
            Self::TrueType(font) => font.draw(canvas, origin, color, text),
            Self::Builtin(font) => font.draw(canvas, origin, color, text),
        }
    }
}
