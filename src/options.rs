//! Texture generation options
//!
//! Defaults come from the fixed values in `constants`. The generator binary
//! always uses the defaults.

use image::Rgba;

use crate::constants::{
    BACKGROUND_COLOR, CANVAS_HEIGHT, CANVAS_WIDTH, FONT_FILE, FONT_SIZE, TEXT_COLOR,
};

#[derive(Debug, Clone, PartialEq)]
pub struct TextureOptions {
    /// Canvas width in pixels
    pub width: u32,
    /// Canvas height in pixels
    pub height: u32,
    /// Font file name or path, looked up through the font search path
    pub font_file: String,
    /// Nominal font size in pixels
    pub font_size: f32,
    pub background: Rgba<u8>,
    pub text_color: Rgba<u8>,
}

impl Default for TextureOptions {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            font_file: FONT_FILE.to_string(),
            font_size: FONT_SIZE,
            background: BACKGROUND_COLOR,
            text_color: TEXT_COLOR,
        }
    }
}
