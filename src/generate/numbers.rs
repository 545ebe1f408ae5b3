//! Number texture generator
//!
//! Renders each clock number centered on a transparent canvas and saves it as
//! PNG. Centering uses the ink bounds of the rendered text, not its advance
//! width, so narrow numerals like `1` sit in the middle too.

use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageFormat, RgbaImage};

use crate::constants::{FILE_EXTENSION, FILE_PREFIX, NUMBER_RANGE};
use crate::error::{Result, TextureError};
use crate::font::{InkBox, TextureFont};
use crate::logging::{debug, info};
use crate::options::TextureOptions;

/// `number-{n}.png`
pub fn texture_file_name(number: impl Display) -> String {
    format!("{}{}.{}", FILE_PREFIX, number, FILE_EXTENSION)
}

/// Layout origin that puts the ink box in the middle of a `width` x `height` canvas
pub fn centered_origin(width: u32, height: u32, ink: &InkBox) -> (i32, i32) {
    let left = (width as i32 - ink.width()) / 2;
    let top = (height as i32 - ink.height()) / 2;
    (left - ink.min_x, top - ink.min_y)
}

/// Render `number` onto a fresh canvas without touching the filesystem
pub fn render_number_texture(
    number: impl Display,
    options: &TextureOptions,
    font: &TextureFont,
) -> Result<RgbaImage> {
    if options.width == 0 || options.height == 0 {
        return Err(TextureError::InvalidCanvas {
            width: options.width,
            height: options.height,
        });
    }

    let mut canvas = RgbaImage::from_pixel(options.width, options.height, options.background);
    let text = number.to_string();

    if let Some(ink) = font.ink_box(&text) {
        let origin = centered_origin(options.width, options.height, &ink);
        debug!(
            "'{}': ink {}x{} at ({}, {}), origin ({}, {})",
            text,
            ink.width(),
            ink.height(),
            ink.min_x,
            ink.min_y,
            origin.0,
            origin.1
        );
        font.draw(&mut canvas, origin, options.text_color, &text);
    }

    Ok(canvas)
}

/// Render one number with the default options and write it to `path`.
/// Loads the font itself, falling back to the builtin font.
pub fn create_number_texture(number: impl Display, path: impl AsRef<Path>) -> Result<()> {
    let options = TextureOptions::default();
    let font = TextureFont::load_or_default(&options.font_file, options.font_size);
    create_number_texture_with(number, path, &options, &font)
}

/// Render one number and write it to `path` as PNG, overwriting any existing file
pub fn create_number_texture_with(
    number: impl Display,
    path: impl AsRef<Path>,
    options: &TextureOptions,
    font: &TextureFont,
) -> Result<()> {
    let path = path.as_ref();
    let canvas = render_number_texture(number, options, font)?;
    canvas
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| TextureError::Save {
            path: path.to_path_buf(),
            source,
        })
}

/// Write every clock number texture into `dir`, in ascending order.
/// Stops at the first failure.
pub fn generate_all(dir: impl AsRef<Path>, options: &TextureOptions) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| TextureError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let font = TextureFont::load_or_default(&options.font_file, options.font_size);
    let mut written = Vec::new();

    for number in NUMBER_RANGE {
        let path = dir.join(texture_file_name(number));
        create_number_texture_with(number, &path, options, &font)?;
        info!("  Created: {} ({})", path.display(), font.kind());
        written.push(path);
    }

    Ok(written)
}

/// Generate all textures into the working directory
pub fn run() -> Result<Vec<PathBuf>> {
    let options = TextureOptions::default();

    info!("Generating number textures...");
    info!(
        "  Size: {}x{}, Font: {} @ {}px",
        options.width, options.height, options.font_file, options.font_size
    );

    let written = generate_all(".", &options)?;
    info!("Generated {} number textures.", written.len());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn scratch_dir(tag: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("number_textures_{}_{}", tag, nanos));
        fs::create_dir_all(&dir).expect("create scratch dir");
        dir
    }

    fn builtin_options() -> TextureOptions {
        TextureOptions {
            font_file: "no-such-font-anywhere.ttf".to_string(),
            ..TextureOptions::default()
        }
    }

    fn builtin_font() -> TextureFont {
        TextureFont::builtin(70.0)
    }

    /// Inclusive bounds of every pixel with any alpha
    fn ink_bounds(image: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
        image
            .enumerate_pixels()
            .filter(|(_, _, p)| p[3] > 0)
            .fold(None, |acc, (x, y, _)| match acc {
                None => Some((x, y, x, y)),
                Some((x0, y0, x1, y1)) => Some((x0.min(x), y0.min(y), x1.max(x), y1.max(y))),
            })
    }

    fn assert_centered(image: &RgbaImage, label: &str) {
        let (x0, y0, x1, y1) = ink_bounds(image).expect("texture has ink");
        let mid_x = (x0 + x1 + 1) as f32 / 2.0;
        let mid_y = (y0 + y1 + 1) as f32 / 2.0;
        let center_x = image.width() as f32 / 2.0;
        let center_y = image.height() as f32 / 2.0;
        assert!((mid_x - center_x).abs() <= 2.0, "{label}: x midpoint {mid_x}");
        assert!((mid_y - center_y).abs() <= 2.0, "{label}: y midpoint {mid_y}");
    }

    fn assert_texture_properties(image: &RgbaImage, label: &str) {
        assert_eq!(image.dimensions(), (100, 300), "{label}");

        let (w, h) = image.dimensions();
        for (x, y) in [(0, 0), (w - 1, 0), (0, h - 1), (w - 1, h - 1)] {
            assert_eq!(image.get_pixel(x, y)[3], 0, "{label}: corner ({x}, {y})");
        }
        assert!(
            image.pixels().any(|p| *p == Rgba([0, 0, 0, 255])),
            "{label}: no opaque black pixel"
        );
        assert_centered(image, label);
    }

    #[test]
    fn file_names_follow_pattern() {
        assert_eq!(texture_file_name(1), "number-1.png");
        assert_eq!(texture_file_name(12), "number-12.png");
    }

    #[test]
    fn origin_centers_ink_not_layout() {
        let ink = InkBox { min_x: 7, min_y: 0, max_x: 28, max_y: 49 };
        let (x, y) = centered_origin(100, 300, &ink);
        assert_eq!((x, y), (32, 125));
        // Ink lands at 39..60, 125..174
        assert_eq!(x + ink.min_x, 39);
        assert_eq!(y + ink.min_y, 125);
    }

    #[test]
    fn origin_handles_ink_wider_than_canvas() {
        let ink = InkBox { min_x: 0, min_y: 0, max_x: 110, max_y: 10 };
        assert_eq!(centered_origin(100, 300, &ink), (-5, 145));
    }

    #[test]
    fn builtin_one_and_twelve_are_centered() {
        let font = builtin_font();
        for number in [1, 12] {
            let image = render_number_texture(number, &builtin_options(), &font).unwrap();
            assert_texture_properties(&image, &format!("builtin {number}"));
        }
    }

    #[test]
    fn every_number_renders_with_fallback_font() {
        let options = builtin_options();
        let font = TextureFont::load_or_default(&options.font_file, options.font_size);
        assert_eq!(font.kind(), "builtin");

        for number in NUMBER_RANGE {
            let image = render_number_texture(number, &options, &font).unwrap();
            assert_texture_properties(&image, &format!("number {number}"));
        }
    }

    #[test]
    fn truetype_one_and_twelve_are_centered() {
        let Some(font) = ["DejaVuSans.ttf", "LiberationSans-Regular.ttf", "Arial.ttf", "arial.ttf"]
            .iter()
            .find_map(|name| TextureFont::load(name, 70.0).ok())
        else {
            eprintln!("No system TrueType font found, skipping");
            return;
        };

        for number in [1, 12] {
            let image = render_number_texture(number, &TextureOptions::default(), &font).unwrap();
            assert_texture_properties(&image, &format!("truetype {number}"));
        }
    }

    #[test]
    fn blank_text_leaves_canvas_transparent() {
        let image = render_number_texture("  ", &builtin_options(), &builtin_font()).unwrap();
        assert!(image.pixels().all(|p| p[3] == 0));
    }

    #[test]
    fn zero_sized_canvas_is_rejected() {
        let options = TextureOptions {
            width: 0,
            ..builtin_options()
        };
        let result = render_number_texture(3, &options, &builtin_font());
        assert!(matches!(
            result,
            Err(TextureError::InvalidCanvas { width: 0, height: 300 })
        ));
    }

    #[test]
    fn written_file_decodes_to_same_pixels() {
        let dir = scratch_dir("write");
        let path = dir.join(texture_file_name(7));
        let options = builtin_options();
        let font = builtin_font();

        create_number_texture_with(7, &path, &options, &font).unwrap();
        let metadata = fs::metadata(&path).expect("texture written");
        assert!(metadata.len() > 0);

        let decoded = image::open(&path).expect("decode texture").to_rgba8();
        let rendered = render_number_texture(7, &options, &font).unwrap();
        assert_eq!(decoded, rendered);
    }

    #[test]
    fn regenerating_overwrites_with_identical_output() {
        let dir = scratch_dir("idempotent");
        let path = dir.join(texture_file_name(12));
        let options = builtin_options();
        let font = builtin_font();

        create_number_texture_with(12, &path, &options, &font).unwrap();
        let first = fs::read(&path).unwrap();
        create_number_texture_with(12, &path, &options, &font).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn default_entry_point_writes_texture() {
        let dir = scratch_dir("default");
        let path = dir.join(texture_file_name(5));
        create_number_texture(5, &path).unwrap();

        let image = image::open(&path).expect("decode texture").to_rgba8();
        assert_texture_properties(&image, "default 5");
    }

    #[test]
    fn unwritable_path_is_a_save_error() {
        let dir = scratch_dir("unwritable");
        let path = dir.join("missing-subdir").join(texture_file_name(1));
        let result = create_number_texture_with(1, &path, &builtin_options(), &builtin_font());
        match result {
            Err(TextureError::Save { path: reported, .. }) => assert_eq!(reported, path),
            other => panic!("expected save error, got {other:?}"),
        }
    }
}
