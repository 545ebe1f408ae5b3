//! Number textures - clock face numeral assets
//!
//! Renders the numbers 1 through 12 centered on small transparent canvases
//! and writes each one to `number-{i}.png`.

pub mod constants;
pub mod error;
pub mod font;
pub mod generate;
pub mod logging;
pub mod options;

pub use constants::*;
pub use error::{FontError, Result, TextureError};
pub use font::{BuiltinFont, InkBox, TextureFont, TrueTypeFont, find_font};
pub use generate::numbers::{
    centered_origin, create_number_texture, create_number_texture_with, generate_all,
    render_number_texture, texture_file_name,
};
pub use options::TextureOptions;
