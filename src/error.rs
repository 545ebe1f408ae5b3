//! Error types for texture generation

use std::path::PathBuf;

/// Result type for texture operations
pub type Result<T> = std::result::Result<T, TextureError>;

/// Fatal errors. Font problems are not here: they fall back to the builtin font.
#[derive(Debug, thiserror::Error)]
pub enum TextureError {
    /// Canvas dimensions must both be non-zero
    #[error("Invalid canvas size {width}x{height}")]
    InvalidCanvas { width: u32, height: u32 },

    /// Output directory could not be created
    #[error("Failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// PNG encoding or the file write failed
    #[error("Failed to save texture {}: {source}", path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

/// Reasons a named font could not be used
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    /// Not at the given path and not in any font directory
    #[error("Font '{0}' not found")]
    NotFound(String),

    #[error("Failed to read font {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse font {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ab_glyph::InvalidFont,
    },
}
