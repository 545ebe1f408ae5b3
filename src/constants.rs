//! Fixed parameters for number texture generation
//!
//! All output values are defined here; nothing is read from config files.

use std::ops::RangeInclusive;

use image::Rgba;

// =============================================================================
// CANVAS
// =============================================================================

pub const CANVAS_WIDTH: u32 = 100;
pub const CANVAS_HEIGHT: u32 = 300;

/// White with zero alpha, so untouched pixels stay transparent
pub const BACKGROUND_COLOR: Rgba<u8> = Rgba([255, 255, 255, 0]);

// =============================================================================
// TEXT
// =============================================================================

pub const FONT_FILE: &str = "arial.ttf";
pub const FONT_SIZE: f32 = 70.0;
pub const TEXT_COLOR: Rgba<u8> = Rgba([0, 0, 0, 255]);

// =============================================================================
// OUTPUT
// =============================================================================

/// Clock face numbers, generated in ascending order
pub const NUMBER_RANGE: RangeInclusive<u32> = 1..=12;

pub const FILE_PREFIX: &str = "number-";
pub const FILE_EXTENSION: &str = "png";
