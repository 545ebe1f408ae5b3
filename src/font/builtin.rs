//! Builtin bitmap font
//!
//! 5x7 cell glyphs for digits and a few signs. Each cell is drawn as a filled
//! square `unit` pixels wide; the unit scales with the requested size so a
//! size 70 font gets 7px cells and a 49px cap height.

use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use super::InkBox;

const CELL_COLUMNS: i32 = 5;
const CELL_ROWS: i32 = 7;
const ADVANCE_COLUMNS: i32 = 6; // one blank column between glyphs

/// One row per byte, leftmost cell in bit 4
type Bitmap = [u8; CELL_ROWS as usize];

const BLANK: Bitmap = [0; CELL_ROWS as usize];

/// Hollow box drawn for characters without a glyph
const NOTDEF: Bitmap = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

fn glyph_bitmap(c: char) -> Bitmap {
    match c {
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ' ' => BLANK,
        _ => NOTDEF,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFont {
    unit: i32,
}

impl BuiltinFont {
    pub fn new(size: f32) -> Self {
        let unit = (size / 10.0).round() as i32;
        Self { unit: unit.max(1) }
    }

    /// Cell edge length in pixels
    pub fn unit(&self) -> i32 {
        self.unit
    }

    /// Top-left corner of every filled cell, relative to the layout origin
    fn cells<'a>(&self, text: &'a str) -> impl Iterator<Item = (i32, i32)> + 'a {
        let unit = self.unit;
        text.chars().enumerate().flat_map(move |(index, c)| {
            let rows = glyph_bitmap(c);
            let left = index as i32 * ADVANCE_COLUMNS * unit;
            (0..CELL_ROWS).flat_map(move |row| {
                (0..CELL_COLUMNS).filter_map(move |col| {
                    let bit = 1u8 << (CELL_COLUMNS - 1 - col);
                    (rows[row as usize] & bit != 0).then_some((left + col * unit, row * unit))
                })
            })
        })
    }

    pub fn ink_box(&self, text: &str) -> Option<InkBox> {
        self.cells(text)
            .map(|(x, y)| InkBox {
                min_x: x,
                min_y: y,
                max_x: x + self.unit,
                max_y: y + self.unit,
            })
            .reduce(InkBox::union)
    }

    pub fn draw(&self, canvas: &mut RgbaImage, origin: (i32, i32), color: Rgba<u8>, text: &str) {
        let side = self.unit as u32;
        for (x, y) in self.cells(text) {
            let cell = Rect::at(origin.0 + x, origin.1 + y).of_size(side, side);
            draw_filled_rect_mut(canvas, cell, color);
        }
    }
}
