//! 5×5 bitmaps for the digits 0 through 9.
//!
//! Cells are addressed by raster position: row-major, `(0, 0)` top-left, so raster
//! `r` is column `r % 5` of row `r / 5`.

use crate::constants::{LED_COUNT, MATRIX_WIDTH};
use crate::digit::Digit;

/// One digit's bitmap. Each row is five bits, most significant of the five on the left.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct Glyph {
    rows: [u8; 5],
}

impl Glyph {
    const fn new(rows: [u8; 5]) -> Self {
        Self { rows }
    }

    /// Whether the cell at `raster` is lit. Positions past the last cell are unlit.
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "raster < LED_COUNT, so the row index is < 5 and the shift is < 5"
    )]
    #[must_use]
    const fn is_lit(&self, raster: usize) -> bool {
        if raster >= LED_COUNT {
            return false;
        }
        let row = self.rows[raster / MATRIX_WIDTH];
        let column = raster % MATRIX_WIDTH;
        (row >> (MATRIX_WIDTH - 1 - column)) & 1 == 1
    }
}

/// Bitmaps indexed by digit value.
#[rustfmt::skip]
const GLYPHS: [Glyph; 10] = [
    Glyph::new([0b11111, 0b10001, 0b10001, 0b10001, 0b11111]), // 0
    Glyph::new([0b00100, 0b01100, 0b00100, 0b00100, 0b00100]), // 1
    Glyph::new([0b11111, 0b00001, 0b11111, 0b10000, 0b11111]), // 2
    Glyph::new([0b11111, 0b00001, 0b11111, 0b00001, 0b11111]), // 3
    Glyph::new([0b10001, 0b10001, 0b11111, 0b00001, 0b00001]), // 4
    Glyph::new([0b11111, 0b10000, 0b11111, 0b00001, 0b11111]), // 5
    Glyph::new([0b11111, 0b10000, 0b11111, 0b10001, 0b11111]), // 6
    Glyph::new([0b11111, 0b00001, 0b00010, 0b00100, 0b01000]), // 7
    Glyph::new([0b11111, 0b10001, 0b11111, 0b10001, 0b11111]), // 8
    Glyph::new([0b11111, 0b10001, 0b11111, 0b00001, 0b11111]), // 9
];

/// The bitmap for `digit`.
#[expect(clippy::indexing_slicing, reason = "a Digit is always < 10")]
#[must_use]
const fn glyph(digit: Digit) -> Glyph {
    GLYPHS[digit.index()]
}

/// Whether `digit` lights the cell at `raster`.
#[must_use]
pub const fn is_lit(digit: Digit, raster: usize) -> bool {
    glyph(digit).is_lit(raster)
}
