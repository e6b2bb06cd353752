//! Compile-time description of how the strip is wired through the matrix.
//!
//! See [`LedLayout`] for the general type and [`MATRIX_LAYOUT`] for the board's wiring.

use crate::constants::{LED_COUNT, MATRIX_HEIGHT, MATRIX_WIDTH};

/// Compile-time description of panel geometry and wiring.
///
/// `LedLayout` maps each LED, in the order the strip is wired (its *physical position*),
/// to an `(x, y)` cell. Coordinates use a screen-style convention: `(0, 0)` is the top-left
/// corner, `x` increases to the right, and `y` increases downward. The row-major index of a
/// cell, `y * W + x`, is its *raster position*.
///
/// Layouts are validated at **compile time** when built in a `const`:
/// - coordinates must be in-bounds
/// - every `(x, y)` cell must appear exactly once
///
/// ```rust
/// use digit_matrix::layout::LedLayout;
///
/// const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
/// const EXPECTED: LedLayout<6, 3, 2> =
///     LedLayout::new([(0, 0), (1, 0), (2, 0), (2, 1), (1, 1), (0, 1)]);
/// const _: () = assert!(SNAKE.equals(&EXPECTED));
/// ```
///
/// ```text
/// Strip snakes across rows (3×2 example):
///   LED0  LED1  LED2
///   LED5  LED4  LED3
/// ```
///
/// ```compile_fail
/// # use digit_matrix::layout::LedLayout;
/// // Duplicate coordinate (0,0) - caught at compile time
/// const INVALID: LedLayout<3, 3, 1> = LedLayout::new([(0, 0), (0, 0), (1, 0)]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LedLayout<const N: usize, const W: usize, const H: usize> {
    map: [(u16, u16); N],
}

impl<const N: usize, const W: usize, const H: usize> LedLayout<N, W, H> {
    /// Constructor: verifies mapping covers every cell of the W×H panel exactly once.
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "evaluated at compile time; every index is bounds-checked by an assert first"
    )]
    #[must_use]
    pub const fn new(map: [(u16, u16); N]) -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut seen = [false; N];

        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = map[led_index];
            let x_index = x_index as usize;
            let y_index = y_index as usize;

            assert!(x_index < W, "column out of bounds");
            assert!(y_index < H, "row out of bounds");

            let cell = y_index * W + x_index;
            assert!(!seen[cell], "duplicate (col,row) in mapping");
            seen[cell] = true;

            led_index += 1;
        }

        let mut cell = 0;
        while cell < N {
            assert!(seen[cell], "mapping does not cover every cell");
            cell += 1;
        }

        Self { map }
    }

    /// Const equality helper for compile-time checks.
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "led_index < N"
    )]
    #[must_use]
    pub const fn equals(&self, other: &Self) -> bool {
        let mut led_index = 0;
        while led_index < N {
            if self.map[led_index].0 != other.map[led_index].0
                || self.map[led_index].1 != other.map[led_index].1
            {
                return false;
            }
            led_index += 1;
        }
        true
    }

    /// Physical position → raster position.
    ///
    /// ```rust
    /// use digit_matrix::layout::LedLayout;
    ///
    /// const SNAKE: LedLayout<6, 3, 2> = LedLayout::serpentine_row_major();
    /// assert_eq!(SNAKE.raster_by_index(), [0, 1, 2, 5, 4, 3]);
    /// ```
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "led_index < N and cells were validated by `new`"
    )]
    #[must_use]
    pub const fn raster_by_index(&self) -> [u8; N] {
        assert!(N <= u8::MAX as usize, "total LEDs must fit in u8");

        let mut rasters = [0_u8; N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            rasters[led_index] = (y_index as usize * W + x_index as usize) as u8;
            led_index += 1;
        }
        rasters
    }

    /// Serpentine row-major mapping (alternating left-to-right and right-to-left across rows).
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "x < W and y < H, so led_index < W * H == N"
    )]
    #[must_use]
    pub const fn serpentine_row_major() -> Self {
        assert!(W > 0 && H > 0, "W and H must be positive");
        assert!(W * H == N, "W*H must equal N");

        let mut mapping = [(0_u16, 0_u16); N];
        let mut y_index = 0;
        while y_index < H {
            let mut x_index = 0;
            while x_index < W {
                let led_index = if y_index % 2 == 0 {
                    y_index * W + x_index
                } else {
                    y_index * W + (W - 1 - x_index)
                };
                mapping[led_index] = (x_index as u16, y_index as u16);
                x_index += 1;
            }
            y_index += 1;
        }
        Self::new(mapping)
    }

    /// Flip vertically (mirror rows).
    ///
    /// ```text
    /// Before (serpentine): After:
    ///   LED0  LED1  LED2      LED5  LED4  LED3
    ///   LED5  LED4  LED3      LED0  LED1  LED2
    /// ```
    #[expect(
        clippy::indexing_slicing,
        clippy::arithmetic_side_effects,
        reason = "led_index < N and y < H"
    )]
    #[must_use]
    pub const fn flip_v(self) -> Self {
        let mut out = [(0_u16, 0_u16); N];
        let mut led_index = 0;
        while led_index < N {
            let (x_index, y_index) = self.map[led_index];
            out[led_index] = (x_index, (H - 1 - y_index as usize) as u16);
            led_index += 1;
        }
        Self::new(out)
    }
}

/// Wiring of the 5×5 matrix: the strip starts at the bottom-left, runs right along the
/// bottom row, then snakes upward.
///
/// ```text
///   LED20 LED21 LED22 LED23 LED24
///   LED19 LED18 LED17 LED16 LED15
///   LED10 LED11 LED12 LED13 LED14
///   LED9  LED8  LED7  LED6  LED5
///   LED0  LED1  LED2  LED3  LED4
/// ```
pub const MATRIX_LAYOUT: LedLayout<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT> =
    LedLayout::serpentine_row_major().flip_v();

/// Raster position shown by each physical LED.
pub const RASTER_BY_PHYSICAL: [u8; LED_COUNT] = MATRIX_LAYOUT.raster_by_index();

#[rustfmt::skip]
const _: () = assert!(MATRIX_LAYOUT.equals(&LedLayout::new([
    (0, 4), (1, 4), (2, 4), (3, 4), (4, 4),
    (4, 3), (3, 3), (2, 3), (1, 3), (0, 3),
    (0, 2), (1, 2), (2, 2), (3, 2), (4, 2),
    (4, 1), (3, 1), (2, 1), (1, 1), (0, 1),
    (0, 0), (1, 0), (2, 0), (3, 0), (4, 0),
])));

/// The raster position whose glyph bit belongs on physical LED `physical`.
///
/// # Panics
///
/// Panics if `physical >= LED_COUNT`.
#[expect(clippy::indexing_slicing, reason = "callers iterate physical positions 0..LED_COUNT")]
#[must_use]
pub const fn raster_for_physical(physical: usize) -> usize {
    RASTER_BY_PHYSICAL[physical] as usize
}
