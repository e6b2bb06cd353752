//! Compile-time configuration for the digit matrix.

use embassy_time::Duration;
use smart_leds::RGB8;

/// Columns in the LED matrix.
pub const MATRIX_WIDTH: usize = 5;

/// Rows in the LED matrix.
pub const MATRIX_HEIGHT: usize = 5;

/// Total LEDs on the strip that forms the matrix.
pub const LED_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// Number of glyphs (digits 0 through 9).
pub const DIGIT_COUNT: u8 = 10;

/// Color of a lit cell (a soft white).
pub const ON_COLOR: RGB8 = RGB8::new(50, 50, 50);

/// Color of an unlit cell.
pub const OFF_COLOR: RGB8 = RGB8::new(0, 0, 0);

/// Presses closer together than this (on the same button) are ignored.
pub const DEBOUNCE_WINDOW: Duration = Duration::from_millis(200);

/// Status LED toggle period.
pub const BLINK_INTERVAL: Duration = Duration::from_millis(100);

/// Pause between two refreshes of the matrix.
pub const REFRESH_INTERVAL: Duration = Duration::from_millis(50);
