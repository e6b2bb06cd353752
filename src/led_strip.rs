//! Color encoding and transmission for NeoPixel-style (WS2812) LED strips.
//!
//! A WS2812 strip expects 24 bits per LED, green first, then red, then blue, each channel
//! most-significant bit first. [`encode`] packs a color into that order inside a `u32`
//! (high byte unused). A [`Frame1d`] holds one color per LED; [`FrameSink`] is anything
//! that can show a whole frame.
//!
//! On hardware, [`Ws2812Strip`] hands frames to `embassy-rp`'s PIO WS2812 driver.
//!
//! # Example: Encode a Color
//!
//! ```rust
//! use digit_matrix::led_strip::{Frame1d, RGB8, encode, encode_color};
//!
//! assert_eq!(encode(0x11, 0x22, 0x33), 0x0022_1133);
//! assert_eq!(encode_color(RGB8::new(0x11, 0x22, 0x33)), 0x0022_1133);
//!
//! let frame: Frame1d<2> = Frame1d::filled(RGB8::new(0, 0, 7));
//! assert_eq!(frame.words(), [7, 7]);
//! ```

/// RGB color type used by LED strip frames.
pub use smart_leds::RGB8;

use core::ops::{Deref, DerefMut};

#[cfg(not(feature = "host"))]
mod ws2812;
#[cfg(not(feature = "host"))]
pub use ws2812::Ws2812Strip;

/// Packs 8-bit channels into a GRB wire word: green in bits 16..24, red in 8..16,
/// blue in 0..8, bits 24..32 zero.
#[must_use]
pub const fn encode(r: u8, g: u8, b: u8) -> u32 {
    ((g as u32) << 16) | ((r as u32) << 8) | b as u32
}

/// [`encode`] for an [`RGB8`].
#[must_use]
pub const fn encode_color(color: RGB8) -> u32 {
    encode(color.r, color.g, color.b)
}

/// Fixed-size array of RGB pixels, one per LED in strip order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Frame1d<const N: usize>(pub [RGB8; N]);

impl<const N: usize> Frame1d<N> {
    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([RGB8::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: RGB8) -> Self {
        Self([color; N])
    }

    /// The frame as it goes over the wire: one [`encode`]d word per LED.
    #[must_use]
    pub fn words(&self) -> [u32; N] {
        self.0.map(encode_color)
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [RGB8; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

/// Destination for whole frames of `N` LEDs.
///
/// `write_frame` resolves once the strip has taken the frame; a busy strip makes the
/// caller wait rather than dropping it. Writing cannot fail.
pub trait FrameSink<const N: usize> {
    /// Shows `frame`, LED 0 first.
    async fn write_frame(&mut self, frame: Frame1d<N>);
}
