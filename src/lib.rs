//! Show a single digit on a 5×5 NeoPixel-style (WS2812) matrix on the Pico 1.
//!
//! Two buttons step the digit up and down (debounced at 200 ms), the matrix is refreshed
//! every 50 ms, and a status LED blinks every 100 ms on its own.
//!
//! The pipeline from digit to wire:
//! [`glyph`] (which raster cells are lit) → [`layout`] (which LED shows which cell) →
//! [`led_strip::Frame1d`] (one color per LED, sent as [`led_strip::encode`]d GRB words) →
//! [`led_strip::FrameSink`] (the PIO WS2812 driver on hardware).
//!
//! # Glossary
//!
//! - **Raster position:** index of a matrix cell in row-major order, top-left first.
//! - **Physical position:** index of an LED along the strip's wiring.
//! - **Frame:** one word per LED, sent together to refresh the whole matrix.
//! - **PIO ([Programmable I/O](https://medium.com/data-science/nine-pico-pio-wats-with-rust-part-1-9d062067dc25)):**
//!   the Pico's small state machines; one of them generates the WS2812 bit stream.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: the board must be selected (unless testing with host feature)
#[cfg(all(not(feature = "pico1"), not(feature = "host")))]
compile_error!("Must enable the board feature 'pico1' (or 'host' for tests)");

#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the architecture feature 'arm' (or 'host' for tests)");

pub mod blinker;
pub mod button;
pub mod constants;
pub mod digit;
mod error;
pub mod glyph;
pub mod layout;
pub mod led_strip;
pub mod render;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
