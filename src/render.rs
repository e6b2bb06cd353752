//! Turns the current digit into a frame for the matrix and keeps the matrix refreshed.

use embassy_time::Timer;

use crate::constants::{LED_COUNT, OFF_COLOR, ON_COLOR, REFRESH_INTERVAL};
use crate::digit::{Digit, DigitState};
use crate::glyph::is_lit;
use crate::layout::raster_for_physical;
use crate::led_strip::{Frame1d, FrameSink};

/// A full refresh of the matrix: one color per physical LED.
pub type Frame = Frame1d<LED_COUNT>;

/// Builds the frame showing `digit`, or an all-off frame for `None`.
///
/// Pixel `p` is [`ON_COLOR`] if the digit's glyph lights the raster cell wired to
/// physical LED `p`, otherwise [`OFF_COLOR`].
#[must_use]
pub fn frame_for(digit: Option<Digit>) -> Frame {
    let mut frame = Frame::filled(OFF_COLOR);
    if let Some(digit) = digit {
        for (physical, pixel) in frame.iter_mut().enumerate() {
            if is_lit(digit, raster_for_physical(physical)) {
                *pixel = ON_COLOR;
            }
        }
    }
    frame
}

/// Sends the frame for `digit` to `sink`: exactly [`LED_COUNT`] pixels, physical LED 0 first.
pub async fn render<S: FrameSink<LED_COUNT>>(digit: Option<Digit>, sink: &mut S) {
    sink.write_frame(frame_for(digit)).await;
}

/// Re-renders the current digit every [`REFRESH_INTERVAL`], forever.
///
/// The only wait besides the interval is `sink` applying backpressure.
pub async fn run_display_loop<S: FrameSink<LED_COUNT>>(sink: &mut S, digit_state: &DigitState) -> ! {
    #[cfg(not(feature = "host"))]
    defmt::info!("display loop: refreshing every {} ms", REFRESH_INTERVAL.as_millis());
    loop {
        render(digit_state.current(), sink).await;
        Timer::after(REFRESH_INTERVAL).await;
    }
}
