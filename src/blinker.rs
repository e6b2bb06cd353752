//! A status LED that toggles on a fixed period, independent of the matrix.

use embassy_time::Ticker;
use embedded_hal::digital::OutputPin;

use crate::constants::BLINK_INTERVAL;
use crate::{Error, Result};

/// On/off state of the status LED. Starts off.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
struct BlinkState(bool);

impl BlinkState {
    const fn toggle(&mut self) -> bool {
        self.0 = !self.0;
        self.0
    }
}

/// Drives a status LED, flipping it on every [`tick`](Self::tick).
///
/// ```rust
/// use core::convert::Infallible;
/// use digit_matrix::blinker::Blinker;
/// use embedded_hal::digital::{ErrorType, OutputPin};
///
/// #[derive(Default)]
/// struct FakePin(bool);
///
/// impl ErrorType for FakePin {
///     type Error = Infallible;
/// }
///
/// impl OutputPin for FakePin {
///     fn set_low(&mut self) -> Result<(), Infallible> {
///         self.0 = false;
///         Ok(())
///     }
///     fn set_high(&mut self) -> Result<(), Infallible> {
///         self.0 = true;
///         Ok(())
///     }
/// }
///
/// let mut blinker = Blinker::new(FakePin::default());
/// assert_eq!(blinker.tick().ok(), Some(true));
/// assert_eq!(blinker.tick().ok(), Some(false));
/// ```
#[derive(Debug)]
pub struct Blinker<P: OutputPin> {
    pin: P,
    state: BlinkState,
}

impl<P: OutputPin> Blinker<P> {
    /// Wraps `pin`, which should already be driven low.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            state: BlinkState::default(),
        }
    }

    /// Flips the LED and returns its new level (`true` = on).
    ///
    /// # Errors
    ///
    /// Returns [`Error::CannotSetOutputState`] if the pin rejects the write.
    pub fn tick(&mut self) -> Result<bool> {
        let on = self.state.toggle();
        self.pin
            .set_state(on.into())
            .map_err(|_| Error::CannotSetOutputState)?;
        Ok(on)
    }
}

/// Toggles the LED on `pin` every [`BLINK_INTERVAL`], forever. The first toggle (to on)
/// comes one interval after the call.
///
/// A failed write is logged and the loop keeps its cadence.
pub async fn run_status_blink<P: OutputPin>(pin: P) -> ! {
    let mut blinker = Blinker::new(pin);
    let mut ticker = Ticker::every(BLINK_INTERVAL);
    #[cfg(not(feature = "host"))]
    defmt::info!("status blink every {} ms", BLINK_INTERVAL.as_millis());
    loop {
        ticker.next().await;
        if blinker.tick().is_err() {
            #[cfg(not(feature = "host"))]
            defmt::warn!("status LED write failed");
        }
    }
}

#[cfg(not(feature = "host"))]
pub use blink_task::spawn_status_blink;

#[cfg(not(feature = "host"))]
mod blink_task {
    use embassy_executor::Spawner;
    use embassy_rp::Peri;
    use embassy_rp::gpio::{Level, Output, Pin};

    use super::run_status_blink;
    use crate::Result;

    /// Starts a task that toggles the LED on `pin` every
    /// [`BLINK_INTERVAL`](crate::constants::BLINK_INTERVAL).
    ///
    /// # Errors
    ///
    /// Returns an error if the background task cannot be spawned.
    pub fn spawn_status_blink(pin: Peri<'static, impl Pin>, spawner: Spawner) -> Result<()> {
        spawner.spawn(status_blink_task(Output::new(pin, Level::Low)))?;
        Ok(())
    }

    #[embassy_executor::task]
    async fn status_blink_task(pin: Output<'static>) -> ! {
        run_status_blink(pin).await
    }
}
