//! Background button monitoring with a spawned task.

use embassy_executor::Spawner;
use embassy_rp::Peri;
use embassy_rp::gpio::{Input, Pin, Pull};
use embassy_time::Instant;

use super::ButtonHandler;
use crate::Result;
use crate::digit::{DigitState, Step};

/// Starts a task that steps `digit_state` each time the button on `pin` is pressed.
///
/// The pin is pulled up; a press is a falling edge.
///
/// # Errors
///
/// Returns an error if the background task cannot be spawned. At most two button tasks
/// can run at once.
pub fn spawn_button(
    pin: Peri<'static, impl Pin>,
    step: Step,
    digit_state: &'static DigitState,
    spawner: Spawner,
) -> Result<()> {
    let input = Input::new(pin, Pull::Up);
    spawner.spawn(button_task(input, ButtonHandler::new(step), digit_state))?;
    Ok(())
}

#[embassy_executor::task(pool_size = 2)]
async fn button_task(
    mut input: Input<'static>,
    mut handler: ButtonHandler,
    digit_state: &'static DigitState,
) -> ! {
    defmt::info!("button task started: {:?}", handler.step());
    loop {
        input.wait_for_falling_edge().await;
        if handler.on_press(Instant::now(), digit_state) {
            defmt::debug!(
                "button {:?}: digit now {:?}",
                handler.step(),
                digit_state.current()
            );
        } else {
            defmt::trace!("button {:?}: press ignored (bounce)", handler.step());
        }
    }
}
