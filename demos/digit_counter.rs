//! Digit counter on a 5×5 WS2812 matrix.
//!
//! Wiring (BitDogLab-style board):
//! - matrix data: GPIO 7 (PIO0, state machine 0, DMA channel 0)
//! - button A (up): GPIO 5 to ground
//! - button B (down): GPIO 6 to ground
//! - status LED: GPIO 13
#![no_std]
#![no_main]
#![cfg(not(feature = "host"))]

use core::{convert::Infallible, panic};

use digit_matrix::{
    Result,
    blinker::spawn_status_blink,
    button::spawn_button,
    constants::LED_COUNT,
    digit::{DigitState, Step},
    led_strip::Ws2812Strip,
    render::run_display_loop,
};
use embassy_executor::Spawner;
use embassy_rp::{
    bind_interrupts,
    peripherals::PIO0,
    pio::{InterruptHandler, Pio},
};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

// Blank until the first press.
static DIGIT_STATE: DigitState = DigitState::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    spawn_status_blink(p.PIN_13, spawner)?;

    spawn_button(p.PIN_5, Step::Increment, &DIGIT_STATE, spawner)?;
    spawn_button(p.PIN_6, Step::Decrement, &DIGIT_STATE, spawner)?;

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let mut matrix: Ws2812Strip<'_, PIO0, 0, LED_COUNT> =
        Ws2812Strip::new(&mut common, sm0, p.DMA_CH0, p.PIN_7);

    defmt::info!("digit counter ready");
    run_display_loop(&mut matrix, &DIGIT_STATE).await
}
