//! WS2812 strip on a PIO state machine, via `embassy-rp`'s WS2812 program.

use embassy_rp::Peri;
use embassy_rp::dma::Channel;
use embassy_rp::pio::{Common, Instance, PioPin, StateMachine};
use embassy_rp::pio_programs::ws2812::{Grb, PioWs2812, PioWs2812Program};

use super::{Frame1d, FrameSink};

/// A strip of `N` WS2812 LEDs driven from one PIO state machine, fed by DMA.
///
/// The driver packs each pixel in GRB order (the same layout as
/// [`encode`](super::encode), shifted into the top three bytes of the FIFO word) and waits
/// for the latch period after each frame.
pub struct Ws2812Strip<'d, PIO: Instance, const SM: usize, const N: usize> {
    driver: PioWs2812<'d, PIO, SM, N, Grb>,
}

impl<'d, PIO: Instance, const SM: usize, const N: usize> Ws2812Strip<'d, PIO, SM, N> {
    /// Loads the WS2812 program into `common` and starts `sm` driving `pin`.
    pub fn new(
        common: &mut Common<'d, PIO>,
        sm: StateMachine<'d, PIO, SM>,
        dma: Peri<'d, impl Channel>,
        pin: Peri<'d, impl PioPin>,
    ) -> Self {
        let program = PioWs2812Program::new(common);
        let driver = PioWs2812::new(common, sm, dma, pin, &program);
        defmt::info!("ws2812: {} LEDs on state machine {}", N, SM);
        Self { driver }
    }
}

impl<PIO: Instance, const SM: usize, const N: usize> FrameSink<N> for Ws2812Strip<'_, PIO, SM, N> {
    async fn write_frame(&mut self, frame: Frame1d<N>) {
        self.driver.write(&frame.0).await;
    }
}
