//! Debounced push-buttons that step the displayed digit.
//!
//! Each button gets its own [`ButtonHandler`]: a falling edge is accepted only if at least
//! [`DEBOUNCE_WINDOW`] has passed since that button's last accepted press. Accepted presses
//! step the shared [`DigitState`]; rejected ones are dropped without a trace.
//!
//! Buttons are active-low: the pin is pulled up and a press pulls it to ground. On
//! hardware, [`spawn_button`] starts a task per button that waits for falling edges and
//! feeds them to the handler.

use embassy_time::{Duration, Instant};

use crate::constants::DEBOUNCE_WINDOW;
use crate::digit::{DigitState, Step};

#[cfg(not(feature = "host"))]
mod button_watch;
#[cfg(not(feature = "host"))]
pub use button_watch::spawn_button;

// ============================================================================
// Debouncer - Minimum spacing between accepted presses
// ============================================================================

/// Accepts an event only if `window` has elapsed since the last accepted one.
///
/// The clock starts at boot (`Instant` zero), so presses in the first `window` after boot are
/// ignored. Rejected events do not move the reference point.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Debouncer {
    window: Duration,
    last_accepted: Instant,
}

impl Debouncer {
    /// Creates a debouncer whose last accepted event is at boot.
    #[must_use]
    pub const fn new(window: Duration) -> Self {
        Self {
            window,
            last_accepted: Instant::from_ticks(0),
        }
    }

    /// Decides whether an event at `now` counts, recording it if so.
    pub fn accept(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_accepted) < self.window {
            return false;
        }
        self.last_accepted = now;
        true
    }
}

// ============================================================================
// ButtonHandler - Edge callback for one button
// ============================================================================

/// Reacts to one button's falling edges.
///
/// [`on_press`](Self::on_press) only compares timestamps and does one atomic
/// update, so it is fine to call from an interrupt-driven task.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ButtonHandler {
    step: Step,
    debouncer: Debouncer,
}

impl ButtonHandler {
    /// Creates a handler that applies `step` on each accepted press.
    #[must_use]
    pub const fn new(step: Step) -> Self {
        Self {
            step,
            debouncer: Debouncer::new(DEBOUNCE_WINDOW),
        }
    }

    /// Which way this button moves the digit.
    #[must_use]
    pub const fn step(&self) -> Step {
        self.step
    }

    /// Handles a falling edge (a press, on an active-low button) seen at `now`.
    /// Returns whether the press was accepted.
    pub fn on_press(&mut self, now: Instant, digit_state: &DigitState) -> bool {
        if !self.debouncer.accept(now) {
            return false;
        }
        digit_state.step(self.step);
        true
    }
}
