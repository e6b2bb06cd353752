//! The digit shown on the matrix and the shared cell that holds it.
//!
//! See [`DigitState`] for how the button tasks and the display loop share the value.

use portable_atomic::{AtomicI8, Ordering};

use crate::constants::DIGIT_COUNT;
use crate::{Error, Result};

/// Raw value meaning "show nothing". Only ever present before the first accepted press.
const BLANK: i8 = -1;

// ============================================================================
// Digit - A validated value in 0..=9
// ============================================================================

/// A decimal digit, always in `0..=9`.
///
/// ```rust
/// use digit_matrix::digit::Digit;
///
/// assert_eq!(Digit::new(9).map(Digit::index).ok(), Some(9));
/// assert!(Digit::new(10).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digit(u8);

impl Digit {
    /// Creates a digit, rejecting values of 10 and above.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DigitOutOfRange`] if `value > 9`.
    pub const fn new(value: u8) -> Result<Self> {
        if value < DIGIT_COUNT {
            Ok(Self(value))
        } else {
            Err(Error::DigitOutOfRange(value))
        }
    }

    /// The digit as an index into per-digit tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

// ============================================================================
// Step - Which way a button moves the digit
// ============================================================================

/// Direction a button moves the displayed digit.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Step {
    /// Add one, wrapping 9 to 0.
    Increment,
    /// Subtract one, wrapping 0 to 9.
    Decrement,
}

impl Step {
    /// Applies the step to a raw state value (`-1` or `0..=9`).
    ///
    /// The blank value takes part in the arithmetic like any other, so
    /// incrementing from blank gives 0 and decrementing gives 8.
    #[expect(
        clippy::arithmetic_side_effects,
        clippy::integer_division_remainder_used,
        reason = "raw is in -1..=9, so neither sum overflows and the divisor is 10"
    )]
    const fn apply(self, raw: i8) -> i8 {
        let count = DIGIT_COUNT as i8;
        match self {
            Self::Increment => (raw + 1) % count,
            Self::Decrement => (raw - 1 + count) % count,
        }
    }
}

// ============================================================================
// DigitState - Shared cell between button tasks and the display loop
// ============================================================================

/// The currently displayed digit, or blank before the first press.
///
/// Written by the button tasks and read by the display loop. The value lives in one
/// `AtomicI8`: stores use `Release` and loads use `Acquire`, so a reader that observes a new
/// digit also observes everything the writer did before storing it. Read-modify-write goes
/// through `portable_atomic`, which falls back to a critical section on the RP2040's
/// Cortex-M0+ cores (no native compare-and-swap).
///
/// The display loop may render a value one press behind; it re-reads on every refresh.
///
/// ```rust
/// use digit_matrix::digit::{Digit, DigitState, Step};
///
/// static DIGIT_STATE: DigitState = DigitState::new();
///
/// assert_eq!(DIGIT_STATE.current(), None);
/// assert_eq!(DIGIT_STATE.step(Step::Increment), Digit::new(0).expect("digit"));
/// assert_eq!(DIGIT_STATE.step(Step::Decrement), Digit::new(9).expect("digit"));
/// ```
#[derive(Debug)]
pub struct DigitState(AtomicI8);

impl DigitState {
    /// Creates a blank state.
    #[must_use]
    pub const fn new() -> Self {
        Self(AtomicI8::new(BLANK))
    }

    /// The digit to display, or `None` while blank.
    #[must_use]
    pub fn current(&self) -> Option<Digit> {
        let raw = self.0.load(Ordering::Acquire);
        u8::try_from(raw).ok().and_then(|value| Digit::new(value).ok())
    }

    /// Moves the digit one step and returns the new value.
    ///
    /// Never blocks; safe to call from any task or interrupt context.
    pub fn step(&self, step: Step) -> Digit {
        let previous = self
            .0
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |raw| {
                Some(step.apply(raw))
            })
            .unwrap_or_else(|raw| raw);
        // apply() always lands in 0..=9.
        Digit(step.apply(previous).unsigned_abs())
    }
}

impl Default for DigitState {
    fn default() -> Self {
        Self::new()
    }
}
