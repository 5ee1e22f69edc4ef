//! Secondary two-button group and its 4-bit selection counter.
//!
//! Independent of timekeeping: the stopwatch only hosts the counter so both
//! edge interrupts share one owner.

use crate::config::{SELECTION_MAX, selection_status};
use crate::types::InputError;

/// Buttons of the secondary group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SelectionInput {
    /// Count up (status `0x08`).
    Up,
    /// Count down (status `0x04`).
    Down,
}

impl TryFrom<u8> for SelectionInput {
    type Error = InputError;

    fn try_from(status: u8) -> Result<Self, Self::Error> {
        match status {
            selection_status::UP => Ok(SelectionInput::Up),
            selection_status::DOWN => Ok(SelectionInput::Down),
            other => Err(InputError::Unrecognized(other)),
        }
    }
}

/// Wrapping counter over `0..=15`.
///
/// ```
/// use tick_stopwatch::{SelectionCounter, SelectionInput};
///
/// let mut counter = SelectionCounter::new();
/// counter.apply(SelectionInput::Down);
/// assert_eq!(counter.value(), 15);
/// counter.apply(SelectionInput::Up);
/// assert_eq!(counter.value(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SelectionCounter(u8);

impl SelectionCounter {
    /// Creates a counter at 0.
    pub const fn new() -> Self {
        Self(0)
    }

    /// Steps up, wrapping 15 to 0.
    pub fn increment(&mut self) {
        self.0 = if self.0 >= SELECTION_MAX { 0 } else { self.0 + 1 };
    }

    /// Steps down, wrapping 0 to 15.
    pub fn decrement(&mut self) {
        self.0 = if self.0 == 0 { SELECTION_MAX } else { self.0 - 1 };
    }

    /// Steps in the direction of a decoded button press.
    pub fn apply(&mut self, input: SelectionInput) {
        match input {
            SelectionInput::Up => self.increment(),
            SelectionInput::Down => self.decrement(),
        }
    }

    /// Current value (0..=15).
    pub fn value(&self) -> u8 {
        self.0
    }
}
