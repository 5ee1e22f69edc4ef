//! Display digit extraction and the rendering collaborator trait.

use crate::timekeeping::Timekeeping;

/// Trait for abstracting the four-digit seven-segment display.
///
/// Implement this for your display driver (shift registers, direct GPIO
/// multiplexing, a MAX7219, etc.). The main loop calls [`render`](Self::render)
/// on every pass without pacing, so any multiplexing delay belongs here.
pub trait DigitDisplay {
    /// Shows the given digits. Handle hardware errors internally - this
    /// method cannot fail.
    fn render(&mut self, digits: &DisplayDigits);
}

/// The four decimal digits shown on the display.
///
/// Ordered from the rightmost position: `[millis, seconds % 10, seconds / 10, minutes]`.
/// Recomputed from [`Timekeeping`] on every main-loop pass and never stored as
/// a source of truth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayDigits([u8; 4]);

impl DisplayDigits {
    /// Extracts the digits from a timekeeping state.
    pub fn from_timekeeping(state: &Timekeeping) -> Self {
        let seconds = state.seconds();
        Self([state.millis(), seconds % 10, seconds / 10, state.minutes()])
    }

    /// Millisecond digit (position 0).
    #[inline]
    pub fn millis(&self) -> u8 {
        self.0[0]
    }

    /// Ones digit of the seconds (position 1).
    #[inline]
    pub fn seconds_ones(&self) -> u8 {
        self.0[1]
    }

    /// Tens digit of the seconds (position 2).
    #[inline]
    pub fn seconds_tens(&self) -> u8 {
        self.0[2]
    }

    /// Minute digit (position 3).
    #[inline]
    pub fn minutes(&self) -> u8 {
        self.0[3]
    }

    /// Digits in display order.
    #[inline]
    pub fn as_array(&self) -> [u8; 4] {
        self.0
    }

    /// Iterates the digits in display order.
    pub fn iter(&self) -> core::slice::Iter<'_, u8> {
        self.0.iter()
    }
}

impl From<DisplayDigits> for [u8; 4] {
    fn from(digits: DisplayDigits) -> Self {
        digits.0
    }
}

impl From<&Timekeeping> for DisplayDigits {
    fn from(state: &Timekeeping) -> Self {
        Self::from_timekeeping(state)
    }
}
