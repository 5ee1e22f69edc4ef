//! Timekeeping counters and the per-tick carry chain.
//!
//! [`Timekeeping`] holds the four counters and the two control flags. Only
//! [`Timekeeping::tick`] moves the counters; the flag setters are what the
//! control-input handler calls.

use crate::config::{MILLIS_MAX, MINUTES_MAX, SECONDS_MAX, SUB_MILLIS_MAX};
use crate::display::DisplayDigits;
use crate::types::{Field, StopwatchState, TimekeepingError};

/// Elapsed-time counters plus the run and reset-request flags.
///
/// Counter ranges:
/// - `sub_millis`: 0..=99, one step per 1ms tick
/// - `millis`: 0..=9, one step per 100 ticks
/// - `seconds`: 0..=59
/// - `minutes`: 0..=9, wraps to 0 after 9:59.9
///
/// Every method keeps the counters inside these ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Timekeeping {
    sub_millis: u8,
    millis: u8,
    seconds: u8,
    minutes: u8,
    running: bool,
    reset_requested: bool,
}

impl Timekeeping {
    /// Creates a zeroed, stopped state.
    pub const fn new() -> Self {
        Self {
            sub_millis: 0,
            millis: 0,
            seconds: 0,
            minutes: 0,
            running: false,
            reset_requested: false,
        }
    }

    /// Creates a stopped state holding the given counter values.
    ///
    /// # Errors
    /// * `OutOfRange` - A value exceeds its counter's range
    pub fn from_parts(
        minutes: u8,
        seconds: u8,
        millis: u8,
        sub_millis: u8,
    ) -> Result<Self, TimekeepingError> {
        check(Field::Minutes, minutes, MINUTES_MAX)?;
        check(Field::Seconds, seconds, SECONDS_MAX)?;
        check(Field::Millis, millis, MILLIS_MAX)?;
        check(Field::SubMillis, sub_millis, SUB_MILLIS_MAX)?;

        Ok(Self {
            sub_millis,
            millis,
            seconds,
            minutes,
            running: false,
            reset_requested: false,
        })
    }

    /// Advances the counters by one tick and services a pending reset.
    ///
    /// When running, the sub-step counter is incremented and any overflow is
    /// carried through milliseconds, seconds and minutes in that order within
    /// this call. A pending reset is checked on every call, running or not: it
    /// zeroes all counters and stops accumulation.
    pub fn tick(&mut self) {
        if self.running {
            self.advance();
        }

        if self.reset_requested {
            self.reset_requested = false;
            self.running = false;
            self.sub_millis = 0;
            self.millis = 0;
            self.seconds = 0;
            self.minutes = 0;
            debug!("reset serviced");
        }
    }

    fn advance(&mut self) {
        self.sub_millis += 1;
        if self.sub_millis <= SUB_MILLIS_MAX {
            return;
        }
        self.sub_millis = 0;

        self.millis += 1;
        if self.millis <= MILLIS_MAX {
            return;
        }
        self.millis = 0;

        self.seconds += 1;
        if self.seconds <= SECONDS_MAX {
            return;
        }
        self.seconds = 0;

        self.minutes += 1;
        if self.minutes > MINUTES_MAX {
            // No hour digit on the display.
            self.minutes = 0;
            info!("minutes wrapped past {=u8}", MINUTES_MAX);
        }
    }

    /// Sets the run flag. Counters are untouched.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Clears the run flag. Counters are untouched.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Flags a reset for the next [`tick`](Self::tick) to service.
    pub fn request_reset(&mut self) {
        self.reset_requested = true;
    }

    /// Current logical state. A pending reset takes precedence.
    pub fn state(&self) -> StopwatchState {
        if self.reset_requested {
            StopwatchState::ResetPending
        } else if self.running {
            StopwatchState::Running
        } else {
            StopwatchState::Stopped
        }
    }

    /// Projects the counters onto the four display digits.
    #[inline]
    pub fn digits(&self) -> DisplayDigits {
        DisplayDigits::from_timekeeping(self)
    }

    /// Total time represented by the counters, in milliseconds.
    pub fn elapsed_millis(&self) -> u32 {
        self.minutes as u32 * 60_000
            + self.seconds as u32 * 1_000
            + self.millis as u32 * 100
            + self.sub_millis as u32
    }

    /// Ticks since the last millisecond-digit step (0..=99).
    pub fn sub_millis(&self) -> u8 {
        self.sub_millis
    }

    /// Millisecond display digit (0..=9).
    pub fn millis(&self) -> u8 {
        self.millis
    }

    /// Seconds (0..=59).
    pub fn seconds(&self) -> u8 {
        self.seconds
    }

    /// Minutes (0..=9).
    pub fn minutes(&self) -> u8 {
        self.minutes
    }

    /// Returns true if the run flag is set.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Returns true if a reset is waiting for the next tick.
    pub fn is_reset_pending(&self) -> bool {
        self.reset_requested
    }
}

fn check(field: Field, value: u8, max: u8) -> Result<(), TimekeepingError> {
    if value > max {
        return Err(TimekeepingError::OutOfRange { field, value, max });
    }
    Ok(())
}
