//! Compile-time constants for the stopwatch.
//!
//! The time base is fixed: the tick handler must be called once per
//! [`TICK_PERIOD_MS`] by the host's hardware timer.

/// Period of the hardware timer interrupt driving [`Stopwatch::tick`](crate::Stopwatch::tick).
pub const TICK_PERIOD_MS: u32 = 1;

/// Highest value of the sub-step tick counter before it carries.
pub const SUB_MILLIS_MAX: u8 = 99;

/// Highest value of the millisecond display digit (one step per 100 ticks).
pub const MILLIS_MAX: u8 = 9;

/// Highest value of the seconds counter.
pub const SECONDS_MAX: u8 = 59;

/// Highest value of the minutes digit. The counter wraps back to 0 after it.
pub const MINUTES_MAX: u8 = 9;

/// Highest value of the 4-bit selection counter.
pub const SELECTION_MAX: u8 = 15;

/// Status bytes reported by the primary four-button module.
pub mod control_status {
    /// BTN0: start.
    pub const START: u8 = 0x04;
    /// BTN1: stop.
    pub const STOP: u8 = 0x08;
    /// BTN2: reset.
    pub const RESET: u8 = 0x10;
    /// BTN3: reserved, no action.
    pub const RESERVED: u8 = 0x20;
}

/// Status bytes reported by the secondary two-button group.
pub mod selection_status {
    /// Increments the selection counter.
    pub const UP: u8 = 0x08;
    /// Decrements the selection counter.
    pub const DOWN: u8 = 0x04;
}
