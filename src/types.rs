//! Core state and error types.

use crate::{COLOR_OFF, COLOR_RUNNING, COLOR_STOPPED};
use palette::Srgb;

/// Logical state of the stopwatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StopwatchState {
    /// Time is accumulating on every tick.
    Running,

    /// Counters are frozen.
    Stopped,

    /// A reset was requested and will be serviced by the next tick.
    ResetPending,
}

/// What the state indicator LED shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorState {
    /// Start was pressed.
    Running,

    /// Stop was pressed.
    Stopped,

    /// Reset was pressed, or nothing has happened yet.
    Off,
}

impl IndicatorState {
    /// Color written to the indicator for this state.
    #[inline]
    pub fn color(self) -> Srgb {
        match self {
            IndicatorState::Running => COLOR_RUNNING,
            IndicatorState::Stopped => COLOR_STOPPED,
            IndicatorState::Off => COLOR_OFF,
        }
    }
}

/// Names a timekeeping counter in [`TimekeepingError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Field {
    SubMillis,
    Millis,
    Seconds,
    Minutes,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Field::SubMillis => "sub-millisecond ticks",
            Field::Millis => "milliseconds",
            Field::Seconds => "seconds",
            Field::Minutes => "minutes",
        }
    }
}

/// Errors building a timekeeping state from explicit counter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimekeepingError {
    /// A counter value lies outside its digit range.
    OutOfRange {
        /// Offending counter.
        field: Field,
        /// Value that was supplied.
        value: u8,
        /// Largest value allowed for this counter.
        max: u8,
    },
}

impl core::fmt::Display for TimekeepingError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TimekeepingError::OutOfRange { field, value, max } => {
                write!(
                    f,
                    "{} out of range: {} (allowed 0..={})",
                    field.name(),
                    value,
                    max
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for TimekeepingError {}

/// Errors decoding an input status byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InputError {
    /// The status byte does not name any button of the group.
    Unrecognized(u8),
}

impl core::fmt::Display for InputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InputError::Unrecognized(status) => {
                write!(f, "unrecognized input status {:#04x}", status)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indicator_colors_are_distinct() {
        assert_ne!(IndicatorState::Running.color(), IndicatorState::Stopped.color());
        assert_ne!(IndicatorState::Running.color(), IndicatorState::Off.color());
        assert_eq!(IndicatorState::Off.color(), COLOR_OFF);
    }
}
