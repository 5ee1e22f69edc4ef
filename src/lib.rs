#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`Timekeeping`**: The four counters (sub-step ticks, millis digit, seconds, minutes) plus the run and reset-request flags
//! - **`Stopwatch`**: Single owner of the timekeeping state; exposes the tick handler and the edge handlers
//! - **`SharedStopwatch`**: Critical-section wrapper so a `static` stopwatch can be reached from interrupts
//! - **`DisplayDigits`**: The four digits to show, recomputed on every main-loop pass
//! - **`Indicator`**: Trait to implement for your state LED
//! - **`DigitDisplay`**: Trait to implement for your seven-segment display
//! - **`ControlInput`**: Start, Stop, Reset and the reserved fourth button
//! - **`SelectionCounter`**: 4-bit wrapping counter driven by the secondary button group
//!
//! Indicator colors are `Srgb<f32>` (0.0-1.0 range). When implementing `Indicator`
//! for your hardware, convert these values to your device's native format.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

mod fmt;

pub mod config;
pub mod types;
pub mod timekeeping;
pub mod display;
pub mod control;
pub mod selection;
pub mod stopwatch;
pub mod shared;
pub mod main_loop;

pub use control::ControlInput;
pub use display::{DigitDisplay, DisplayDigits};
pub use main_loop::{run, service};
pub use selection::{SelectionCounter, SelectionInput};
pub use shared::SharedStopwatch;
pub use stopwatch::{Indicator, Stopwatch, digital_channels};
pub use timekeeping::Timekeeping;
pub use types::{Field, IndicatorState, InputError, StopwatchState, TimekeepingError};

/// Indicator color while running.
pub const COLOR_RUNNING: Srgb = Srgb::new(0.0, 1.0, 0.0);

/// Indicator color after a stop.
pub const COLOR_STOPPED: Srgb = Srgb::new(1.0, 0.0, 0.0);

/// Indicator color after a reset and at power-up.
pub const COLOR_OFF: Srgb = Srgb::new(0.0, 0.0, 0.0);
