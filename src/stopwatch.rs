//! Stopwatch controller tying timekeeping, control inputs and the indicator together.
//!
//! Provides [`Stopwatch`], the single owner of the timekeeping state, and the
//! [`Indicator`] trait for the state LED. The tick and edge handlers are plain
//! methods so the host can call them from whatever interrupt it wires up.

use crate::control::ControlInput;
use crate::display::DisplayDigits;
use crate::selection::{SelectionCounter, SelectionInput};
use crate::timekeeping::Timekeeping;
use crate::types::IndicatorState;
use palette::Srgb;

/// Trait for abstracting the RGB state indicator.
///
/// Implement this for your LED hardware (GPIO, PWM, etc.). Color components are
/// in the range 0.0-1.0; convert them to your hardware's native format. Handle
/// any hardware errors internally - this method cannot fail.
pub trait Indicator {
    /// Sets the indicator to the specified RGB color.
    fn set_color(&mut self, color: Srgb);
}

/// Splits a color into on/off red, green and blue channels.
///
/// For indicators wired straight to GPIO pins. A channel is on at half
/// intensity or more, so the three indicator colors map to green, red and dark.
pub fn digital_channels(color: Srgb) -> [bool; 3] {
    [color.red >= 0.5, color.green >= 0.5, color.blue >= 0.5]
}

/// A stopwatch driven by a 1ms tick and edge-triggered buttons.
///
/// Owns the [`Timekeeping`] counters, the state indicator and the selection
/// counter of the secondary button group.
///
/// # Type Parameters
/// * `L` - Indicator implementation type
pub struct Stopwatch<L: Indicator> {
    timekeeping: Timekeeping,
    indicator: L,
    indicator_state: IndicatorState,
    selection: SelectionCounter,
}

impl<L: Indicator> Stopwatch<L> {
    /// Creates a zeroed, stopped stopwatch with the indicator turned off.
    pub fn new(mut indicator: L) -> Self {
        indicator.set_color(IndicatorState::Off.color());

        Self {
            timekeeping: Timekeeping::new(),
            indicator,
            indicator_state: IndicatorState::Off,
            selection: SelectionCounter::new(),
        }
    }

    /// Periodic tick handler. Call once per millisecond.
    #[inline]
    pub fn tick(&mut self) {
        self.timekeeping.tick();
    }

    /// Applies a decoded control input and updates the indicator.
    pub fn handle_input(&mut self, input: ControlInput) {
        match input {
            ControlInput::Start => {
                self.timekeeping.start();
                self.set_indicator(IndicatorState::Running);
                debug!("started");
            }
            ControlInput::Stop => {
                self.timekeeping.stop();
                self.set_indicator(IndicatorState::Stopped);
                debug!("stopped");
            }
            ControlInput::Reset => {
                self.timekeeping.request_reset();
                self.set_indicator(IndicatorState::Off);
                debug!("reset requested");
            }
            ControlInput::Reserved => {}
        }
    }

    /// Edge handler for the primary button module.
    ///
    /// Unrecognized status bytes are ignored.
    pub fn handle_control_edge(&mut self, status: u8) {
        match ControlInput::try_from(status) {
            Ok(input) => self.handle_input(input),
            Err(_) => trace!("ignoring control status {=u8:#x}", status),
        }
    }

    /// Edge handler for the secondary button group.
    ///
    /// Unrecognized status bytes are ignored.
    pub fn handle_selection_edge(&mut self, status: u8) {
        match SelectionInput::try_from(status) {
            Ok(input) => self.selection.apply(input),
            Err(_) => trace!("ignoring selection status {=u8:#x}", status),
        }
    }

    fn set_indicator(&mut self, state: IndicatorState) {
        self.indicator.set_color(state.color());
        self.indicator_state = state;
    }

    /// Current display digits.
    #[inline]
    pub fn digits(&self) -> DisplayDigits {
        self.timekeeping.digits()
    }

    /// Returns the timekeeping counters and flags.
    pub fn timekeeping(&self) -> &Timekeeping {
        &self.timekeeping
    }

    /// Returns the selection counter of the secondary button group.
    pub fn selection(&self) -> SelectionCounter {
        self.selection
    }

    /// Returns the last state written to the indicator.
    pub fn indicator_state(&self) -> IndicatorState {
        self.indicator_state
    }

    /// Returns a reference to the indicator.
    pub fn indicator(&self) -> &L {
        &self.indicator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StopwatchState;
    use crate::{COLOR_OFF, COLOR_RUNNING, COLOR_STOPPED};

    struct MockIndicator {
        color: Srgb,
        writes: usize,
    }

    impl MockIndicator {
        fn new() -> Self {
            Self {
                color: Srgb::new(0.5, 0.5, 0.5),
                writes: 0,
            }
        }
    }

    impl Indicator for MockIndicator {
        fn set_color(&mut self, color: Srgb) {
            self.color = color;
            self.writes += 1;
        }
    }

    #[test]
    fn new_turns_indicator_off() {
        let stopwatch = Stopwatch::new(MockIndicator::new());
        assert_eq!(stopwatch.indicator().color, COLOR_OFF);
        assert_eq!(stopwatch.indicator().writes, 1);
        assert_eq!(stopwatch.indicator_state(), IndicatorState::Off);
    }

    #[test]
    fn start_and_stop_drive_flag_and_color() {
        let mut stopwatch = Stopwatch::new(MockIndicator::new());

        stopwatch.handle_input(ControlInput::Start);
        assert!(stopwatch.timekeeping().is_running());
        assert_eq!(stopwatch.indicator().color, COLOR_RUNNING);

        stopwatch.handle_input(ControlInput::Stop);
        assert!(!stopwatch.timekeeping().is_running());
        assert_eq!(stopwatch.indicator().color, COLOR_STOPPED);
    }

    #[test]
    fn reset_is_pending_until_next_tick() {
        let mut stopwatch = Stopwatch::new(MockIndicator::new());
        stopwatch.handle_input(ControlInput::Start);
        for _ in 0..1_234 {
            stopwatch.tick();
        }

        stopwatch.handle_input(ControlInput::Reset);
        assert_eq!(stopwatch.timekeeping().state(), StopwatchState::ResetPending);
        assert_eq!(stopwatch.indicator_state(), IndicatorState::Off);
        assert_eq!(stopwatch.timekeeping().seconds(), 1);

        stopwatch.tick();
        assert_eq!(stopwatch.timekeeping().state(), StopwatchState::Stopped);
        assert_eq!(stopwatch.timekeeping().elapsed_millis(), 0);
    }

    #[test]
    fn reserved_and_unknown_inputs_change_nothing() {
        let mut stopwatch = Stopwatch::new(MockIndicator::new());
        stopwatch.handle_control_edge(0x20);
        stopwatch.handle_control_edge(0x00);
        stopwatch.handle_control_edge(0x3C);

        assert_eq!(*stopwatch.timekeeping(), Timekeeping::new());
        assert_eq!(stopwatch.indicator().writes, 1);
    }

    #[test]
    fn digital_channels_threshold_at_half_intensity() {
        assert_eq!(digital_channels(Srgb::new(0.49, 0.5, 1.0)), [false, true, true]);
        assert_eq!(digital_channels(Srgb::new(0.0, 0.0, 0.0)), [false; 3]);
    }

    #[test]
    fn selection_edges_leave_timekeeping_alone() {
        let mut stopwatch = Stopwatch::new(MockIndicator::new());
        stopwatch.handle_selection_edge(0x04);
        stopwatch.handle_selection_edge(0x55);

        assert_eq!(stopwatch.selection().value(), 15);
        assert_eq!(*stopwatch.timekeeping(), Timekeeping::new());
    }
}
