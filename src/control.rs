//! Primary control inputs.

use crate::config::control_status;
use crate::types::InputError;

/// Buttons of the primary four-button module.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlInput {
    /// Begin accumulating time.
    Start,
    /// Freeze the counters.
    Stop,
    /// Zero the counters on the next tick and stop.
    Reset,
    /// Fourth button. Wired but has no action.
    Reserved,
}

impl TryFrom<u8> for ControlInput {
    type Error = InputError;

    /// Decodes the status byte reported by the edge interrupt.
    fn try_from(status: u8) -> Result<Self, Self::Error> {
        match status {
            control_status::START => Ok(ControlInput::Start),
            control_status::STOP => Ok(ControlInput::Stop),
            control_status::RESET => Ok(ControlInput::Reset),
            control_status::RESERVED => Ok(ControlInput::Reserved),
            other => Err(InputError::Unrecognized(other)),
        }
    }
}

impl From<ControlInput> for u8 {
    fn from(input: ControlInput) -> Self {
        match input {
            ControlInput::Start => control_status::START,
            ControlInput::Stop => control_status::STOP,
            ControlInput::Reset => control_status::RESET,
            ControlInput::Reserved => control_status::RESERVED,
        }
    }
}
