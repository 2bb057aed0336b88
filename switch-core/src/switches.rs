//! Sampling of the DIP bank and the mode selector.

use crate::hal::DigitalInput;
use switch_proto::Mode;

/// A 4-position DIP switch bank read as independent digital inputs.
///
/// Each line is active-low with a pull-up: bit *i* of the result is set
/// when pin *i* reads logic low. Reads are pure, no side effects.
pub struct DipSwitch<I> {
    pins: [I; 4],
}

impl<I: DigitalInput> DipSwitch<I> {
    /// Wrap the four input pins, LSB first.
    pub fn new(pins: [I; 4]) -> Self {
        Self { pins }
    }

    /// Read the current 4-bit value (0..=15).
    pub fn read(&mut self) -> u8 {
        let mut value = 0;
        for (i, pin) in self.pins.iter_mut().enumerate() {
            if !pin.is_high() {
                value |= 1 << i;
            }
        }
        value
    }
}

/// Source of the current operating mode.
pub trait ModeSelect {
    fn read_mode(&mut self) -> Mode;
}

/// Selector stand-in that always returns one mode.
///
/// The real switch-to-GPIO mapping is not defined by the board schematic
/// yet and has to be supplied by the integrator.
// TODO: replace with a GPIO-backed selector once the front-panel wiring
// is finalized.
pub struct FixedMode(pub Mode);

impl ModeSelect for FixedMode {
    fn read_mode(&mut self) -> Mode {
        self.0
    }
}
