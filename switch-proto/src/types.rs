//! Core protocol types: operating mode and sampled switch state.

/// Output path selected by the mode switch.
///
/// The numeric codes are fixed by the selector hardware contract:
/// 0 = serial, 1 = uart, 2 = parallel. Any other code reports as
/// `unknown` and is never dispatched to a transmit path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Bit-bang the value out over the two-wire clock/data link.
    Serial,
    /// Report the value as hex over the UART status link.
    Uart,
    /// Same transmit path as [`Mode::Serial`]; the two are
    /// indistinguishable on the wire.
    Parallel,
    /// Unrecognized selector code.
    Unknown,
}

impl Mode {
    /// Map a raw selector code to a mode.
    #[inline]
    #[must_use]
    pub const fn from_code(code: u8) -> Self {
        match code {
            0 => Mode::Serial,
            1 => Mode::Uart,
            2 => Mode::Parallel,
            _ => Mode::Unknown,
        }
    }

    /// Name used on the wire in status reports.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Mode::Serial => "serial",
            Mode::Uart => "uart",
            Mode::Parallel => "parallel",
            Mode::Unknown => "unknown",
        }
    }
}

/// One sample of the switch inputs: mode selector plus 4-bit DIP value.
///
/// Recomputed on every sample, never persisted. `value` is always in
/// `0..=15`; the constructor masks it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchState {
    pub mode: Mode,
    pub value: u8,
}

impl SwitchState {
    /// Create a sample, masking the value to its 4 valid bits.
    #[must_use]
    pub const fn new(mode: Mode, value: u8) -> Self {
        Self {
            mode,
            value: value & 0x0F,
        }
    }
}
