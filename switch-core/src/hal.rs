//! Capability traits between the control logic and the board.
//!
//! The firmware crate implements these for real peripherals; host tests
//! implement them with scripted mocks. All implementations must be
//! `#![no_std]` compatible with no heap allocation.

use core::future::Future;

/// A single digital input pin.
pub trait DigitalInput {
    /// Read the current level; `true` is logic high.
    fn is_high(&mut self) -> bool;
}

/// A single push-pull digital output pin.
pub trait DigitalOutput {
    /// Drive the pin high (`true`) or low (`false`).
    fn set_level(&mut self, high: bool);
}

/// Monotonic millisecond counter, wrapping at `u32::MAX` (~49.7 days).
///
/// All timing comparisons against this counter must use wrapping
/// subtraction.
pub trait TickSource {
    /// Milliseconds since boot, wrapping.
    fn now_ms(&self) -> u32;
}

/// Cooperative microsecond delay.
///
/// All settle and bit-timing waits go through this so they are calibrated
/// time units rather than CPU-speed-dependent spin counts. On hardware
/// this is a timer wait; in tests it completes immediately.
pub trait DelayUs {
    fn delay_us(&mut self, us: u32) -> impl Future<Output = ()>;
}

/// Timeout applied to a single status link transmit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendTimeout {
    /// Fail with [`LinkError::Timeout`] if the transmit has not completed
    /// within this many milliseconds.
    Bounded(u32),
    /// Wait for completion with no bound. A stalled transport blocks the
    /// caller, and with it the whole control loop.
    Unbounded,
}

/// Error type for status link operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// The bounded timeout elapsed before the transmit completed.
    Timeout,
    /// Transport-level I/O error.
    Io,
}

/// Byte transmit toward the host over the reliable serial transport.
///
/// The transport itself is configured by the board (38400 8N1); this
/// trait only carries bytes and the per-call timeout policy.
pub trait StatusLink {
    /// Send `bytes`, observing `timeout`.
    fn send(
        &mut self,
        bytes: &[u8],
        timeout: SendTimeout,
    ) -> impl Future<Output = Result<(), LinkError>>;
}
