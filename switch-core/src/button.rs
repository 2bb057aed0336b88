//! Debounced one-shot press detection for the transmit button.
//!
//! The button is active-high with no pull, mechanically noisy, and polled
//! rather than interrupt-driven, so the polling cadence bounds the
//! debounce precision. The sequence is: see a pressed level, wait one
//! settle delay, re-read; only a confirmed press fires. After firing the
//! caller holds in [`PushButton::wait_release`] so a press of any length
//! triggers exactly once.

use crate::hal::{DelayUs, DigitalInput};

/// Default settle delay between the first read and the confirming
/// re-read, in microseconds.
pub const DEFAULT_SETTLE_US: u32 = 500;

/// Debounced momentary push button.
pub struct PushButton<I, D> {
    pin: I,
    delay: D,
    settle_us: u32,
}

impl<I: DigitalInput, D: DelayUs> PushButton<I, D> {
    /// Wrap an active-high input pin with the given settle delay.
    pub fn new(pin: I, delay: D, settle_us: u32) -> Self {
        Self {
            pin,
            delay,
            settle_us,
        }
    }

    /// Poll for a confirmed press.
    ///
    /// Returns `true` only when the pin reads pressed both before and
    /// after the settle delay. A level that disappears during the delay
    /// is treated as transient noise.
    pub async fn debounced_press(&mut self) -> bool {
        if !self.pin.is_high() {
            return false;
        }

        self.delay.delay_us(self.settle_us).await;

        self.pin.is_high()
    }

    /// Spin (at the settle cadence) until the button is released.
    ///
    /// This is what makes a held press fire exactly once: the caller does
    /// not return to polling until the level has gone away.
    pub async fn wait_release(&mut self) {
        while self.pin.is_high() {
            self.delay.delay_us(self.settle_us).await;
        }
    }
}
