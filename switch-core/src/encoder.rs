//! Two-wire bit-bang transmitter for the clock/data link.
//!
//! One frame is 4 bits, MSB (bit 3) first. Per bit, three phases of equal
//! length: data line set to the bit value and held, clock raised and
//! held, clock lowered and held. Both lines idle low between frames.
//!
//! There is no start/stop framing, parity, or acknowledgment. This is a
//! raw level protocol: the receiver samples the data line on each rising
//! clock edge.

use crate::hal::{DelayUs, DigitalOutput};

/// Bits per frame.
pub const FRAME_BITS: u32 = 4;

/// Default length of each of the three per-bit phases, in microseconds.
///
/// The receiver only needs the clock edges well inside the data-stable
/// window, so the exact value is uncritical as long as it is comfortably
/// above the receiver's sampling jitter.
pub const DEFAULT_PHASE_US: u32 = 250;

/// Bit-bang transmitter over two push-pull outputs.
pub struct BitBangTx<O, D> {
    clock: O,
    data: O,
    delay: D,
    phase_us: u32,
}

impl<O: DigitalOutput, D: DelayUs> BitBangTx<O, D> {
    /// Wrap the clock and data outputs.
    ///
    /// `phase_us` is the length of each of the three per-bit phases. Both
    /// pins are expected to already be driven low (the board init leaves
    /// them that way).
    pub fn new(clock: O, data: O, delay: D, phase_us: u32) -> Self {
        Self {
            clock,
            data,
            delay,
            phase_us,
        }
    }

    /// Transmit one 4-bit frame, MSB first.
    ///
    /// Bits above the low nibble are ignored.
    pub async fn send_frame(&mut self, value: u8) {
        for i in (0..FRAME_BITS).rev() {
            let bit = (value >> i) & 0x01 != 0;

            self.data.set_level(bit);
            self.delay.delay_us(self.phase_us).await;

            self.clock.set_level(true);
            self.delay.delay_us(self.phase_us).await;

            self.clock.set_level(false);
            self.delay.delay_us(self.phase_us).await;
        }
    }
}
