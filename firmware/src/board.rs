//! STM32 implementations of the `switch-core` capability traits.

use embassy_stm32::gpio::{Input, Output};
use embassy_stm32::mode::Async;
use embassy_stm32::usart::UartTx;
use embassy_time::{with_timeout, Duration, Instant, Timer};
use switch_core::{DelayUs, DigitalInput, DigitalOutput, LinkError, SendTimeout, StatusLink, TickSource};

/// A GPIO input (DIP line or the transmit button).
pub struct BoardInput(pub Input<'static>);

impl DigitalInput for BoardInput {
    fn is_high(&mut self) -> bool {
        self.0.is_high()
    }
}

/// A push-pull GPIO output (bit-bang clock or data line).
pub struct BoardOutput(pub Output<'static>);

impl DigitalOutput for BoardOutput {
    fn set_level(&mut self, high: bool) {
        if high {
            self.0.set_high();
        } else {
            self.0.set_low();
        }
    }
}

/// Millisecond tick off the embassy time driver, truncated to `u32` so
/// it wraps exactly like a 32-bit hardware tick counter.
pub struct Millis;

impl TickSource for Millis {
    fn now_ms(&self) -> u32 {
        Instant::now().as_millis() as u32
    }
}

/// Timer-backed microsecond delay.
pub struct TimerDelay;

impl DelayUs for TimerDelay {
    async fn delay_us(&mut self, us: u32) {
        Timer::after_micros(us as u64).await;
    }
}

/// Status link over the USART toward the host bridge.
pub struct UartLink(pub UartTx<'static, Async>);

impl StatusLink for UartLink {
    async fn send(&mut self, bytes: &[u8], timeout: SendTimeout) -> Result<(), LinkError> {
        match timeout {
            SendTimeout::Bounded(ms) => {
                match with_timeout(Duration::from_millis(ms as u64), self.0.write(bytes)).await {
                    Ok(Ok(())) => Ok(()),
                    Ok(Err(_)) => Err(LinkError::Io),
                    Err(_) => Err(LinkError::Timeout),
                }
            }
            SendTimeout::Unbounded => self.0.write(bytes).await.map_err(|_| LinkError::Io),
        }
    }
}

/// Unrecoverable initialization failure: disable interrupts and park
/// until a power cycle or reset.
pub fn halt() -> ! {
    cortex_m::interrupt::disable();
    loop {
        cortex_m::asm::wfe();
    }
}
