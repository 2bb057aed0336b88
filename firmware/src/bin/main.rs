#![no_std]
#![no_main]

use defmt::info;
use defmt_rtt as _;
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Input, Level, Output, Pull, Speed};
use embassy_stm32::usart::{Config as UartConfig, UartTx};
use switch_core::{
    button::DEFAULT_SETTLE_US, encoder::DEFAULT_PHASE_US, BitBangTx, DipSwitch, FixedMode, Mode,
    PushButton, StatusReporter, SwitchSync,
};
use switch_sync_firmware::{halt, BoardInput, BoardOutput, Millis, TimerDelay, UartLink};

#[cfg(feature = "dev-panic")]
use panic_probe as _;
#[cfg(feature = "prod-panic")]
use panic_reset as _;

type Controller =
    SwitchSync<BoardInput, BoardInput, FixedMode, BoardOutput, UartLink, Millis, TimerDelay>;

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("switch-sync starting...");

    // Default clock tree (HSI)
    let p = embassy_stm32::init(Default::default());

    // --- Two-wire link, both lines idle low ---
    let clock = BoardOutput(Output::new(p.PA0, Level::Low, Speed::Low));
    let data = BoardOutput(Output::new(p.PA1, Level::Low, Speed::Low));

    // --- DIP bank, active-low with pull-ups, LSB first ---
    let dip = DipSwitch::new([
        BoardInput(Input::new(p.PB0, Pull::Up)),
        BoardInput(Input::new(p.PB1, Pull::Up)),
        BoardInput(Input::new(p.PA6, Pull::Up)),
        BoardInput(Input::new(p.PA7, Pull::Up)),
    ]);

    // --- Transmit button, active-high, biased on the board ---
    let button = BoardInput(Input::new(p.PA8, Pull::None));

    // --- Host status link ---
    // 38400 8N1 is the corrected working configuration for the receiving
    // bridge; the earlier 115200 setting was wrong.
    let mut uart_config = UartConfig::default();
    uart_config.baudrate = 38_400;

    let uart = match UartTx::new(p.USART2, p.PA2, p.DMA1_CH1, uart_config) {
        Ok(uart) => uart,
        Err(_) => halt(),
    };

    let controller = SwitchSync::new(
        dip,
        // Selector wiring unresolved, see switch_core::switches::FixedMode
        FixedMode(Mode::Uart),
        PushButton::new(button, TimerDelay, DEFAULT_SETTLE_US),
        BitBangTx::new(clock, data, TimerDelay, DEFAULT_PHASE_US),
        StatusReporter::new(UartLink(uart)),
        Millis,
    );

    if spawner.spawn(control_task(controller)).is_err() {
        halt();
    }

    info!("switch-sync initialized");
}

/// The single control task: sole owner of all loop state.
#[embassy_executor::task]
async fn control_task(mut controller: Controller) -> ! {
    controller.run().await
}
