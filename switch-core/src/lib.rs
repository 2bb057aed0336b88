//! Platform-agnostic control logic for the switch state sync firmware.
//!
//! This crate contains everything with a real design decision in it, with
//! the hardware abstracted behind capability traits so the logic can be
//! unit tested on the host:
//!
//! - [`hal`]: capability traits the board must implement ([`DigitalInput`],
//!   [`DigitalOutput`], [`TickSource`], [`DelayUs`], [`StatusLink`])
//! - [`schedule`]: wrap-safe periodic task firing ([`ScheduleEntry`])
//! - [`switches`]: DIP bank and mode selector sampling ([`DipSwitch`],
//!   [`ModeSelect`])
//! - [`button`]: debounced one-shot press detection ([`PushButton`])
//! - [`encoder`]: two-wire bit-bang transmitter ([`BitBangTx`])
//! - [`reporter`]: UART status messages ([`StatusReporter`])
//! - [`dispatch`]: routes a sample to the bit-bang link or the UART path
//! - [`controller`]: the control loop itself ([`SwitchSync`]), sole owner
//!   of all mutable state
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod button;
pub mod controller;
pub mod dispatch;
pub mod encoder;
pub mod hal;
pub mod reporter;
pub mod schedule;
pub mod switches;

#[cfg(test)]
mod testing;

// Re-export main types at crate root
pub use button::PushButton;
pub use controller::{SwitchSync, HEARTBEAT_INTERVAL_MS, SWITCH_STATE_INTERVAL_MS};
pub use dispatch::dispatch;
pub use encoder::BitBangTx;
pub use hal::{DelayUs, DigitalInput, DigitalOutput, LinkError, SendTimeout, StatusLink, TickSource};
pub use reporter::{StatusReporter, REPORT_TIMEOUT_MS};
pub use schedule::ScheduleEntry;
pub use switches::{DipSwitch, FixedMode, ModeSelect};

// Protocol types are part of the public surface
pub use switch_proto::{Mode, SwitchState};
