//! Status message types and encoding for the switch state sync link.
//!
//! This crate defines everything the host sees on the UART side of the
//! bridge:
//!
//! - **Types**: [`Mode`] (operating mode of the output path) and
//!   [`SwitchState`] (one sample of the DIP bank plus mode selector)
//! - **Encoding**: [`encode_status_report`], [`encode_hex_report`] and the
//!   [`HEARTBEAT`] literal
//!
//! # Message formats
//!
//! All messages are plain ASCII, sent over 38400 8N1:
//!
//! ```text
//! STM32_ALIVE\n                 periodic liveness beacon (LF only)
//! MODE:<name> VAL:<decimal>\r\n periodic switch state report
//! VAL:<hex>\r\n                 button-triggered value in uart mode
//! ```
//!
//! `<name>` is one of `serial`, `uart`, `parallel`, `unknown`; `<decimal>`
//! is the 4-bit DIP value 0-15; `<hex>` is the same value as a single
//! uppercase hex digit.
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

mod fmt;
pub mod report;
pub mod types;

pub use report::{
    encode_hex_report, encode_status_report, HEARTBEAT, MAX_HEX_REPORT_LEN, MAX_STATUS_REPORT_LEN,
};
pub use types::{Mode, SwitchState};
