//! Board support for the switch state sync firmware.
//!
//! The control logic lives in `switch-core`; this crate provides the
//! STM32 implementations of its capability traits plus the fail-halt
//! routine.

#![no_std]

pub mod board;

pub use board::{halt, BoardInput, BoardOutput, Millis, TimerDelay, UartLink};
