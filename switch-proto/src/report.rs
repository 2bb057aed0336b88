//! Encoders for the UART status messages.
//!
//! Three message families, all plain ASCII:
//!
//! - Heartbeat: the [`HEARTBEAT`] literal, LF-terminated
//! - Status report: `MODE:<name> VAL:<decimal>\r\n`
//! - Hex value report: `VAL:<hex>\r\n`

use crate::fmt::{hex_nibble, write_u8};
use crate::types::SwitchState;

/// Periodic liveness beacon. LF only, no CR - the host-side bridge
/// matches this exact byte sequence.
pub const HEARTBEAT: &[u8] = b"STM32_ALIVE\n";

/// Maximum encoded length of a status report
/// (`MODE:parallel VAL:15\r\n` = 22 bytes).
pub const MAX_STATUS_REPORT_LEN: usize = 32;

/// Maximum encoded length of a hex value report (`VAL:F\r\n` = 7 bytes).
pub const MAX_HEX_REPORT_LEN: usize = 8;

/// Encode a periodic switch state report.
///
/// Returns the number of bytes written.
///
/// # Panics
///
/// Panics if `buf.len() < MAX_STATUS_REPORT_LEN`.
pub fn encode_status_report(buf: &mut [u8], state: SwitchState) -> usize {
    debug_assert!(
        buf.len() >= MAX_STATUS_REPORT_LEN,
        "buffer too small for status report"
    );

    let name = state.mode.name().as_bytes();

    let mut pos = 0;
    buf[pos..pos + 5].copy_from_slice(b"MODE:");
    pos += 5;
    buf[pos..pos + name.len()].copy_from_slice(name);
    pos += name.len();
    buf[pos..pos + 5].copy_from_slice(b" VAL:");
    pos += 5;
    pos += write_u8(&mut buf[pos..], state.value);
    buf[pos..pos + 2].copy_from_slice(b"\r\n");
    pos += 2;

    pos
}

/// Encode a button-triggered hex value report.
///
/// The value is masked to 4 bits and formatted as a single uppercase hex
/// digit with no leading zero. Returns the number of bytes written
/// (always 7).
///
/// # Panics
///
/// Panics if `buf.len() < MAX_HEX_REPORT_LEN`.
pub fn encode_hex_report(buf: &mut [u8], value: u8) -> usize {
    debug_assert!(
        buf.len() >= MAX_HEX_REPORT_LEN,
        "buffer too small for hex report"
    );

    buf[..4].copy_from_slice(b"VAL:");
    buf[4] = hex_nibble(value);
    buf[5..7].copy_from_slice(b"\r\n");

    7
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Mode;

    #[test]
    fn test_heartbeat_literal() {
        assert_eq!(HEARTBEAT, b"STM32_ALIVE\n");
        // LF only, no CR
        assert!(!HEARTBEAT.contains(&b'\r'));
    }

    #[test]
    fn test_status_report_uart_mode() {
        let mut buf = [0u8; MAX_STATUS_REPORT_LEN];
        let len = encode_status_report(&mut buf, SwitchState::new(Mode::Uart, 10));
        assert_eq!(&buf[..len], b"MODE:uart VAL:10\r\n");
    }

    #[test]
    fn test_status_report_all_names() {
        let mut buf = [0u8; MAX_STATUS_REPORT_LEN];

        let len = encode_status_report(&mut buf, SwitchState::new(Mode::Serial, 0));
        assert_eq!(&buf[..len], b"MODE:serial VAL:0\r\n");

        let len = encode_status_report(&mut buf, SwitchState::new(Mode::Parallel, 15));
        assert_eq!(&buf[..len], b"MODE:parallel VAL:15\r\n");
    }

    #[test]
    fn test_status_report_unknown_mode() {
        // Undefined selector codes report as "unknown"
        let mut buf = [0u8; MAX_STATUS_REPORT_LEN];
        let state = SwitchState::new(Mode::from_code(7), 3);
        let len = encode_status_report(&mut buf, state);
        assert_eq!(&buf[..len], b"MODE:unknown VAL:3\r\n");
    }

    #[test]
    fn test_hex_report() {
        let mut buf = [0u8; MAX_HEX_REPORT_LEN];

        let len = encode_hex_report(&mut buf, 10);
        assert_eq!(&buf[..len], b"VAL:A\r\n");

        let len = encode_hex_report(&mut buf, 0);
        assert_eq!(&buf[..len], b"VAL:0\r\n");

        let len = encode_hex_report(&mut buf, 15);
        assert_eq!(&buf[..len], b"VAL:F\r\n");
    }

    #[test]
    fn test_hex_report_masks_value() {
        let mut buf = [0u8; MAX_HEX_REPORT_LEN];
        let len = encode_hex_report(&mut buf, 0x1A);
        assert_eq!(&buf[..len], b"VAL:A\r\n");
    }
}
