//! No-std number formatting helpers for message encoding.
//!
//! These functions write directly to byte buffers without heap allocation
//! or the standard library.

/// Hex digits lookup table for fast conversion.
const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Format a 4-bit value as a single uppercase hex digit.
#[inline]
pub fn hex_nibble(value: u8) -> u8 {
    HEX_DIGITS[(value & 0x0F) as usize]
}

/// Write a u8 as an unsigned decimal string.
///
/// Returns the number of bytes written (1-3 bytes).
///
/// # Panics
///
/// Panics if `buf.len() < 3` (max size: "255").
#[inline]
pub fn write_u8(buf: &mut [u8], value: u8) -> usize {
    debug_assert!(buf.len() >= 3, "buffer too small for u8");

    if value == 0 {
        buf[0] = b'0';
        return 1;
    }

    // Write digits in reverse order to a temporary buffer
    let mut temp = [0u8; 3];
    let mut n = value;
    let mut len = 0;
    while n > 0 {
        temp[len] = b'0' + (n % 10);
        n /= 10;
        len += 1;
    }

    // Copy digits in correct order
    for i in 0..len {
        buf[i] = temp[len - 1 - i];
    }

    len
}
