//! Message padding (FIPS 180-4 §5.1.1).
//!
//! A message of `L` bytes becomes `L + 1 + k + 8` bytes, where `k` is the
//! smallest number of zero bytes making the total a multiple of 64:
//!
//! ```text
//! | message (L) | 0x80 | 0x00 * k | L*8 as u64 big-endian |
//! ```

use crate::constants::{BLOCK_LEN, LENGTH_FIELD_LEN};

/// Number of zero bytes inserted between the `0x80` marker and the length field.
pub fn zero_padding_len(message_len: usize) -> usize {
    let used = (message_len + 1 + LENGTH_FIELD_LEN) % BLOCK_LEN;
    (BLOCK_LEN - used) % BLOCK_LEN
}

/// Total padded length for a message of `message_len` bytes.
pub fn padded_len(message_len: usize) -> usize {
    message_len + 1 + zero_padding_len(message_len) + LENGTH_FIELD_LEN
}

/// Pad a message to a whole number of 512-bit blocks.
///
/// The result is always a positive multiple of 64 bytes and strictly longer
/// than the input. The bit length wraps modulo 2^64, which only matters for
/// inputs of 2^61 bytes or more.
///
/// ```
/// use sha256_engine::padding::pad;
///
/// let padded = pad(b"abc");
/// assert_eq!(padded.len(), 64);
/// assert_eq!(padded[3], 0x80);
/// assert_eq!(&padded[56..], &24u64.to_be_bytes());
/// ```
pub fn pad(message: &[u8]) -> Vec<u8> {
    let bit_len = (message.len() as u64).wrapping_mul(8);

    let mut padded = Vec::with_capacity(padded_len(message.len()));
    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(padded.len() + zero_padding_len(message.len()), 0);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    debug_assert_eq!(padded.len() % BLOCK_LEN, 0);
    padded
}
