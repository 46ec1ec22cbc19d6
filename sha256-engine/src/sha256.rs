//! SHA-256 compression and digest computation
//!
//! # Processing model
//!
//! 1. The message is padded to a whole number of 512-bit blocks ([`crate::padding`]).
//! 2. Each block is read as 16 big-endian words and expanded into a 64-word
//!    message schedule.
//! 3. 64 compression rounds mix the schedule into eight working variables,
//!    which are then added back into the hash state.
//! 4. The final eight state words, big-endian, form the 32-byte digest.
//!
//! All working storage (state, schedule, working variables) lives on the
//! stack of a single call, so concurrent callers never share mutable state.
//! Only [`H0`] and [`K`] are shared, and they are `const`.

use crate::constants::{BLOCK_LEN, BLOCK_WORDS, H0, K, SCHEDULE_LEN};
use crate::encoding::to_hex;
use crate::error::{DigestError, Result};
use crate::padding::pad;
use crate::traits::HashFunction;

/// Digest length in bytes
pub const DIGEST_LEN: usize = 32;

/// SHA-256 hash function
///
/// Stateless: every call to [`HashFunction::hash`] starts from [`H0`].
///
/// # Example
///
/// ```rust
/// use sha256_engine::{HashFunction, Sha256};
///
/// let hasher = Sha256::new();
/// let digest = hasher.hash(b"");
///
/// assert_eq!(
///     hasher.hash_hex(b""),
///     "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
/// );
/// assert_eq!(digest.len(), 32);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256;

impl Sha256 {
    pub fn new() -> Self {
        Self
    }

    /// Hash an already padded buffer
    ///
    /// # Errors
    /// - `InvalidInput` if `padded` is empty or not a whole number of 64-byte blocks
    pub fn digest_padded(&self, padded: &[u8]) -> Result<[u8; DIGEST_LEN]> {
        if padded.is_empty() || padded.len() % BLOCK_LEN != 0 {
            return Err(DigestError::InvalidInput(format!(
                "padded length {} is not a positive multiple of {} bytes",
                padded.len(),
                BLOCK_LEN
            )));
        }

        let words = words_from_be_bytes(padded)?;
        let mut state = H0;

        for block in words.chunks_exact(BLOCK_WORDS) {
            let mut block_words = [0u32; BLOCK_WORDS];
            block_words.copy_from_slice(block);
            compress(&mut state, &block_words);
        }

        Ok(state_to_bytes(&state))
    }
}

impl HashFunction for Sha256 {
    fn hash(&self, message: &[u8]) -> [u8; DIGEST_LEN] {
        self.digest_padded(&pad(message))
            .expect("pad always yields whole 64-byte blocks")
    }

    fn name(&self) -> &str {
        "SHA-256"
    }
}

/// Compute the SHA-256 digest of `message`
pub fn sha256(message: &[u8]) -> [u8; DIGEST_LEN] {
    Sha256::new().hash(message)
}

/// Compute the SHA-256 digest of `message` as 64 lowercase hex characters
pub fn sha256_hex(message: &[u8]) -> String {
    to_hex(sha256(message))
}

/// Reinterpret bytes as big-endian 32-bit words
///
/// # Errors
/// - `InvalidInput` if the length is not a multiple of 4
pub fn words_from_be_bytes(bytes: &[u8]) -> Result<Vec<u32>> {
    if bytes.len() % 4 != 0 {
        return Err(DigestError::InvalidInput(format!(
            "byte length {} is not a multiple of 4",
            bytes.len()
        )));
    }

    Ok(bytes
        .chunks_exact(4)
        .map(|w| u32::from_be_bytes([w[0], w[1], w[2], w[3]]))
        .collect())
}

fn state_to_bytes(state: &[u32; 8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
}

/// Expand a 16-word block into the 64-word message schedule
fn message_schedule(block: &[u32; BLOCK_WORDS]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    w[..BLOCK_WORDS].copy_from_slice(block);

    for t in BLOCK_WORDS..SCHEDULE_LEN {
        w[t] = small_sigma1(w[t - 2])
            .wrapping_add(w[t - 7])
            .wrapping_add(small_sigma0(w[t - 15]))
            .wrapping_add(w[t - 16]);
    }
    w
}

/// Run the 64 rounds for one block and fold the result into `state`
fn compress(state: &mut [u32; 8], block: &[u32; BLOCK_WORDS]) {
    let w = message_schedule(block);
    let mut h = *state;

    for t in 0..SCHEDULE_LEN {
        let t1 = h[7]
            .wrapping_add(big_sigma1(h[4]))
            .wrapping_add(ch(h[4], h[5], h[6]))
            .wrapping_add(K[t])
            .wrapping_add(w[t]);
        let t2 = big_sigma0(h[0]).wrapping_add(maj(h[0], h[1], h[2]));

        h.copy_within(0..7, 1);
        h[4] = h[4].wrapping_add(t1);
        h[0] = t1.wrapping_add(t2);
    }

    for (acc, v) in state.iter_mut().zip(h.iter()) {
        *acc = acc.wrapping_add(*v);
    }
}

#[inline]
fn ch(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline]
fn maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

#[inline]
fn big_sigma0(x: u32) -> u32 {
    x.rotate_right(2) ^ x.rotate_right(13) ^ x.rotate_right(22)
}

#[inline]
fn big_sigma1(x: u32) -> u32 {
    x.rotate_right(6) ^ x.rotate_right(11) ^ x.rotate_right(25)
}

#[inline]
fn small_sigma0(x: u32) -> u32 {
    x.rotate_right(7) ^ x.rotate_right(18) ^ (x >> 3)
}

#[inline]
fn small_sigma1(x: u32) -> u32 {
    x.rotate_right(17) ^ x.rotate_right(19) ^ (x >> 10)
}
