//! Lowercase hex encoding for digests.

/// Encode bytes as a lowercase hex string (two characters per byte).
///
/// ```
/// use sha256_engine::to_hex;
///
/// assert_eq!(to_hex([0x00, 0xab, 0xff]), "00abff");
/// assert_eq!(to_hex([]), "");
/// ```
pub fn to_hex(bytes: impl AsRef<[u8]>) -> String {
    hex::encode(bytes)
}
