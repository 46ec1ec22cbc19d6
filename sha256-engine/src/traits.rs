/// Unified interface for 256-bit hash functions
use crate::encoding::to_hex;

/// Hash function trait
///
/// Implementors must be pure: the same input always yields the same digest,
/// and no state is carried between calls.
pub trait HashFunction {
    /// Hash a complete message
    fn hash(&self, message: &[u8]) -> [u8; 32];

    /// Hash a complete message and hex-encode the digest
    fn hash_hex(&self, message: &[u8]) -> String {
        to_hex(self.hash(message))
    }

    /// Algorithm name
    fn name(&self) -> &str;
}

impl<H: HashFunction + ?Sized> HashFunction for &H {
    fn hash(&self, message: &[u8]) -> [u8; 32] {
        (**self).hash(message)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
