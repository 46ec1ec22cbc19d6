//! SHA-256 digest engine
//!
//! A self-contained FIPS 180-4 SHA-256 implementation over complete in-memory
//! buffers, plus lowercase hex encoding for display and comparison.
//!
//! # Quick Start
//!
//! ```rust
//! use sha256_engine::{sha256, sha256_hex};
//!
//! let digest = sha256(b"abc");
//! assert_eq!(digest.len(), 32);
//!
//! assert_eq!(
//!     sha256_hex(b"abc"),
//!     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//! ```

pub mod constants;
pub mod error;
pub mod encoding;
pub mod padding;
pub mod sha256;
pub mod traits;

// Re-export commonly used types
pub use error::{DigestError, Result};
pub use encoding::to_hex;
pub use sha256::{sha256, sha256_hex, Sha256, DIGEST_LEN};
pub use traits::HashFunction;
