/// Error type definitions
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DigestError {
    /// A buffer could not be reinterpreted as whole words or blocks.
    ///
    /// Only reachable when a caller hands unpadded bytes to the block
    /// processor directly; `sha256` never produces it.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DigestError>;
