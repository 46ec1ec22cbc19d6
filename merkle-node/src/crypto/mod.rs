//! 密碼學模塊
//!
//! 包含默克爾承諾相關功能:
//! - 默克爾樹構建（十六進制字符串拼接 + 雙重 SHA-256）
//! - 包含證明的生成與驗證

pub mod merkle;
pub mod proof;

// Re-export commonly used types
pub use merkle::{build_merkle_root, hash_leaf, hash_pair, MerkleError, MerkleTree, TreeNode};
pub use proof::{MerkleProof, ProofStep, Side};
