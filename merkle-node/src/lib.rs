//! 默克爾承諾節點
//!
//! 本 crate 負責:
//! 1. 使用 SHA-256 摘要引擎對每個內容條目計算葉子哈希
//! 2. 逐層兩兩合併，得到承諾整個有序列表的默克爾根
//! 3. 生成與驗證任意葉子的包含證明
//! 4. 輸出根哈希或 JSON 承諾報告
//!
//! # 架構
//!
//! ```text
//! ┌──────────────┐
//! │  MerkleTree  │  ← 樹構建 + 證明
//! └──────┬───────┘
//!        │
//!   ┌────┴────┬──────────┬──────────┐
//!   ▼         ▼          ▼          ▼
//! sha256   Commitment   Config    Input
//! engine    report
//! ```
//!
//! # 示例用法
//!
//! ```
//! use merkle_node::{build_merkle_root, MerkleTree};
//!
//! let root = build_merkle_root(["tx1", "tx2", "tx3"]).unwrap();
//!
//! let tree = MerkleTree::build(["tx1", "tx2", "tx3"]).unwrap();
//! assert_eq!(tree.root_hash(), root);
//!
//! let proof = tree.generate_proof(1).unwrap();
//! assert!(proof.verify("tx2", &root));
//! ```

// 公開模塊
pub mod config;
pub mod crypto;
pub mod error;
pub mod input;
pub mod types;

// Re-export 常用類型
pub use crypto::{build_merkle_root, MerkleError, MerkleProof, MerkleTree, TreeNode};
pub use error::{NodeError, Result};
pub use types::{Commitment, NodeConfig, OutputFormat};
