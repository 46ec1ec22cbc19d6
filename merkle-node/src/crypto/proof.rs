//! 默克爾包含證明
//!
//! # 驗證算法
//!
//! 1. 計算葉子哈希: `current = sha256_hex(leaf_data)`
//! 2. 按證明步驟逐層向上計算:
//!    - 兄弟節點在右邊: `current = hash_pair(current, sibling)`
//!    - 兄弟節點在左邊: `current = hash_pair(sibling, current)`
//!    - 晉升: `current` 不變
//! 3. 比較最終計算出的根與提供的根是否相等
//!
//! 驗證時由 `leaf_index` 與 `leaf_count` 推導出每一層的位置與寬度：
//! 兄弟方向、是否晉升以及步驟數（樹的深度）都必須與推導結果一致，否則拒絕。

use serde::{Deserialize, Serialize};
use sha256_engine::{HashFunction, Sha256};

use super::merkle::{hash_leaf, hash_pair, MerkleError};

/// 兄弟節點所在的位置
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

/// 證明中的單層步驟
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProofStep {
    /// 與兄弟節點合併
    Sibling { hash: String, side: Side },

    /// 本層沒有兄弟節點，哈希原樣晉升
    Promoted,
}

/// 默克爾包含證明
///
/// # 示例
///
/// ```
/// use merkle_node::crypto::merkle::{hash_leaf, hash_pair};
/// use merkle_node::crypto::proof::{MerkleProof, ProofStep, Side};
/// use sha256_engine::Sha256;
///
/// let hasher = Sha256::new();
/// let h0 = hash_leaf(&hasher, "leaf0");
/// let h1 = hash_leaf(&hasher, "leaf1");
/// let root = hash_pair(&hasher, &h0, &h1);
///
/// let proof = MerkleProof::new(0, 2, vec![ProofStep::Sibling { hash: h1, side: Side::Right }]);
///
/// assert!(proof.verify("leaf0", &root));
/// assert!(!proof.verify("wrong_data", &root));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MerkleProof {
    /// 葉子索引（從 0 開始）
    pub leaf_index: u64,

    /// 樹的葉子總數
    ///
    /// 由證明方提供，驗證方應與可信的承諾核對（見 `Commitment::verify_leaf`）。
    pub leaf_count: u64,

    /// 從葉子到根的步驟
    ///
    /// steps[0] 是最底層（葉子層）
    pub steps: Vec<ProofStep>,
}

impl MerkleProof {
    /// 創建新的默克爾證明
    pub fn new(leaf_index: u64, leaf_count: u64, steps: Vec<ProofStep>) -> Self {
        Self {
            leaf_index,
            leaf_count,
            steps,
        }
    }

    /// 驗證葉子內容確實屬於該默克爾樹（SHA-256）
    ///
    /// # 返回
    /// - `true`: 驗證通過
    /// - `false`: 內容被篡改、證明無效或根不匹配
    pub fn verify(&self, leaf_data: &str, root_hash: &str) -> bool {
        self.verify_with(&Sha256::new(), leaf_data, root_hash)
    }

    /// 使用指定哈希函數驗證
    pub fn verify_with<H: HashFunction>(&self, hasher: &H, leaf_data: &str, root_hash: &str) -> bool {
        match self.compute_root(hasher, leaf_data) {
            Some(computed) => computed == root_hash,
            None => false,
        }
    }

    /// 從葉子內容重新計算根哈希
    ///
    /// 證明步驟與 `leaf_index`、`leaf_count` 推導出的路徑不一致時返回 `None`。
    pub fn compute_root<H: HashFunction>(&self, hasher: &H, leaf_data: &str) -> Option<String> {
        if self.leaf_index >= self.leaf_count {
            return None;
        }

        let mut current = hash_leaf(hasher, leaf_data);
        let mut index = self.leaf_index;
        let mut width = self.leaf_count;

        for step in &self.steps {
            // 已到達根層，多餘的步驟
            if width == 1 {
                return None;
            }

            let is_right_child = index & 1 == 1;
            let is_unpaired = index == width - 1 && width % 2 == 1;

            current = match step {
                ProofStep::Sibling { hash, side: Side::Right } if !is_right_child && !is_unpaired => {
                    hash_pair(hasher, &current, hash)
                }
                ProofStep::Sibling { hash, side: Side::Left } if is_right_child => {
                    hash_pair(hasher, hash, &current)
                }
                ProofStep::Promoted if is_unpaired => current,
                _ => return None,
            };

            index >>= 1;
            width = width.div_ceil(2);
        }

        // 步驟數必須等於樹的深度
        if width != 1 {
            return None;
        }

        Some(current)
    }

    /// 獲取證明深度（樹的高度）
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    /// 序列化證明為字節（bincode）
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(self).expect("MerkleProof serialization should never fail")
    }

    /// 從字節反序列化證明
    ///
    /// # 錯誤
    /// - 如果字節格式無效,返回 `Deserialization` 錯誤
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MerkleError> {
        bincode::deserialize(bytes).map_err(|e| {
            MerkleError::Deserialization(format!("Failed to deserialize MerkleProof: {}", e))
        })
    }
}
