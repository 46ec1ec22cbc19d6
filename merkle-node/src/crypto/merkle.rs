//! 默克爾樹構建模塊
//!
//! # 哈希規則
//!
//! - 葉子節點: `hash = sha256_hex(data)`
//! - 內部節點（兩個子節點）: `hash = sha256_hex(sha256_hex(left.hash + right.hash))`
//!   其中 `+` 是兩個十六進制字符串的拼接，左在前、右在後
//! - 內部節點（單個子節點）: 奇數層的最後一個節點直接晉升，`hash = left.hash`，不重新計算
//!
//! # 與常見區塊鏈默克爾樹的差異
//!
//! 比特幣等實現會把奇數層的最後一個節點與自身配對再哈希，
//! 本模塊保留「原樣晉升」的行為，兩者產生的根不兼容。
//! 內部節點對十六進制字符串（而非原始 32 字節）做哈希，同樣不可替換。
//!
//! # 構建算法
//!
//! ```text
//!             root
//!           /      \
//!       n01          L2'   ← L2 晉升（哈希不變）
//!      /   \          |
//!    L0     L1        L2
//! ```

use serde::{Deserialize, Serialize};
use sha256_engine::{HashFunction, Sha256};
use tracing::{debug, trace};

use super::proof::{MerkleProof, ProofStep, Side};

/// 默克爾樹相關錯誤
#[derive(Debug, thiserror::Error)]
pub enum MerkleError {
    /// 空輸入無法構建樹
    #[error("Cannot build tree from empty input")]
    EmptyInput,

    /// 無效的葉子索引
    #[error("Invalid leaf index: {index} (total leaves: {total})")]
    InvalidLeafIndex { index: usize, total: usize },

    /// 反序列化失敗
    #[error("Deserialization failed: {0}")]
    Deserialization(String),
}

/// 默克爾樹節點
///
/// 每個節點獨佔其子節點，整棵樹隨根節點一起釋放。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// 葉子: 原始內容；內部節點: 本節點的十六進制哈希
    pub data: String,

    /// 十六進制 SHA-256 哈希（64 個小寫字符）
    pub hash: String,

    /// 左子節點（葉子為 None）
    pub left: Option<Box<TreeNode>>,

    /// 右子節點（葉子及晉升節點為 None）
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// 創建葉子節點
    pub fn leaf<H: HashFunction>(data: impl Into<String>, hasher: &H) -> Self {
        let data = data.into();
        let hash = hash_leaf(hasher, &data);
        Self {
            data,
            hash,
            left: None,
            right: None,
        }
    }

    /// 合併左右子節點創建父節點
    ///
    /// `right` 為 `None` 時左子節點晉升，父節點沿用其哈希。
    pub fn parent<H: HashFunction>(left: TreeNode, right: Option<TreeNode>, hasher: &H) -> Self {
        let hash = match &right {
            Some(right) => hash_pair(hasher, &left.hash, &right.hash),
            None => left.hash.clone(),
        };

        trace!(
            left = %left.hash,
            right = right.as_ref().map(|r| r.hash.as_str()).unwrap_or("-"),
            parent = %hash,
            "Created parent node"
        );

        Self {
            data: hash.clone(),
            hash,
            left: Some(Box::new(left)),
            right: right.map(Box::new),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// 只有左子節點的晉升節點
    pub fn is_promoted(&self) -> bool {
        self.left.is_some() && self.right.is_none()
    }

    /// 子樹高度（葉子為 0）
    pub fn height(&self) -> usize {
        match &self.left {
            Some(left) => 1 + left.height(),
            None => 0,
        }
    }
}

/// 計算葉子節點的哈希
///
/// # 示例
///
/// ```
/// use merkle_node::crypto::merkle::hash_leaf;
/// use sha256_engine::Sha256;
///
/// assert_eq!(
///     hash_leaf(&Sha256::new(), "abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
/// );
/// ```
pub fn hash_leaf<H: HashFunction>(hasher: &H, data: &str) -> String {
    hasher.hash_hex(data.as_bytes())
}

/// 計算內部節點的哈希
///
/// `sha256_hex(sha256_hex(left + right))`，順序敏感。
pub fn hash_pair<H: HashFunction>(hasher: &H, left: &str, right: &str) -> String {
    let mut concatenated = String::with_capacity(left.len() + right.len());
    concatenated.push_str(left);
    concatenated.push_str(right);

    let inner = hasher.hash_hex(concatenated.as_bytes());
    hasher.hash_hex(inner.as_bytes())
}

/// 默克爾樹
///
/// 構建後不可變。除了擁有所有權的節點樹之外，還保存每一層的哈希，
/// 用於生成包含證明。
#[derive(Debug, Clone)]
pub struct MerkleTree {
    /// 根節點
    root: TreeNode,

    /// 所有層級的哈希（從底層葉子到根）
    /// layers[0] = 葉子層, layers[n-1] = [根]
    layers: Vec<Vec<String>>,
}

impl MerkleTree {
    /// 使用 SHA-256 從有序內容列表構建默克爾樹
    ///
    /// # 返回
    /// - `Ok(MerkleTree)`: 構建成功
    /// - `Err(MerkleError::EmptyInput)`: 列表為空
    ///
    /// # 示例
    ///
    /// ```
    /// use merkle_node::crypto::merkle::MerkleTree;
    /// use sha256_engine::sha256_hex;
    ///
    /// let tree = MerkleTree::build(["x"]).unwrap();
    /// assert_eq!(tree.root_hash(), sha256_hex(b"x"));
    ///
    /// let tree = MerkleTree::build(vec!["a", "b", "c"]).unwrap();
    /// assert_eq!(tree.leaf_count(), 3);
    /// assert_eq!(tree.depth(), 2);
    /// ```
    pub fn build<I, S>(items: I) -> Result<Self, MerkleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::build_with(&Sha256::new(), items)
    }

    /// 使用指定哈希函數構建默克爾樹
    pub fn build_with<H, I, S>(hasher: &H, items: I) -> Result<Self, MerkleError>
    where
        H: HashFunction,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // 步驟 1: 按順序創建葉子節點
        let mut level: Vec<TreeNode> = items
            .into_iter()
            .map(|item| TreeNode::leaf(item.as_ref(), hasher))
            .collect();

        if level.is_empty() {
            return Err(MerkleError::EmptyInput);
        }

        let mut layers = vec![layer_hashes(&level)];

        // 步驟 2: 逐層兩兩合併，直到只剩根節點
        while level.len() > 1 {
            let mut next = Vec::with_capacity(level.len().div_ceil(2));
            let mut nodes = level.into_iter();

            while let Some(left) = nodes.next() {
                let right = nodes.next();
                next.push(TreeNode::parent(left, right, hasher));
            }

            debug!(level = layers.len(), nodes = next.len(), "Reduced tree level");

            layers.push(layer_hashes(&next));
            level = next;
        }

        // 步驟 3: 剩下的唯一節點就是根
        let root = level.pop().ok_or(MerkleError::EmptyInput)?;
        debug!(root = %root.hash, leaves = layers[0].len(), "Built merkle tree");

        Ok(Self { root, layers })
    }

    /// 獲取根節點
    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// 獲取十六進制根哈希
    pub fn root_hash(&self) -> &str {
        &self.root.hash
    }

    /// 獲取葉子總數
    pub fn leaf_count(&self) -> usize {
        self.layers[0].len()
    }

    /// 樹的深度（合併輪數；單葉子樹為 0）
    pub fn depth(&self) -> usize {
        self.layers.len() - 1
    }

    /// 獲取所有層級的哈希
    pub fn layers(&self) -> &[Vec<String>] {
        &self.layers
    }

    /// 獲取所有葉子的哈希
    pub fn leaf_hashes(&self) -> &[String] {
        &self.layers[0]
    }

    /// 生成指定葉子的包含證明
    ///
    /// # 返回
    /// - `Ok(MerkleProof)`: 證明長度等於樹的深度
    /// - `Err(MerkleError::InvalidLeafIndex)`: 索引超出範圍
    ///
    /// # 示例
    ///
    /// ```
    /// use merkle_node::crypto::merkle::MerkleTree;
    ///
    /// let tree = MerkleTree::build(["tx1", "tx2", "tx3"]).unwrap();
    /// let proof = tree.generate_proof(2).unwrap();
    ///
    /// assert!(proof.verify("tx3", tree.root_hash()));
    /// assert!(!proof.verify("tx1", tree.root_hash()));
    /// ```
    pub fn generate_proof(&self, leaf_index: usize) -> Result<MerkleProof, MerkleError> {
        let total = self.leaf_count();
        if leaf_index >= total {
            return Err(MerkleError::InvalidLeafIndex {
                index: leaf_index,
                total,
            });
        }

        let mut steps = Vec::with_capacity(self.depth());
        let mut current_index = leaf_index;

        // 從葉子層向上遍歷到根（不含根層）
        for layer in &self.layers[..self.layers.len() - 1] {
            let step = if current_index % 2 == 1 {
                ProofStep::Sibling {
                    hash: layer[current_index - 1].clone(),
                    side: Side::Left,
                }
            } else if current_index + 1 < layer.len() {
                ProofStep::Sibling {
                    hash: layer[current_index + 1].clone(),
                    side: Side::Right,
                }
            } else {
                // 奇數層的最後一個節點: 晉升
                ProofStep::Promoted
            };

            steps.push(step);
            current_index /= 2;
        }

        Ok(MerkleProof::new(leaf_index as u64, total as u64, steps))
    }
}

impl PartialEq for MerkleTree {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl Eq for MerkleTree {}

fn layer_hashes(level: &[TreeNode]) -> Vec<String> {
    level.iter().map(|node| node.hash.clone()).collect()
}

/// 從有序內容列表計算默克爾根（十六進制）
///
/// # 示例
///
/// ```
/// use merkle_node::crypto::merkle::build_merkle_root;
///
/// let root = build_merkle_root(["a", "b"]).unwrap();
/// assert_eq!(root.len(), 64);
/// assert!(build_merkle_root(Vec::<String>::new()).is_err());
/// ```
pub fn build_merkle_root<I, S>(items: I) -> Result<String, MerkleError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    MerkleTree::build(items).map(|tree| tree.root.hash)
}
