//! 共享數據類型定義

use serde::{Deserialize, Serialize};

use crate::crypto::{MerkleError, MerkleProof, MerkleTree};
use crate::error::{NodeError, Result};

/// 輸出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// 只輸出十六進制根哈希
    Hex,
    /// 輸出完整的承諾報告（JSON）
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = NodeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "hex" => Ok(OutputFormat::Hex),
            "json" => Ok(OutputFormat::Json),
            other => Err(NodeError::Config(format!(
                "Unknown output format: {} (expected hex or json)",
                other
            ))),
        }
    }
}

/// 節點配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NodeConfig {
    /// 日誌級別（trace, debug, info, warn, error）
    pub log_level: String,

    /// 輸出格式（hex 或 json）
    pub output: String,

    /// 內容列表文件路徑（每行一個條目）
    pub input_path: Option<String>,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            output: "hex".to_string(),
            input_path: None,
        }
    }
}

impl NodeConfig {
    /// 解析輸出格式
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.output.parse()
    }
}

/// 默克爾承諾報告
///
/// 根哈希承諾整個有序內容列表；可選附帶每個葉子的包含證明。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Commitment {
    /// 十六進制根哈希
    pub root_hash: String,

    /// 葉子總數
    pub leaf_count: usize,

    /// 樹的深度
    pub depth: usize,

    /// 所有葉子的哈希（按輸入順序）
    pub leaf_hashes: Vec<String>,

    /// 每個葉子的包含證明
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub proofs: Vec<MerkleProof>,
}

impl Commitment {
    /// 從默克爾樹生成承諾報告
    pub fn from_tree(tree: &MerkleTree, with_proofs: bool) -> std::result::Result<Self, MerkleError> {
        let proofs = if with_proofs {
            (0..tree.leaf_count())
                .map(|i| tree.generate_proof(i))
                .collect::<std::result::Result<Vec<_>, _>>()?
        } else {
            Vec::new()
        };

        Ok(Self {
            root_hash: tree.root_hash().to_string(),
            leaf_count: tree.leaf_count(),
            depth: tree.depth(),
            leaf_hashes: tree.leaf_hashes().to_vec(),
            proofs,
        })
    }

    /// 驗證某條目屬於本承諾
    ///
    /// 證明自帶的 `leaf_count` 必須與承諾一致，否則拒絕。
    pub fn verify_leaf(&self, proof: &MerkleProof, leaf_data: &str) -> bool {
        proof.leaf_count == self.leaf_count as u64 && proof.verify(leaf_data, &self.root_hash)
    }

    /// 序列化為格式化 JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
