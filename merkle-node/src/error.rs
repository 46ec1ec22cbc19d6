//! 默克爾節點統一錯誤類型定義
//!
//! 使用 thiserror crate 提供良好的錯誤鏈和上下文信息。

use thiserror::Error;

use crate::crypto::MerkleError;

/// 節點錯誤類型
#[derive(Error, Debug)]
pub enum NodeError {
    /// 默克爾樹構建或證明錯誤
    #[error("Merkle error: {0}")]
    Merkle(#[from] MerkleError),

    /// 配置錯誤
    ///
    /// 當配置文件格式錯誤或參數無效時返回此錯誤
    #[error("Configuration error: {0}")]
    Config(String),

    /// 輸入錯誤
    ///
    /// 當沒有提供任何內容條目時返回此錯誤
    #[error("Input error: {0}")]
    Input(String),

    /// 序列化/反序列化錯誤
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O 錯誤
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result 類型別名
pub type Result<T> = std::result::Result<T, NodeError>;

/// 從 JSON 錯誤轉換
impl From<serde_json::Error> for NodeError {
    fn from(err: serde_json::Error) -> Self {
        NodeError::Serialization(err.to_string())
    }
}
