//! 內容列表讀取
//!
//! 條目來源的優先順序: 命令行條目 > 輸入文件 > 配置中的 `input_path`。

use std::path::Path;

use tracing::debug;

use crate::error::{NodeError, Result};

/// 從文件讀取內容列表（每行一個條目，保留順序）
pub fn read_items<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let items: Vec<String> = contents.lines().map(str::to_string).collect();

    debug!(path = %path.display(), items = items.len(), "Read items from file");
    Ok(items)
}

/// 按優先順序確定要提交的條目
pub fn resolve_items(
    cli_items: Vec<String>,
    input_file: Option<&Path>,
    config_input: Option<&str>,
) -> Result<Vec<String>> {
    if !cli_items.is_empty() {
        return Ok(cli_items);
    }

    if let Some(path) = input_file {
        return read_items(path);
    }

    if let Some(path) = config_input {
        return read_items(path);
    }

    Err(NodeError::Input(
        "no items given (use --item, --input or input_path in the config file)".to_string(),
    ))
}
