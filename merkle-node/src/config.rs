//! 配置管理模塊
//!
//! 負責加載和驗證節點配置

use crate::error::{NodeError, Result};
use crate::types::NodeConfig;
use config::{Config, File};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// 從配置文件加載節點配置
///
/// # 參數
/// - `config_path`: 配置文件路徑（支持 TOML、JSON、YAML）
///
/// # 示例
/// ```no_run
/// use merkle_node::config::load_config;
///
/// let config = load_config("merkle.toml").expect("Failed to load config");
/// println!("Output: {}", config.output);
/// ```
pub fn load_config<P: AsRef<Path>>(config_path: P) -> Result<NodeConfig> {
    let config = Config::builder()
        .add_source(File::from(config_path.as_ref()))
        .build()
        .map_err(|e| NodeError::Config(format!("Failed to load config file: {}", e)))?;

    let node_config: NodeConfig = config
        .try_deserialize()
        .map_err(|e| NodeError::Config(format!("Failed to parse config: {}", e)))?;

    validate_config(&node_config)?;

    Ok(node_config)
}

/// 從環境變量加載配置
///
/// 環境變量前綴: `MERKLE_`
/// 示例: `MERKLE_LOG_LEVEL`, `MERKLE_OUTPUT`, `MERKLE_INPUT_PATH`
pub fn load_config_from_env() -> Result<NodeConfig> {
    let config = Config::builder()
        .add_source(config::Environment::with_prefix("MERKLE"))
        .build()
        .map_err(|e| NodeError::Config(format!("Failed to load env vars: {}", e)))?;

    let node_config: NodeConfig = config
        .try_deserialize()
        .map_err(|e| NodeError::Config(format!("Failed to parse env config: {}", e)))?;

    validate_config(&node_config)?;

    Ok(node_config)
}

/// 以命令行指定的日誌級別覆蓋配置，並重新驗證
pub fn override_log_level(config: &mut NodeConfig, log_level: Option<&str>) -> Result<()> {
    if let Some(level) = log_level {
        config.log_level = level.to_string();
    }
    validate_config(config)
}

/// 驗證配置的有效性
pub fn validate_config(config: &NodeConfig) -> Result<()> {
    if !LOG_LEVELS.contains(&config.log_level.to_lowercase().as_str()) {
        return Err(NodeError::Config(format!(
            "Invalid log level: {} (expected one of {})",
            config.log_level,
            LOG_LEVELS.join(", ")
        )));
    }

    config.output_format()?;

    if let Some(path) = &config.input_path {
        if path.trim().is_empty() {
            return Err(NodeError::Config("input_path must not be empty".to_string()));
        }
    }

    Ok(())
}
