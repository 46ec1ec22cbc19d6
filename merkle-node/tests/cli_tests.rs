//! 命令行集成測試

use std::path::Path;
use std::process::{Command, Output};

const ABC_DIGEST: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

fn run(config: &Path, args: &[&str], env: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_merkle-node"));
    cmd.arg("--config").arg(config).args(args);
    for key in ["MERKLE_LOG_LEVEL", "MERKLE_OUTPUT", "MERKLE_INPUT_PATH"] {
        cmd.env_remove(key);
    }
    for (key, value) in env {
        cmd.env(key, value);
    }
    cmd.output().expect("failed to run merkle-node")
}

/// 測試 --hash 不讀取配置文件
#[test]
fn test_hash_ignores_broken_config() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("merkle.toml");
    std::fs::write(&config, "log_level = \"loud\"\n").unwrap();

    let output = run(&config, &["--hash", "abc"], &[]);

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), ABC_DIGEST);
}

/// 測試無效的 --log-level 被拒絕
#[test]
fn test_unknown_log_level_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.toml");

    let output = run(&config, &["--log-level", "loud", "--item", "a"], &[]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("loud"));
}

/// 測試配置文件不存在時讀取環境變量
#[test]
fn test_missing_config_falls_back_to_env() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.toml");

    let output = run(&config, &["--item", "a", "--item", "b"], &[("MERKLE_OUTPUT", "json")]);
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["leaf_count"], 2);
    assert_eq!(
        report["root_hash"],
        merkle_node::build_merkle_root(["a", "b"]).unwrap()
    );
}

/// 測試默認輸出為根哈希
#[test]
fn test_default_output_is_root_hash() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("missing.toml");

    let output = run(&config, &["--item", "a", "--item", "b", "--item", "c"], &[]);

    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        merkle_node::build_merkle_root(["a", "b", "c"]).unwrap()
    );
}
