//! Merkle Commitment Node
//!
//! 1. Load configuration (file, else `MERKLE_*` environment)
//! 2. Collect the ordered list of items
//! 3. Build the Merkle tree (SHA-256 leaves, double-hashed hex concatenation)
//! 4. Print the root hash, a JSON commitment report, or an inclusion proof

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use merkle_node::config;
use merkle_node::input::resolve_items;
use merkle_node::{Commitment, MerkleTree, NodeConfig, OutputFormat};
use sha256_engine::sha256_hex;

/// Merkle commitment over an ordered list of items
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short, long, default_value = "merkle.toml")]
    config: PathBuf,

    /// Item to commit (repeatable, order is significant)
    #[arg(short, long = "item")]
    items: Vec<String>,

    /// File with one item per line
    #[arg(long)]
    input: Option<PathBuf>,

    /// Print the inclusion proof for the leaf at this index
    #[arg(short, long)]
    prove: Option<usize>,

    /// Print the full commitment report as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Print the SHA-256 hex digest of this text and exit
    #[arg(long)]
    hash: Option<String>,

    /// Log level (trace, debug, info, warn, error), overrides config file
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Some(text) = &args.hash {
        println!("{}", sha256_hex(text.as_bytes()));
        return Ok(());
    }

    // 1. Load configuration
    let (mut config, config_found) = load_configuration(&args.config)?;
    config::override_log_level(&mut config, args.log_level.as_deref())
        .context("Invalid --log-level")?;

    // 2. Initialize logging
    init_logging(&config.log_level)?;

    info!("Starting Merkle node v{}", env!("CARGO_PKG_VERSION"));
    if config_found {
        info!("Loaded configuration: {}", args.config.display());
    } else {
        warn!(
            "Configuration file {} does not exist, using MERKLE_* environment and defaults",
            args.config.display()
        );
    }

    // 3. Collect items
    let items = resolve_items(
        args.items,
        args.input.as_deref(),
        config.input_path.as_deref(),
    )
    .context("Failed to collect items")?;
    info!("Committing {} items", items.len());

    // 4. Build tree
    let tree = MerkleTree::build(&items).context("Failed to build Merkle tree")?;
    info!("Merkle root: {} (depth {})", tree.root_hash(), tree.depth());

    // 5. Output
    if let Some(index) = args.prove {
        let proof = tree
            .generate_proof(index)
            .with_context(|| format!("Failed to generate proof for leaf {}", index))?;
        debug!("Proof has {} steps", proof.depth());
        println!("{}", serde_json::to_string_pretty(&proof)?);
        return Ok(());
    }

    let format = if args.json {
        OutputFormat::Json
    } else {
        config.output_format()?
    };

    match format {
        OutputFormat::Hex => println!("{}", tree.root_hash()),
        OutputFormat::Json => {
            let commitment = Commitment::from_tree(&tree, false)?;
            println!("{}", commitment.to_json()?);
        }
    }

    Ok(())
}

/// Initialize logging system
///
/// Logs go to stderr so stdout only carries the result.
fn init_logging(log_level: &str) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => tracing::Level::TRACE,
        "debug" => tracing::Level::DEBUG,
        "info" => tracing::Level::INFO,
        "warn" => tracing::Level::WARN,
        "error" => tracing::Level::ERROR,
        other => anyhow::bail!("Unknown log level: {}", other),
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}

/// Load configuration file, falling back to the environment when it does not exist
fn load_configuration(config_path: &Path) -> Result<(NodeConfig, bool)> {
    if !config_path.exists() {
        let config =
            config::load_config_from_env().context("Failed to load environment configuration")?;
        return Ok((config, false));
    }

    let config = config::load_config(config_path).context("Failed to load configuration")?;
    Ok((config, true))
}
