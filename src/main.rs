use clap::{Parser, Subcommand};
use color_eyre::eyre::{bail, eyre, WrapErr};
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use num_bigint::BigInt;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use vulcan_one::config_loader::{ConfigLoader, DEFAULT_CONFIG_DIR};
use vulcan_one::utils::{
    count_elements, erc1155_pattern_ready, get_crosschain_data, is_valid_erc1155_format,
    split_erc1155_ids, str_to_big_int, CrossChainCollections,
};

/// Configuration and ERC1155 token-id helpers for the Vulcan One service
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Directory configuration files are loaded from
    #[arg(long, default_value = DEFAULT_CONFIG_DIR)]
    config_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Load and validate a configuration file from the config directory
    CheckConfig {
        /// Configuration file name (directory components are ignored)
        file: String,
    },

    /// Check a composite ERC1155 token-id such as 955_921&1_2
    ValidateToken { token_id: String },

    /// Find collections deployed at a contract address on a network
    Crosschain {
        #[arg(long)]
        network: String,

        #[arg(long)]
        contract: String,

        /// JSON file mapping collection id -> network -> contract address
        #[arg(long)]
        collections: PathBuf,
    },

    /// Count elements equal to the first element of each group
    Count {
        /// Comma-separated integers, one argument per group
        #[arg(allow_hyphen_values = true)]
        groups: Vec<String>,
    },

    /// Parse a decimal integer of any size
    Parse {
        #[arg(allow_hyphen_values = true)]
        value: String,
    },
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    let args = Args::parse();

    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level.as_str())).init();

    if !erc1155_pattern_ready() {
        bail!("ERC1155 token-id pattern failed to compile");
    }

    match args.command {
        Command::CheckConfig { file } => check_config(&args.config_dir, &file),
        Command::ValidateToken { token_id } => {
            validate_token(&token_id);
            Ok(())
        }
        Command::Crosschain {
            network,
            contract,
            collections,
        } => crosschain(&network, &contract, &collections),
        Command::Count { groups } => count(&groups),
        Command::Parse { value } => parse(&value),
    }
}

fn check_config(config_dir: &Path, file: &str) -> Result<()> {
    let loader = ConfigLoader::new(config_dir);
    let config = loader
        .load(file)
        .wrap_err_with(|| format!("Failed to load configuration '{}'", file))?;

    config
        .validate()
        .wrap_err_with(|| format!("Configuration '{}' is invalid", file))?;

    info!("Configuration {:?} is valid", loader.resolve(file));
    println!("port: {}", config.port);
    println!("standards: {}", config.valid_standards.join(", "));
    for network in config.networks() {
        let endpoints = config.endpoints(network).unwrap_or_default();
        println!("network {}: {} endpoint(s)", network, endpoints.len());
    }

    Ok(())
}

fn validate_token(token_id: &str) {
    if !is_valid_erc1155_format(token_id) {
        println!("{} is not a valid ERC1155 token-id", token_id);
        return;
    }

    println!("{} is a valid ERC1155 token-id", token_id);
    for pair in split_erc1155_ids(token_id).unwrap_or_default() {
        println!("  id {} amount {}", pair.id, pair.amount);
    }
}

fn crosschain(network: &str, contract: &str, path: &Path) -> Result<()> {
    let data = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read collections file '{}'", path.display()))?;
    let collections: CrossChainCollections = serde_json::from_str(&data)
        .wrap_err_with(|| format!("Failed to parse collections file '{}'", path.display()))?;

    let matches = get_crosschain_data(network, contract, &collections);
    if matches.is_empty() {
        warn!("No collection deployed at {} on {}", contract, network);
    }

    // Sorted for stable output
    let sorted: BTreeMap<_, BTreeMap<_, _>> = matches
        .into_iter()
        .map(|(id, deployments)| (id, deployments.into_iter().collect()))
        .collect();
    println!("{}", serde_json::to_string_pretty(&sorted)?);

    Ok(())
}

fn count(groups: &[String]) -> Result<()> {
    let parsed = groups
        .iter()
        .map(|group| parse_group(group))
        .collect::<Result<Vec<_>>>()?;

    let counts: Vec<String> = count_elements(&parsed)
        .iter()
        .map(BigInt::to_string)
        .collect();
    println!("[{}]", counts.join(", "));

    Ok(())
}

fn parse_group(group: &str) -> Result<Vec<BigInt>> {
    if group.trim().is_empty() {
        return Ok(Vec::new());
    }

    group
        .split(',')
        .map(|value| {
            let value = value.trim();
            str_to_big_int(value).ok_or_else(|| eyre!("'{}' is not a decimal integer", value))
        })
        .collect()
}

fn parse(value: &str) -> Result<()> {
    match str_to_big_int(value) {
        Some(n) => {
            println!("{}", n);
            Ok(())
        }
        None => bail!("'{}' is not a decimal integer", value),
    }
}
