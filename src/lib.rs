//! # Vulcan One - configuration and token-id helpers
//!
//! Building blocks shared by the Vulcan One token service: loading the
//! service configuration, validating ERC1155 composite token-ids, parsing
//! big integers and matching cross-chain collection deployments.
//!
//! ## Architecture
//!
//! - `config`: Configuration structure, accessors and validation
//! - `config_loader`: Loading configuration files from a base directory
//! - `utils`: Big-integer parsing and counting, token-id validation,
//!   cross-chain lookup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use vulcan_one::config_loader::ConfigLoader;
//! use vulcan_one::utils::is_valid_erc1155_format;
//!
//! let config = ConfigLoader::new("./configs").load("service.json")?;
//! assert!(config.is_valid_standard("erc1155"));
//! assert!(is_valid_erc1155_format("955_921&1_2"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Configuration Format
//!
//! ```json
//! {
//!   "evmNetworks": {
//!     "eth": ["wss://ethereum.publicnode.com", "https://eth.llamarpc.com"],
//!     "arb": ["https://arb1.arbitrum.io/rpc"]
//!   },
//!   "validStandards": ["erc20", "erc721", "erc1155"],
//!   "port": ":8080"
//! }
//! ```
//!
//! ## Error Handling
//!
//! Loading returns a typed [`config_loader::ConfigError`]. Parsing and
//! validation helpers never fail with an error: they report `None`/`false`.

pub mod config;
pub mod config_loader;
pub mod utils;

pub use config::{Configuration, ValidationError};
pub use config_loader::{load_configuration, ConfigError, ConfigLoader, DEFAULT_CONFIG_DIR};
