use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// URL schemes accepted for EVM network endpoints
const ENDPOINT_SCHEMES: &[&str] = &["http", "https", "ws", "wss"];

/// Service configuration as stored in the JSON configuration file
///
/// ```json
/// {
///   "evmNetworks": { "eth": ["https://eth.llamarpc.com"] },
///   "validStandards": ["erc20", "erc721", "erc1155"],
///   "port": ":8080"
/// }
/// ```
///
/// Missing fields fall back to their empty value; unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// RPC endpoints per network name, in order of preference
    pub evm_networks: HashMap<String, Vec<String>>,
    /// Token standards the service accepts (e.g. "erc20", "nft")
    pub valid_standards: Vec<String>,
    /// Listen address, either ":<port>" or "<host>:<port>"
    pub port: String,
}

impl Configuration {
    /// Endpoints configured for a network, if the network is known
    pub fn endpoints(&self, network: &str) -> Option<&[String]> {
        self.evm_networks.get(network).map(Vec::as_slice)
    }

    /// Names of all configured networks, sorted
    pub fn networks(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.evm_networks.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Check whether `standard` is listed in `validStandards` (ASCII case-insensitive)
    pub fn is_valid_standard(&self, standard: &str) -> bool {
        self.valid_standards
            .iter()
            .any(|s| s.eq_ignore_ascii_case(standard))
    }

    /// Validate the configuration
    ///
    /// Loading never calls this; a configuration that parses is returned as-is
    /// and callers decide whether to enforce these checks.
    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::validate_port(&self.port)?;

        if self.valid_standards.is_empty() {
            return Err(ValidationError::InvalidStandards(
                "validStandards cannot be empty".to_string(),
            ));
        }
        if let Some(blank) = self.valid_standards.iter().position(|s| s.trim().is_empty()) {
            return Err(ValidationError::InvalidStandards(format!(
                "validStandards entry {} is blank",
                blank
            )));
        }

        // Sorted so the reported error is stable across runs
        for network in self.networks() {
            let endpoints = &self.evm_networks[network];
            if endpoints.is_empty() {
                return Err(ValidationError::InvalidNetwork(format!(
                    "network '{}' has no endpoints",
                    network
                )));
            }
            for endpoint in endpoints {
                Self::validate_endpoint(network, endpoint)?;
            }
        }

        Ok(())
    }

    fn validate_port(port: &str) -> Result<(), ValidationError> {
        if port.is_empty() {
            return Err(ValidationError::InvalidPort("port cannot be empty".to_string()));
        }

        let (_host, number) = port.rsplit_once(':').ok_or_else(|| {
            ValidationError::InvalidPort(format!(
                "'{}' must have the form ':<port>' or '<host>:<port>'",
                port
            ))
        })?;

        number.parse::<u16>().map_err(|_| {
            ValidationError::InvalidPort(format!("'{}' is not a valid port number", number))
        })?;

        Ok(())
    }

    fn validate_endpoint(network: &str, endpoint: &str) -> Result<(), ValidationError> {
        match endpoint.split_once("://") {
            Some((scheme, rest))
                if !rest.is_empty()
                    && ENDPOINT_SCHEMES
                        .iter()
                        .any(|s| s.eq_ignore_ascii_case(scheme)) =>
            {
                Ok(())
            }
            _ => Err(ValidationError::InvalidNetwork(format!(
                "network '{}' has unsupported endpoint '{}' (expected one of: {})",
                network,
                endpoint,
                ENDPOINT_SCHEMES.join(", ")
            ))),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid port configuration: {0}")]
    InvalidPort(String),
    #[error("Invalid network configuration: {0}")]
    InvalidNetwork(String),
    #[error("Invalid standards configuration: {0}")]
    InvalidStandards(String),
}
