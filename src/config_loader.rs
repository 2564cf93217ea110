use crate::config::Configuration;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Base directory configuration files are read from when none is given
pub const DEFAULT_CONFIG_DIR: &str = "./configs";

/// Errors that can occur while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be opened or read
    #[error(transparent)]
    Read(#[from] io::Error),

    /// The file is not valid JSON or does not have the configuration shape
    #[error("error unmarshalling JSON: {0}")]
    Parse(#[source] serde_json::Error),
}

/// Loads configuration files from a fixed base directory
///
/// Only the final component of a requested filename is used, so names such as
/// `../../etc/passwd` resolve to `<base_dir>/passwd` and never leave the base
/// directory.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    base_dir: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_DIR)
    }
}

impl ConfigLoader {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Resolve `filename` beneath the base directory
    ///
    /// A name without a final component (`""`, `".."`, `"/"`) resolves to the
    /// base directory itself, which then fails to load as a file.
    pub fn resolve(&self, filename: impl AsRef<Path>) -> PathBuf {
        match filename.as_ref().file_name() {
            Some(name) => self.base_dir.join(name),
            None => {
                warn!(
                    "Configuration name {:?} has no file component",
                    filename.as_ref()
                );
                self.base_dir.clone()
            }
        }
    }

    /// Load and parse a configuration file
    pub fn load(&self, filename: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
        let path = self.resolve(filename);
        info!("Loading configuration from: {:?}", path);

        let data = fs::read(&path)?;
        debug!("Read {} bytes from {:?}", data.len(), path);

        let config: Configuration = serde_json::from_slice(&data).map_err(ConfigError::Parse)?;

        info!(
            "Loaded configuration with {} network(s) and {} standard(s)",
            config.evm_networks.len(),
            config.valid_standards.len()
        );

        Ok(config)
    }
}

/// Load a configuration file from [`DEFAULT_CONFIG_DIR`]
pub fn load_configuration(filename: impl AsRef<Path>) -> Result<Configuration, ConfigError> {
    ConfigLoader::default().load(filename)
}
