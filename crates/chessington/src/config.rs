//! Configuration file loading.
//!
//! Display settings are read from a TOML file (`chessington.toml` by
//! default). A missing file means the defaults; command-line flags are
//! applied on top by the caller.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Display settings for the terminal game.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Draw pieces with Unicode figurines instead of letters.
    pub unicode: bool,
    /// After each move, list the squares the side to move can move from.
    pub hints: bool,
}

impl Config {
    /// Default configuration file name, looked up in the working directory.
    pub const DEFAULT_PATH: &'static str = "chessington.toml";

    /// Loads the configuration from `path`, falling back to the defaults if
    /// the file does not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }
}
