//! Configuration system for jsonexplorer.
//!
//! Settings are read from a TOML file and every field falls back to a
//! default when it is missing, so a partial file is always valid.
//!
//! # Example
//!
//! ```
//! use jsonexplorer::config::Config;
//!
//! let config = Config::default();
//! assert_eq!(config.column_padding, 2);
//!
//! let custom = Config {
//!     column_padding: 4,
//!     ..Config::default()
//! };
//! assert_eq!(custom.empty_message, "0 result");
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for the jsonexplorer command.
///
/// # Fields
///
/// * `column_padding` - Spaces after the widest cell of each column (default: 2)
/// * `empty_message` - Text printed when a query yields no rows (default: "0 result")
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Spaces after the widest cell of each column
    #[serde(default = "default_column_padding")]
    pub column_padding: usize,

    /// Text printed when a query yields no rows
    #[serde(default = "default_empty_message")]
    pub empty_message: String,
}

fn default_column_padding() -> usize {
    2
}

fn default_empty_message() -> String {
    "0 result".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            column_padding: default_column_padding(),
            empty_message: default_empty_message(),
        }
    }
}

impl Config {
    /// Returns the path to the config file.
    ///
    /// Uses `~/.config/jsonexplorer/config.toml` on all platforms.
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|mut path| {
            path.push(".config");
            path.push("jsonexplorer");
            path.push("config.toml");
            path
        })
    }

    /// Loads configuration from the default config file.
    ///
    /// Returns the default configuration if the file doesn't exist or can't be read.
    pub fn load() -> Self {
        let config_path = match Self::config_path() {
            Some(path) => path,
            None => return Self::default(),
        };

        if !config_path.exists() {
            return Self::default();
        }

        Self::load_from(&config_path).unwrap_or_else(|err| {
            log::warn!("ignoring config file: {:#}", err);
            Self::default()
        })
    }

    /// Loads configuration from an explicit file. Unlike `load`, a missing or
    /// malformed file is an error.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }
}
