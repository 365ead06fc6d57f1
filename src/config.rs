//! Runtime configuration, read from a `biblos.toml` next to the data.
//!
//! Everything is optional; a missing file means defaults. The catalog
//! path is relative to the working directory unless given as absolute.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// File name looked for in the working directory.
pub const CONFIG_FILE: &str = "biblos.toml";

/// Tool configuration, persisted as TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the catalog JSON payload.
    #[serde(default = "default_catalog")]
    pub catalog: PathBuf,
    /// How many result pages a search prints before stopping.
    #[serde(default = "default_pages")]
    pub pages: u32,
}

fn default_catalog() -> PathBuf {
    PathBuf::from("catalog.json")
}
fn default_pages() -> u32 {
    1
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: default_catalog(),
            pages: default_pages(),
        }
    }
}

impl Config {
    /// Load from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load the config file from `dir` if one exists, else defaults.
    pub fn discover_in(dir: &Path) -> Result<Self, ConfigError> {
        let candidate = dir.join(CONFIG_FILE);
        if candidate.is_file() {
            Self::load(&candidate)
        } else {
            Ok(Self::default())
        }
    }
}
