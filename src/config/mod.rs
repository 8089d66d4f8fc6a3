use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_CONFIG_FILE: &str = "drs-guard.toml";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub dataset: DatasetConfig,
    pub vocabulary: VocabularyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Extension of recognized data files.
    pub extension: String,

    /// Literal first path segment of the directory template.
    pub mip_era: String,

    /// Glob patterns excluded from enumeration.
    pub exclude: Vec<String>,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            extension: "nc".to_string(),
            mip_era: "CMIP6".to_string(),
            exclude: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VocabularyConfig {
    /// Root directory of the controlled-vocabulary store.
    pub dir: PathBuf,

    /// Authority namespace within the store.
    pub authority: String,
}

impl Default for VocabularyConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("cv"),
            authority: "wcrp".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from an explicit path.
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load `drs-guard.toml` from the current directory, falling back to
    /// defaults when it does not exist.
    ///
    /// # Errors
    /// Fails only if an existing file cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let path = Path::new(DEFAULT_CONFIG_FILE);
        if path.exists() {
            Self::load_from_path(path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
