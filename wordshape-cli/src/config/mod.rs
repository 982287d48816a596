//! Configuration module

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wordshape_core::language::DEFAULT_LANGUAGE;

use crate::error::{CliError, CliResult};

/// Config file picked up from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "wordshape.toml";

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Engine configuration
    #[serde(default)]
    pub engine: EngineConfig,

    /// Overrides storage configuration
    #[serde(default)]
    pub overrides: OverridesConfig,
}

/// Engine-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Language tag used when `--language` is not given
    #[serde(default = "default_language")]
    pub language: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
        }
    }
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

/// Overrides-related configuration
#[derive(Debug, Deserialize, Serialize, Default, PartialEq, Eq)]
pub struct OverridesConfig {
    /// Directory holding one JSON document per language; in-memory when unset
    pub directory: Option<PathBuf>,
}

impl CliConfig {
    /// Parse a config file
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())).into())
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// The explicit file, else `wordshape.toml` if present, else defaults
    pub fn resolve(explicit: Option<&Path>) -> CliResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let fallback = Path::new(DEFAULT_CONFIG_FILE);
        if fallback.is_file() {
            log::debug!("Using {DEFAULT_CONFIG_FILE} from the working directory");
            return Self::from_file(fallback);
        }

        Ok(Self::default())
    }
}
