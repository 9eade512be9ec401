//! Runtime configuration for rondo (stored in rondo.toml)
//!
//! Resolution order: `--config <FILE>` flag, then the `RONDO_CONFIG`
//! environment variable, then `rondo.toml` in the current directory.
//! A missing file at the default location falls back to built-in
//! defaults; a missing file named by flag or environment is an error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, RondoError};
use crate::format::OutputFormat;

const CONFIG_FILE: &str = "rondo.toml";
const CONFIG_ENV_VAR: &str = "RONDO_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Output format applied when --format is absent
    pub format: Option<OutputFormat>,
    pub paths: PathsConfig,
    pub tour: TourConfig,
}

/// Settings for the shortest-path command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Source node used when --from is absent
    pub default_source: usize,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self { default_source: 0 }
    }
}

/// Settings for the tour command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TourConfig {
    /// Refuse to approximate a tour unless the graph is metric
    pub require_metric: bool,
}

impl Default for TourConfig {
    fn default() -> Self {
        Self {
            require_metric: true,
        }
    }
}

impl Config {
    /// Load configuration, preferring an explicit path over the
    /// environment variable over the current-directory file.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_required_file(path);
        }

        if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
            return Self::from_required_file(Path::new(&env_path));
        }

        let default_path = Path::new(CONFIG_FILE);
        if default_path.exists() {
            return Self::from_required_file(default_path);
        }

        Ok(Self::default())
    }

    fn from_required_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RondoError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path).map_err(|e| RondoError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| RondoError::InvalidConfig {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }
}
