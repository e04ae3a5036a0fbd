//! Configuration for graphwalk
//!
//! Stored as TOML. Lookup order: an explicit `--config` path, then
//! `$GRAPHWALK_CONFIG_DIR/config.toml`, then `<user config dir>/graphwalk/config.toml`.
//! A missing default file means built-in defaults.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{GraphwalkError, Result};
use crate::graph::TraversalLimits;

pub use types::{GraphwalkConfig, LimitsConfig, OutputConfig};

const CONFIG_DIR: &str = "graphwalk";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHWALK_CONFIG_DIR";

impl GraphwalkConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphwalkError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphwalkError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: GraphwalkConfig = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "config_loaded");
        Ok(config)
    }

    /// Load an explicit file (which must exist), or the default file if present
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match Self::default_path() {
            Ok(path) if path.exists() => Self::load(&path),
            Ok(_) => Ok(Self::default()),
            Err(e) => {
                tracing::debug!(error = %e, "no config directory; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Traversal limits described by this configuration
    pub fn limits(&self) -> TraversalLimits {
        TraversalLimits {
            timeout: Duration::from_secs(self.limits.timeout_secs),
            max_frontier: self.limits.max_frontier,
        }
    }
}
