//! Engine configuration for graphkit
//!
//! Configuration is read from a TOML file: either an explicit path, or
//! `config.toml` in the user config directory (`~/.config/graphkit/` on
//! Linux, overridable with `GRAPHKIT_CONFIG_DIR`).

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphError, Result};

pub use types::{
    EngineConfig, SpanningTreeConfig, SpanningTreeGuard, TraversalConfig, TraversalMode,
    WeightConfig,
};

const CONFIG_DIR: &str = "graphkit";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "GRAPHKIT_CONFIG_DIR";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            GraphError::Other(format!(
                "failed to read config from {}: {}",
                path.display(),
                e
            ))
        })?;
        let config: EngineConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Default location of the user configuration file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    GraphError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the user configuration, falling back to defaults when no file exists
    pub fn discover() -> Result<Self> {
        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "loading engine config");
        Self::load(&path)
    }

    /// Builder-style override of the traversal mode
    pub fn with_traversal_mode(mut self, mode: TraversalMode) -> Self {
        self.traversal.mode = mode;
        self
    }

    /// Builder-style override of the spanning tree guard
    pub fn with_spanning_tree_guard(mut self, guard: SpanningTreeGuard) -> Self {
        self.spanning_tree.guard = guard;
        self
    }

    /// Builder-style override of the negative weight policy
    pub fn with_negative_weights(mut self, allow: bool) -> Self {
        self.weights.allow_negative = allow;
        self
    }
}
