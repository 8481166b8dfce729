//! Agent configuration
//!
//! Loaded from an optional JSON file; command line flags override the
//! file, and missing fields fall back to the defaults below.

use std::path::{Path, PathBuf};
use std::time::Duration;

use kalah_engine::constants::{MAX_DEPTH, MIN_DEPTH};
use kalah_engine::{DepthRange, EngineError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default thinking time per move
pub const DEFAULT_TIME_BUDGET_MS: u64 = 1000;

/// Errors raised while loading or validating configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Cannot read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    Invalid(#[from] EngineError),
}

/// Search settings for one agent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgentConfig {
    /// Wall-clock budget per decision, checked between depths
    pub time_budget_ms: u64,
    /// First depth searched
    pub min_depth: u32,
    /// Exclusive upper depth bound
    pub max_depth: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            time_budget_ms: DEFAULT_TIME_BUDGET_MS,
            min_depth: MIN_DEPTH,
            max_depth: MAX_DEPTH,
        }
    }
}

impl AgentConfig {
    /// Parse a JSON document; absent fields keep their defaults
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Read and parse a JSON config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Check the depth window, returning it on success
    pub fn validate(&self) -> Result<DepthRange, ConfigError> {
        Ok(DepthRange::new(self.min_depth, self.max_depth)?)
    }

    pub fn time_budget(&self) -> Duration {
        Duration::from_millis(self.time_budget_ms)
    }
}
