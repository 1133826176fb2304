//! Configuration types and parsing for phasewise.yml

use crate::error::{CoreError, CoreResult};
use crate::phase::Phase;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main project configuration from phasewise.yml
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Project name
    pub name: String,

    /// Directory containing before-phase scripts, relative to the project root
    #[serde(default = "default_before_path")]
    pub before_path: String,

    /// Directory containing after-phase scripts, relative to the project root
    #[serde(default = "default_after_path")]
    pub after_path: String,

    /// Collection holding the applied-state ledger
    #[serde(default = "default_ledger_collection")]
    pub ledger_collection: String,

    /// Per-script execution deadline in seconds; absent means no deadline
    #[serde(default)]
    pub script_timeout_secs: Option<u64>,

    /// MongoDB connection configuration
    #[serde(default)]
    pub mongodb: MongoConfig,
}

/// MongoDB connection configuration
///
/// `url` and `database_name` are optional at parse time; the connection
/// manager validates them before any network I/O.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MongoConfig {
    /// Connection string, e.g. `mongodb://localhost:27017`
    #[serde(default)]
    pub url: Option<String>,

    /// Target database name
    #[serde(default)]
    pub database_name: Option<String>,

    /// Client options
    #[serde(default)]
    pub options: MongoOptions,
}

/// Tunable MongoDB client options
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MongoOptions {
    /// TCP connect timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub connect_timeout_secs: u64,

    /// Server selection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub server_selection_timeout_secs: u64,
}

impl Default for MongoOptions {
    fn default() -> Self {
        Self {
            connect_timeout_secs: default_timeout_secs(),
            server_selection_timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_before_path() -> String {
    "before".to_string()
}

fn default_after_path() -> String {
    "after".to_string()
}

fn default_ledger_collection() -> String {
    "migrations".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Config {
    /// Load configuration from a project directory.
    ///
    /// Looks for `phasewise.yml`, falling back to `phasewise.yaml`.
    pub fn load(dir: &Path) -> CoreResult<Self> {
        let yml_path = dir.join("phasewise.yml");
        let yaml_path = dir.join("phasewise.yaml");

        let path = if yml_path.exists() {
            yml_path
        } else if yaml_path.exists() {
            yaml_path
        } else {
            return Err(CoreError::ConfigNotFound {
                path: yml_path.display().to_string(),
            });
        };

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Absolute path of the script directory for `phase`
    pub fn phase_dir(&self, root: &Path, phase: Phase) -> PathBuf {
        match phase {
            Phase::Before => root.join(&self.before_path),
            Phase::After => root.join(&self.after_path),
        }
    }

    /// Per-script execution deadline, if configured
    pub fn script_timeout(&self) -> Option<Duration> {
        self.script_timeout_secs.map(Duration::from_secs)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
