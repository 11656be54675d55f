pub mod project;

pub use project::Config;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the optional per-directory configuration file.
pub const CONFIG_FILE: &str = ".unprint.toml";

/// History log location used when nothing else is configured.
pub const DEFAULT_HISTORY_FILE: &str = "unprint_history.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigData {
    pub history: HistoryConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    pub file: PathBuf,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from(DEFAULT_HISTORY_FILE),
        }
    }
}
