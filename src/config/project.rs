use std::fs;
use std::path::{Path, PathBuf};

use super::{ConfigData, CONFIG_FILE};
use crate::error::{ConfigError, UnprintResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub data: ConfigData,
    root: PathBuf,
}

impl Config {
    /// Loads `.unprint.toml` from `dir`, falling back to defaults when absent.
    pub fn load_or_default(dir: impl AsRef<Path>) -> UnprintResult<Self> {
        let root = dir.as_ref().to_path_buf();
        let config_path = root.join(CONFIG_FILE);

        let data = if config_path.exists() {
            let content = fs::read_to_string(&config_path)?;
            toml::from_str(&content).map_err(|e| ConfigError::Invalid {
                path: config_path.clone(),
                message: e.to_string(),
            })?
        } else {
            ConfigData::default()
        };

        tracing::debug!(
            config = %config_path.display(),
            history = %data.history.file.display(),
            "configuration loaded"
        );

        Ok(Self { data, root })
    }

    /// Replaces the configured history file, e.g. from `--history-file`.
    pub fn with_history_file(mut self, file: Option<PathBuf>) -> Self {
        if let Some(file) = file {
            self.data.history.file = file;
        }
        self
    }

    /// History file path; relative paths resolve against the config directory.
    pub fn history_file(&self) -> PathBuf {
        let file = &self.data.history.file;
        if file.is_absolute() {
            file.clone()
        } else {
            self.root.join(file)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data: ConfigData::default(),
            root: PathBuf::from("."),
        }
    }
}
