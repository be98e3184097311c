use crate::error::{Result, StatzError};
use crate::formatters::{FormatterRegistry, DEFAULT_BAR_WIDTH};
use serde::Deserialize;
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for statz, stored next to the ledger in config.json
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct StatzConfig {
    /// Number of cells in a progress bar
    #[serde(default = "default_bar_width")]
    pub bar_width: usize,

    /// Attributes rendered as a progress bar (when they have a max)
    #[serde(default = "default_bar_attributes")]
    pub bar_attributes: Vec<String>,
}

fn default_bar_width() -> usize {
    DEFAULT_BAR_WIDTH
}

fn default_bar_attributes() -> Vec<String> {
    vec!["hp".to_string(), "mp".to_string()]
}

impl Default for StatzConfig {
    fn default() -> Self {
        Self {
            bar_width: default_bar_width(),
            bar_attributes: default_bar_attributes(),
        }
    }
}

impl StatzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(StatzError::Io)?;
        let config: StatzConfig =
            serde_json::from_str(&content).map_err(StatzError::Serialization)?;
        Ok(config)
    }

    pub fn formatters(&self) -> FormatterRegistry {
        FormatterRegistry::with_bars(self.bar_attributes.iter().cloned(), self.bar_width)
    }
}
