use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use drills_core::sequence::SequenceLayout;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct DrillsConfig {
    pub version: String,
    pub show_prompts: bool,
    pub matrix: MatrixConfig,
    pub sequence: SequenceConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct MatrixConfig {
    /// Largest accepted row or column count.
    pub max_dimension: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SequenceConfig {
    pub len: usize,
    pub split: usize,
    pub row_width: usize,
}

impl Default for DrillsConfig {
    fn default() -> Self {
        DrillsConfig {
            version: clap::crate_version!().to_string(),
            show_prompts: true,
            matrix: MatrixConfig::default(),
            sequence: SequenceConfig::default(),
        }
    }
}

impl Default for MatrixConfig {
    fn default() -> Self {
        MatrixConfig {
            max_dimension: 1000,
        }
    }
}

impl Default for SequenceConfig {
    fn default() -> Self {
        let layout = SequenceLayout::default();
        SequenceConfig {
            len: layout.len,
            split: layout.split,
            row_width: layout.row_width,
        }
    }
}

impl From<&SequenceConfig> for SequenceLayout {
    fn from(config: &SequenceConfig) -> Self {
        SequenceLayout {
            len: config.len,
            split: config.split,
            row_width: config.row_width,
        }
    }
}

impl DrillsConfig {
    /// Load a JSON config. Missing or malformed fields fall back to defaults
    /// with a warning; an unreadable file or invalid JSON is an error.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let config_json = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        Self::from_json(&config_json)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }

    pub fn from_json(config_json: &str) -> Result<Self> {
        let partial: serde_json::Value = serde_json::from_str(config_json)?;
        let mut config = DrillsConfig::default();

        macro_rules! load_or_default {
            ($field:ident) => {
                if let Some(val) = partial.get(stringify!($field)) {
                    if let Ok(parsed) = serde_json::from_value(val.clone()) {
                        config.$field = parsed;
                    } else {
                        log::warn!(
                            "Config invalid value for '{}', using default: {:?}",
                            stringify!($field),
                            config.$field
                        );
                    }
                } else {
                    log::debug!(
                        "Config missing field '{}', using default: {:?}",
                        stringify!($field),
                        config.$field
                    );
                }
            };
        }

        load_or_default!(show_prompts);
        load_or_default!(matrix);
        load_or_default!(sequence);

        Ok(config)
    }

    /// Load `path` when given, otherwise return the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::debug!("[Drills] Using config: {:?}", path);
                Self::from_file(path)
            }
            None => {
                log::debug!("[Drills] No config provided; using defaults.");
                Ok(Self::default())
            }
        }
    }
}
