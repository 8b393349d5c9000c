//! Optional TOML configuration: key bindings and DIP switches.
//!
//! Entirely optional — with no `--config` flag, [`input::default_key_map`]
//! and the hardware's default DIP settings apply untouched. A config file
//! only overrides the keys/switches it names.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub keys: HashMap<String, String>,
    #[serde(default)]
    pub dip: DipConfig,
}

#[derive(Debug, Default, Deserialize)]
pub struct DipConfig {
    pub lives: Option<u8>,
    pub bonus_life_at_1000: Option<bool>,
    pub hide_coin_info: Option<bool>,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl Config {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        toml::from_str(&text).map_err(ConfigError::Parse)
    }
}
