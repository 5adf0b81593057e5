//! Configuration loading
//!
//! Reads `~/.config/medcomplete/config.toml`. A missing file means defaults.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

mod types;

pub use types::{AutocompleteConfig, Config, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};

const CONFIG_DIR: &str = "medcomplete";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user's config file, falling back to defaults if there is none
pub fn load_config() -> Result<Config, ConfigError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, ConfigError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config file at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    parse_config_toml(&contents)
}

pub fn parse_config_toml(content: &str) -> Result<Config, ConfigError> {
    let config: Config =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate(&config)?;
    Ok(config)
}

/// Check value ranges that TOML types alone cannot express
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    let autocomplete = &config.autocomplete;

    if autocomplete.min_chars == 0 {
        return Err(ConfigError::Invalid(
            "autocomplete.min_chars must be at least 1".to_string(),
        ));
    }
    if autocomplete.endpoint.trim().is_empty() {
        return Err(ConfigError::Invalid(
            "autocomplete.endpoint must not be empty".to_string(),
        ));
    }
    if autocomplete.timeout_ms == 0 {
        return Err(ConfigError::Invalid(
            "autocomplete.timeout_ms must be greater than 0".to_string(),
        ));
    }

    Ok(())
}
