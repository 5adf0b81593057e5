use std::path::PathBuf;

use thiserror::Error;

use crate::lookup::LookupError;

/// Custom error types for medcomplete
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Suggestion lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors loading or validating the configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(String),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
