//! Crate-level error type
//!
//! The evaluator itself never fails; these errors come from the ambient
//! layers around it (configuration, CLI input, output writers).

use thiserror::Error;

/// Errors raised outside the scoring core
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse configuration: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Invalid configuration value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("Hour must be in 0..=23, got {0}")]
    InvalidHour(u32),
}

pub type Result<T> = std::result::Result<T, Error>;
