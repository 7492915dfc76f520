//! Construction and configuration errors
//!
//! The simulation itself is total; only building entities from untrusted
//! numbers and loading configuration can fail.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while constructing level entities
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LevelError {
    #[error("invalid patrol bounds: min {min} must be less than max {max}")]
    InvalidPatrol { min: i32, max: i32 },

    #[error("invalid rectangle size {width}x{height}: both dimensions must be positive")]
    InvalidSize { width: i32, height: i32 },
}

/// Errors raised while loading or validating settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}
