//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::verdict::PolicyError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Port value is outside valid range (1-65535).
    #[error("invalid port '{value}': must be between 1 and 65535")]
    InvalidPort { value: String },

    /// Port string could not be parsed as a number.
    #[error("failed to parse port '{value}': {source}")]
    PortParseError {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    /// Bind address string could not be parsed.
    #[error("failed to parse bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("invalid scorer '{value}': expected 'llm' or 'heuristic'")]
    InvalidScorerMode { value: String },

    #[error("invalid value for {name}: '{value}'")]
    InvalidNumber { name: &'static str, value: String },

    #[error("{name} must be set to a positive value")]
    MustBePositive { name: &'static str },

    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    #[error("invalid verdict policy: {0}")]
    Policy(#[from] PolicyError),
}
