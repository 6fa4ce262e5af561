use std::path::PathBuf;
use thiserror::Error;

use super::types::SourceCategory;

/// Errors raised while building a [`super::SourceRegistry`].
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("registry record has an empty domain")]
    EmptyDomain,

    #[error("duplicate registry domain: {domain}")]
    DuplicateDomain { domain: String },

    #[error("score {score} for '{domain}' is outside 0..=100")]
    ScoreOutOfRange { domain: String, score: u8 },

    #[error("'{domain}' is marked reliable but has category {category} and score {score}")]
    InconsistentReliability {
        domain: String,
        category: SourceCategory,
        score: u8,
    },

    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse registry JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
