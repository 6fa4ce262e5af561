//! Satya library crate (used by the server binary and integration tests).
//!
//! Satya judges the credibility of news articles, with a focus on Nepali outlets.
//! Each analysis blends two signals:
//!
//! - a content assessment from a [`ContentScorer`] (a chat model, or an offline
//!   heuristic), and
//! - the reputation of the publishing domain from the [`SourceRegistry`].
//!
//! [`resolve`] combines them into a [`VerdictResult`] under a [`VerdictPolicy`].
//!
//! ## Modules
//! - [`domain`] - domain extraction from URLs and free text
//! - [`registry`] - source credibility table and lookup
//! - [`analysis`] - sensationalism signals
//! - [`scoring`] - content scorers
//! - [`cache`] - memoised scoring
//! - [`verdict`] - hybrid verdict resolution
//! - [`gateway`] - HTTP API
//!
//! ## Test/Mock Support
//! [`scoring::MockContentScorer`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod analysis;
pub mod cache;
pub mod config;
pub mod constants;
pub mod domain;
pub mod gateway;
pub mod hashing;
pub mod registry;
pub mod scoring;
pub mod verdict;

pub use analysis::{ContentSignals, analyze_content};
pub use cache::CachedScorer;
pub use config::{Config, ConfigError, ScorerBackend};
pub use domain::{extract_domain, is_article_url, normalize_domain};
pub use gateway::{GatewayError, HandlerState, create_router_with_state};
pub use hashing::hash_content;
pub use registry::{
    MatchKind, RegistryError, SourceAssessment, SourceCategory, SourceRecord, SourceRegistry,
};
#[cfg(any(test, feature = "mock"))]
pub use scoring::MockContentScorer;
pub use scoring::{
    ContentAssessment, ContentScorer, HeuristicScorer, Label, LlmScorer, ScorerMode,
    ScoringError,
};
pub use verdict::{PolicyError, Verdict, VerdictPolicy, VerdictResult, content_score, resolve};
