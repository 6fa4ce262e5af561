//! Content scoring.
//!
//! A [`ContentScorer`] reads article text and returns a [`ContentAssessment`]: a
//! label plus a confidence. Two production scorers exist:
//!
//! - [`LlmScorer`] asks a chat model (via `genai`) and parses its JSON reply.
//! - [`HeuristicScorer`] runs the offline sensationalism scan from
//!   [`analysis`](crate::analysis).
//!
//! Scorer failures are surfaced as [`ScoringError`]. The request path wraps calls in
//! [`score_or_neutral`], which turns a failure into a neutral, degraded outcome.

pub mod error;
pub mod heuristic;
pub mod llm;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod scorer;
pub mod types;


pub use error::ScoringError;
pub use heuristic::HeuristicScorer;
pub use llm::{LlmScorer, parse_model_reply};
#[cfg(any(test, feature = "mock"))]
pub use mock::MockContentScorer;
pub use scorer::{ContentScorer, score_or_neutral, truncate_content};
pub use types::{ContentAssessment, Label, ScoreOutcome, ScorerMode};
