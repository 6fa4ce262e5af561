//! Hybrid verdict resolution.
//!
//! Blends a content assessment with a source assessment into a single
//! [`VerdictResult`]. Content dominates the blend; the source acts as a prior that
//! can also override a low-confidence content call when the two disagree sharply.
//!
//! # Resolution Order
//!
//! 1. `content_score`: REAL keeps its confidence, FAKE inverts it, UNCERTAIN is 50.
//! 2. `hybrid = round(content_score * ai_weight + source_score * source_weight)`.
//! 3. First matching rule wins:
//!    - credible source, low-confidence FAKE: `LIKELY_REAL`
//!    - untrustworthy source, low-confidence REAL: `LIKELY_FAKE`
//!    - `hybrid >= real_threshold`: `REAL`
//!    - `hybrid <= fake_threshold`: `FAKE`
//!    - otherwise `UNCERTAIN`
//! 4. The reported confidence is the hybrid score.
//!
//! [`resolve`] is total: it never fails and never panics in release builds.

pub mod error;
pub mod policy;
pub mod resolver;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::PolicyError;
pub use policy::VerdictPolicy;
pub use resolver::{content_score, recommendation, resolve};
pub use types::{Verdict, VerdictResult};
