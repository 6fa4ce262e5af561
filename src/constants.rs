//! Cross-cutting, shared constants.
//!
//! Policy values live here so the resolver, the registry and the gateway agree on
//! them. Runtime overrides go through [`crate::verdict::VerdictPolicy`], which uses
//! these as defaults.
//!
//! # Score Scale
//!
//! Every score and confidence in the crate is an integer on `0..=100`. Helpers
//! below clamp foreign values onto that scale at module boundaries.

/// Upper bound of the score scale.
pub const MAX_SCORE: u8 = 100;

/// Neutral score used for unknown sources and unscorable content.
pub const NEUTRAL_SCORE: u8 = 50;

pub const DEFAULT_AI_WEIGHT: f64 = 0.7;
pub const DEFAULT_SOURCE_WEIGHT: f64 = 0.3;

pub const DEFAULT_REAL_THRESHOLD: u8 = 65;
pub const DEFAULT_FAKE_THRESHOLD: u8 = 35;

/// Sources at or above this score can turn a low-confidence FAKE into LIKELY_REAL.
pub const DEFAULT_LIKELY_REAL_SOURCE_FLOOR: u8 = 80;
/// Sources below this score can turn a low-confidence REAL into LIKELY_FAKE.
pub const DEFAULT_LIKELY_FAKE_SOURCE_CEILING: u8 = 40;
/// Overrides only apply when the scorer's confidence is below this value.
pub const DEFAULT_OVERRIDE_CONFIDENCE_CEILING: u8 = 70;

/// Minimum score for a registry record to be marked reliable.
pub const RELIABILITY_FLOOR: u8 = 60;

/// Characters of content forwarded to the scorer.
pub const DEFAULT_MAX_CONTENT_CHARS: usize = 4000;

/// Tolerance when checking that blend weights sum to one.
pub const WEIGHT_EPSILON: f64 = 1e-6;

/// Rounds and clamps a floating-point value onto the `0..=100` score scale.
///
/// `NaN` maps to [`NEUTRAL_SCORE`].
#[inline]
pub fn clamp_score_f64(value: f64) -> u8 {
    if value.is_nan() {
        return NEUTRAL_SCORE;
    }
    value.round().clamp(0.0, MAX_SCORE as f64) as u8
}
