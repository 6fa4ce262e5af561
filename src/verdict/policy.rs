use std::env;

use super::error::PolicyError;
use crate::constants::{
    DEFAULT_AI_WEIGHT, DEFAULT_FAKE_THRESHOLD, DEFAULT_LIKELY_FAKE_SOURCE_CEILING,
    DEFAULT_LIKELY_REAL_SOURCE_FLOOR, DEFAULT_OVERRIDE_CONFIDENCE_CEILING,
    DEFAULT_REAL_THRESHOLD, DEFAULT_SOURCE_WEIGHT, MAX_SCORE, WEIGHT_EPSILON,
};

pub const ENV_AI_WEIGHT: &str = "SATYA_AI_WEIGHT";
pub const ENV_REAL_THRESHOLD: &str = "SATYA_REAL_THRESHOLD";
pub const ENV_FAKE_THRESHOLD: &str = "SATYA_FAKE_THRESHOLD";

/// Weights and thresholds used by [`resolve`](super::resolve).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerdictPolicy {
    pub ai_weight: f64,
    pub source_weight: f64,
    /// Hybrid scores at or above this are `REAL`.
    pub real_threshold: u8,
    /// Hybrid scores at or below this are `FAKE`.
    pub fake_threshold: u8,
    pub likely_real_source_floor: u8,
    pub likely_fake_source_ceiling: u8,
    pub override_confidence_ceiling: u8,
}

impl Default for VerdictPolicy {
    fn default() -> Self {
        Self {
            ai_weight: DEFAULT_AI_WEIGHT,
            source_weight: DEFAULT_SOURCE_WEIGHT,
            real_threshold: DEFAULT_REAL_THRESHOLD,
            fake_threshold: DEFAULT_FAKE_THRESHOLD,
            likely_real_source_floor: DEFAULT_LIKELY_REAL_SOURCE_FLOOR,
            likely_fake_source_ceiling: DEFAULT_LIKELY_FAKE_SOURCE_CEILING,
            override_confidence_ceiling: DEFAULT_OVERRIDE_CONFIDENCE_CEILING,
        }
    }
}

impl VerdictPolicy {
    /// Default policy with custom blend weights and verdict thresholds.
    pub fn new(
        ai_weight: f64,
        real_threshold: u8,
        fake_threshold: u8,
    ) -> Result<Self, PolicyError> {
        let policy = Self {
            ai_weight,
            source_weight: complement_weight(ai_weight),
            real_threshold,
            fake_threshold,
            ..Self::default()
        };
        policy.validate()?;
        Ok(policy)
    }

    /// Reads overrides from `SATYA_AI_WEIGHT`, `SATYA_REAL_THRESHOLD` and
    /// `SATYA_FAKE_THRESHOLD`; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, PolicyError> {
        let defaults = Self::default();

        let (ai_weight, source_weight) = match env::var(ENV_AI_WEIGHT) {
            Ok(raw) => {
                let ai_weight = raw.trim().parse::<f64>().map_err(|_| {
                    PolicyError::InvalidEnvValue {
                        name: ENV_AI_WEIGHT,
                        value: raw.clone(),
                    }
                })?;
                (ai_weight, complement_weight(ai_weight))
            }
            Err(_) => (defaults.ai_weight, defaults.source_weight),
        };
        let real_threshold = parse_threshold_from_env(ENV_REAL_THRESHOLD, defaults.real_threshold)?;
        let fake_threshold = parse_threshold_from_env(ENV_FAKE_THRESHOLD, defaults.fake_threshold)?;

        let policy = Self {
            ai_weight,
            source_weight,
            real_threshold,
            fake_threshold,
            ..defaults
        };
        policy.validate()?;
        Ok(policy)
    }

    pub fn validate(&self) -> Result<(), PolicyError> {
        for (name, value) in [
            ("ai_weight", self.ai_weight),
            ("source_weight", self.source_weight),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(PolicyError::WeightOutOfRange { name, value });
            }
        }
        if (self.ai_weight + self.source_weight - 1.0).abs() > WEIGHT_EPSILON {
            return Err(PolicyError::WeightsDoNotSum {
                ai: self.ai_weight,
                source_weight: self.source_weight,
            });
        }

        for (name, value) in [
            ("real_threshold", self.real_threshold),
            ("fake_threshold", self.fake_threshold),
            ("likely_real_source_floor", self.likely_real_source_floor),
            ("likely_fake_source_ceiling", self.likely_fake_source_ceiling),
            ("override_confidence_ceiling", self.override_confidence_ceiling),
        ] {
            if value > MAX_SCORE {
                return Err(PolicyError::ThresholdOutOfRange { name, value });
            }
        }
        if self.fake_threshold >= self.real_threshold {
            return Err(PolicyError::ThresholdsOutOfOrder {
                real: self.real_threshold,
                fake: self.fake_threshold,
            });
        }
        if self.likely_fake_source_ceiling > self.likely_real_source_floor {
            return Err(PolicyError::OverrideBandsOverlap {
                floor: self.likely_real_source_floor,
                ceiling: self.likely_fake_source_ceiling,
            });
        }

        Ok(())
    }
}

fn parse_threshold_from_env(name: &'static str, default: u8) -> Result<u8, PolicyError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u8>()
            .map_err(|_| PolicyError::InvalidEnvValue { name, value: raw }),
        Err(_) => Ok(default),
    }
}

/// `1 - weight`, exact for weights on whole percentages (`0.7` gives `0.3`, not
/// `0.30000000000000004`).
fn complement_weight(weight: f64) -> f64 {
    let percent = weight * 100.0;
    if (percent - percent.round()).abs() < WEIGHT_EPSILON {
        (100.0 - percent.round()) / 100.0
    } else {
        1.0 - weight
    }
}
