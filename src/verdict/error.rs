use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("weights must sum to 1.0 (ai={ai}, source={source_weight})")]
    WeightsDoNotSum { ai: f64, source_weight: f64 },

    #[error("{name} must be between 0.0 and 1.0, got {value}")]
    WeightOutOfRange { name: &'static str, value: f64 },

    #[error("{name} must be at most 100, got {value}")]
    ThresholdOutOfRange { name: &'static str, value: u8 },

    #[error("fake threshold ({fake}) must be below real threshold ({real})")]
    ThresholdsOutOfOrder { real: u8, fake: u8 },

    #[error("likely-fake source ceiling ({ceiling}) must not exceed likely-real source floor ({floor})")]
    OverrideBandsOverlap { floor: u8, ceiling: u8 },

    #[error("invalid value for {name}: {value}")]
    InvalidEnvValue { name: &'static str, value: String },
}
