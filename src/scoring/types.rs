use serde::Serialize;

use super::error::ScoringError;
use crate::constants::{MAX_SCORE, NEUTRAL_SCORE};

/// Direction of a content scorer's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Label {
    Real,
    Fake,
    Uncertain,
}

impl Label {
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
            Label::Uncertain => "UNCERTAIN",
        }
    }
}

/// Case-insensitive; anything other than `REAL` or `FAKE` is [`Label::Uncertain`].
impl From<&str> for Label {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_uppercase().as_str() {
            "REAL" => Label::Real,
            "FAKE" => Label::Fake,
            _ => Label::Uncertain,
        }
    }
}

impl std::fmt::Display for Label {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A content scorer's verdict on a piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentAssessment {
    pub label: Label,
    /// Scorer's confidence in `label`, `0..=100`.
    pub confidence: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub red_flags: Vec<String>,
}

impl ContentAssessment {
    /// Creates an assessment, clamping `confidence` to `0..=100`.
    pub fn new(label: Label, confidence: u8) -> Self {
        Self {
            label,
            confidence: confidence.min(MAX_SCORE),
            reasoning: None,
            red_flags: Vec::new(),
        }
    }

    /// Placeholder used when the scorer could not produce an answer.
    pub fn neutral() -> Self {
        Self::new(Label::Uncertain, NEUTRAL_SCORE)
    }

    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = Some(reasoning.into());
        self
    }

    pub fn with_red_flags(mut self, red_flags: Vec<String>) -> Self {
        self.red_flags = red_flags;
        self
    }
}

/// Which scorer implementation is answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScorerMode {
    Llm,
    Heuristic,
    Mock,
}

impl ScorerMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerMode::Llm => "llm",
            ScorerMode::Heuristic => "heuristic",
            ScorerMode::Mock => "mock",
        }
    }
}

impl std::fmt::Display for ScorerMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of scoring with a neutral fallback applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreOutcome {
    pub assessment: ContentAssessment,
    /// Why the scorer failed, when the assessment is the neutral placeholder.
    pub degraded: Option<String>,
}

impl ScoreOutcome {
    pub fn scored(assessment: ContentAssessment) -> Self {
        Self {
            assessment,
            degraded: None,
        }
    }

    pub fn degraded(error: &ScoringError) -> Self {
        Self {
            assessment: ContentAssessment::neutral(),
            degraded: Some(error.user_message().to_string()),
        }
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        self.degraded.is_some()
    }
}
