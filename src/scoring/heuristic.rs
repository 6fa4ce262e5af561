use async_trait::async_trait;
use tracing::debug;

use super::error::ScoringError;
use super::scorer::ContentScorer;
use super::types::{ContentAssessment, Label, ScorerMode};
use crate::analysis::analyze_content;
use crate::constants::NEUTRAL_SCORE;

/// Penalty below which flagged text is left undecided.
const FAKE_PENALTY_FLOOR: f64 = 0.15;
const CLEAN_TEXT_CONFIDENCE: u8 = 55;
const MAX_HEURISTIC_CONFIDENCE: u8 = 90;

/// Offline scorer driven by [`analyze_content`].
///
/// Used when no model provider is configured. It never fails and never
/// claims more than moderate confidence.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicScorer;

impl HeuristicScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(text: &str) -> ContentAssessment {
        if text.trim().is_empty() {
            return ContentAssessment::neutral().with_reasoning("No content to analyze");
        }

        let signals = analyze_content(text);
        let assessment = if signals.penalty == 0.0 {
            ContentAssessment::new(Label::Real, CLEAN_TEXT_CONFIDENCE)
                .with_reasoning("No sensationalist language detected")
        } else if signals.penalty < FAKE_PENALTY_FLOOR {
            ContentAssessment::new(Label::Uncertain, NEUTRAL_SCORE)
                .with_reasoning("Some sensationalist language detected")
        } else {
            let confidence =
                (f64::from(NEUTRAL_SCORE) + signals.penalty * 100.0).round() as u8;
            ContentAssessment::new(Label::Fake, confidence.min(MAX_HEURISTIC_CONFIDENCE))
                .with_reasoning("Heavy use of sensationalist language")
        };

        debug!(
            label = %assessment.label,
            confidence = assessment.confidence,
            penalty = signals.penalty,
            "Heuristic assessment"
        );

        assessment.with_red_flags(signals.flags)
    }
}

#[async_trait]
impl ContentScorer for HeuristicScorer {
    async fn score(&self, text: &str) -> Result<ContentAssessment, ScoringError> {
        Ok(Self::assess(text))
    }

    fn mode(&self) -> ScorerMode {
        ScorerMode::Heuristic
    }
}
