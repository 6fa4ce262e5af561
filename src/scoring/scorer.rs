use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use super::error::ScoringError;
use super::types::{ContentAssessment, ScoreOutcome, ScorerMode};

/// Judges whether a piece of text reads as genuine or fabricated news.
#[async_trait]
pub trait ContentScorer: Send + Sync {
    async fn score(&self, text: &str) -> Result<ContentAssessment, ScoringError>;

    fn mode(&self) -> ScorerMode;
}

#[async_trait]
impl<S: ContentScorer + ?Sized> ContentScorer for Arc<S> {
    async fn score(&self, text: &str) -> Result<ContentAssessment, ScoringError> {
        (**self).score(text).await
    }

    fn mode(&self) -> ScorerMode {
        (**self).mode()
    }
}

/// Scores `text`, substituting a neutral assessment if the scorer fails.
///
/// A failed scorer never fails the request; the outcome records why it was degraded.
pub async fn score_or_neutral(scorer: &dyn ContentScorer, text: &str) -> ScoreOutcome {
    match scorer.score(text).await {
        Ok(assessment) => ScoreOutcome::scored(assessment),
        Err(e) => {
            warn!(
                error = %e,
                mode = scorer.mode().as_str(),
                "Content scorer failed, falling back to neutral assessment"
            );
            ScoreOutcome::degraded(&e)
        }
    }
}

/// Returns at most the first `max_chars` characters of `text`.
pub fn truncate_content(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
