use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::error::ScoringError;
use super::scorer::ContentScorer;
use super::types::{ContentAssessment, Label, ScorerMode};

/// Scorer with a canned answer, for tests.
#[derive(Debug)]
pub struct MockContentScorer {
    result: Result<ContentAssessment, ScoringError>,
    calls: AtomicUsize,
}

impl MockContentScorer {
    pub fn returning(assessment: ContentAssessment) -> Self {
        Self {
            result: Ok(assessment),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn labelled(label: Label, confidence: u8) -> Self {
        Self::returning(ContentAssessment::new(label, confidence))
    }

    pub fn failing(error: ScoringError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times [`ContentScorer::score`] has been called.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentScorer for MockContentScorer {
    async fn score(&self, _text: &str) -> Result<ContentAssessment, ScoringError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn mode(&self) -> ScorerMode {
        ScorerMode::Mock
    }
}
