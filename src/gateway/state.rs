use std::sync::Arc;

use crate::constants::DEFAULT_MAX_CONTENT_CHARS;
use crate::registry::SourceRegistry;
use crate::scoring::ContentScorer;
use crate::verdict::VerdictPolicy;

/// Shared, read-only state behind every handler.
#[derive(Clone)]
pub struct HandlerState {
    pub registry: Arc<SourceRegistry>,

    pub scorer: Arc<dyn ContentScorer>,

    pub policy: VerdictPolicy,

    pub max_content_chars: usize,
}

impl HandlerState {
    pub fn new(
        registry: Arc<SourceRegistry>,
        scorer: Arc<dyn ContentScorer>,
        policy: VerdictPolicy,
    ) -> Self {
        Self {
            registry,
            scorer,
            policy,
            max_content_chars: DEFAULT_MAX_CONTENT_CHARS,
        }
    }

    pub fn with_max_content_chars(mut self, max_content_chars: usize) -> Self {
        self.max_content_chars = max_content_chars;
        self
    }
}

impl std::fmt::Debug for HandlerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HandlerState")
            .field("sources", &self.registry.len())
            .field("scorer", &self.scorer.mode())
            .field("policy", &self.policy)
            .field("max_content_chars", &self.max_content_chars)
            .finish()
    }
}
