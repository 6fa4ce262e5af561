use async_trait::async_trait;
use moka::sync::Cache;
use tracing::debug;

use crate::hashing::hash_content;
use crate::scoring::{ContentAssessment, ContentScorer, ScorerMode, ScoringError};

pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000;

/// A [`ContentScorer`] that remembers successful assessments.
///
/// Failures are never cached, so a transient provider outage does not pin a
/// degraded answer. A capacity of zero disables caching entirely.
pub struct CachedScorer<S> {
    inner: S,
    entries: Option<Cache<[u8; 32], ContentAssessment>>,
}

impl<S: ContentScorer> CachedScorer<S> {
    pub fn new(inner: S, capacity: u64) -> Self {
        let entries = (capacity > 0).then(|| Cache::builder().max_capacity(capacity).build());
        Self { inner, entries }
    }

    #[inline]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    #[inline]
    pub fn is_enabled(&self) -> bool {
        self.entries.is_some()
    }

    /// Returns `true` if an assessment for `text` is cached.
    #[inline]
    pub fn contains(&self, text: &str) -> bool {
        self.entries
            .as_ref()
            .is_some_and(|entries| entries.contains_key(&self.key(text)))
    }

    /// Drops every cached assessment.
    pub fn clear(&self) {
        if let Some(entries) = &self.entries {
            entries.invalidate_all();
        }
    }

    #[inline]
    fn key(&self, text: &str) -> [u8; 32] {
        hash_content(self.inner.mode().as_str(), text)
    }
}

#[async_trait]
impl<S: ContentScorer> ContentScorer for CachedScorer<S> {
    async fn score(&self, text: &str) -> Result<ContentAssessment, ScoringError> {
        let Some(entries) = &self.entries else {
            return self.inner.score(text).await;
        };

        let key = self.key(text);
        if let Some(hit) = entries.get(&key) {
            debug!(mode = self.inner.mode().as_str(), "Assessment cache hit");
            return Ok(hit);
        }

        let assessment = self.inner.score(text).await?;
        entries.insert(key, assessment.clone());
        Ok(assessment)
    }

    fn mode(&self) -> ScorerMode {
        self.inner.mode()
    }
}

impl<S> std::fmt::Debug for CachedScorer<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedScorer")
            .field(
                "entries",
                &self.entries.as_ref().map(|entries| entries.entry_count()),
            )
            .finish_non_exhaustive()
    }
}
