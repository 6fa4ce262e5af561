use serde::{Deserialize, Serialize};

use crate::constants::{NEUTRAL_SCORE, RELIABILITY_FLOOR};

/// Editorial category of a publication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SourceCategory {
    Mainstream,
    State,
    Organization,
    International,
    Wire,
    FactCheck,
    Satire,
    Conspiracy,
    Misinformation,
    Unknown,
}

impl SourceCategory {
    /// Categories whose records can never be marked reliable.
    #[inline]
    pub fn is_unreliable(&self) -> bool {
        matches!(
            self,
            SourceCategory::Satire | SourceCategory::Conspiracy | SourceCategory::Misinformation
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SourceCategory::Mainstream => "mainstream",
            SourceCategory::State => "state",
            SourceCategory::Organization => "organization",
            SourceCategory::International => "international",
            SourceCategory::Wire => "wire",
            SourceCategory::FactCheck => "fact-check",
            SourceCategory::Satire => "satire",
            SourceCategory::Conspiracy => "conspiracy",
            SourceCategory::Misinformation => "misinformation",
            SourceCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SourceCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single registry entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceRecord {
    /// Normalized hostname (lowercase, no leading `www.`).
    pub domain: String,
    /// Display name of the publication.
    pub name: String,
    /// Credibility score, `0..=100`.
    pub score: u8,
    pub category: SourceCategory,
    /// Whether the source belongs to the trusted partition.
    pub reliable: bool,
}

impl SourceRecord {
    /// Creates a record whose reliability is derived from category and score.
    pub fn new(
        domain: impl Into<String>,
        name: impl Into<String>,
        score: u8,
        category: SourceCategory,
    ) -> Self {
        let reliable = Self::default_reliability(score, category);
        Self {
            domain: domain.into(),
            name: name.into(),
            score,
            category,
            reliable,
        }
    }

    /// Overrides the derived reliability flag.
    ///
    /// The registry rejects records marked reliable that fail the reliability rule.
    pub fn with_reliable(mut self, reliable: bool) -> Self {
        self.reliable = reliable;
        self
    }

    /// Reliability implied by category and score alone.
    #[inline]
    pub fn default_reliability(score: u8, category: SourceCategory) -> bool {
        !category.is_unreliable() && score >= RELIABILITY_FLOOR
    }
}

/// How a looked-up domain was matched against the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchKind {
    Exact,
    Subdomain,
    None,
}

/// Result of a registry lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceAssessment {
    /// The normalized domain that was looked up, if any.
    pub domain: Option<String>,
    pub known: bool,
    pub reliable: bool,
    /// Credibility score; [`NEUTRAL_SCORE`] when the source is unknown.
    pub score: u8,
    pub name: String,
    pub category: SourceCategory,
    pub matched_by: MatchKind,
    /// Domain contains a pattern common to throwaway news sites. Informational only.
    pub suspicious: bool,
}

impl SourceAssessment {
    /// Assessment used when no domain could be determined.
    pub fn unresolved() -> Self {
        Self {
            domain: None,
            known: false,
            reliable: false,
            score: NEUTRAL_SCORE,
            name: "Unknown".to_string(),
            category: SourceCategory::Unknown,
            matched_by: MatchKind::None,
            suspicious: false,
        }
    }

    /// Assessment for a domain that matched no record.
    pub fn unknown(domain: String, suspicious: bool) -> Self {
        Self {
            name: domain.clone(),
            domain: Some(domain),
            known: false,
            reliable: false,
            score: NEUTRAL_SCORE,
            category: SourceCategory::Unknown,
            matched_by: MatchKind::None,
            suspicious,
        }
    }

    /// Assessment for a domain that matched `record`.
    pub fn matched(domain: String, record: &SourceRecord, matched_by: MatchKind) -> Self {
        Self {
            domain: Some(domain),
            known: true,
            reliable: record.reliable,
            score: record.score,
            name: record.name.clone(),
            category: record.category,
            matched_by,
            suspicious: false,
        }
    }
}

/// Coarse grouping used when listing the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceTier {
    Reliable,
    Mixed,
    Unreliable,
}

impl SourceTier {
    const RELIABLE_MIN: u8 = 70;
    const MIXED_MIN: u8 = 40;

    pub fn for_score(score: u8) -> Self {
        if score >= Self::RELIABLE_MIN {
            SourceTier::Reliable
        } else if score >= Self::MIXED_MIN {
            SourceTier::Mixed
        } else {
            SourceTier::Unreliable
        }
    }
}

/// Registry records grouped by [`SourceTier`], each group sorted by score (highest first).
#[derive(Debug, Clone, Serialize)]
pub struct SourceTiers<'a> {
    pub reliable: Vec<&'a SourceRecord>,
    pub mixed: Vec<&'a SourceRecord>,
    pub unreliable: Vec<&'a SourceRecord>,
    pub total: usize,
}

/// Short advice for a source's score, shown by the source check endpoint.
pub fn source_advice(score: u8) -> &'static str {
    match score {
        80.. => "This is a known reliable source.",
        50..=79 => "This source has mixed reliability.",
        30..=49 => "Exercise caution with this source.",
        _ => "This source is known for unreliable content.",
    }
}
