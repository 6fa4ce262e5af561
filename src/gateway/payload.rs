use serde::{Deserialize, Serialize};

use crate::analysis::ContentSignals;
use crate::registry::{SourceAssessment, SourceCategory, SourceTier};
use crate::scoring::ContentAssessment;
use crate::verdict::VerdictResult;

/// Body of `POST /v1/analyze`. At least one field must be non-blank.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeResponse {
    pub request_id: String,
    /// RFC 3339 timestamp.
    pub analyzed_at: String,
    pub domain: Option<String>,
    /// Whether the submitted URL looks like an article page. `None` without a URL.
    pub article_url: Option<bool>,
    pub source: SourceAssessment,
    pub content: ContentAssessment,
    pub signals: ContentSignals,
    pub verdict: VerdictResult,
    pub degraded: bool,
    pub degraded_reason: Option<String>,
    pub recommendation: String,
    pub recommended_outlets: Vec<&'static str>,
}

/// Body of `GET /v1/sources/{domain}`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceCheckResponse {
    pub domain: String,
    pub known: bool,
    pub name: String,
    pub score: u8,
    pub category: SourceCategory,
    pub tier: SourceTier,
    pub is_reliable: bool,
    pub suspicious: bool,
    pub advice: &'static str,
}

impl SourceCheckResponse {
    pub fn from_assessment(domain: String, assessment: SourceAssessment) -> Self {
        Self {
            domain,
            known: assessment.known,
            tier: SourceTier::for_score(assessment.score),
            is_reliable: assessment.score >= crate::constants::RELIABILITY_FLOOR,
            advice: crate::registry::source_advice(assessment.score),
            name: assessment.name,
            score: assessment.score,
            category: assessment.category,
            suspicious: assessment.suspicious,
        }
    }
}
