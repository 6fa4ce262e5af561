use tracing::debug;

use super::policy::VerdictPolicy;
use super::types::{Verdict, VerdictResult};
use crate::analysis::ContentSignals;
use crate::constants::{MAX_SCORE, NEUTRAL_SCORE, clamp_score_f64};
use crate::registry::SourceAssessment;
use crate::scoring::{ContentAssessment, Label};

/// Score below which a known source is called out as unreliable.
const UNRELIABLE_SOURCE_WARNING: u8 = 30;
const HIGHLY_RELIABLE_SOURCE: u8 = 80;
const MAX_FLAGS_IN_RECOMMENDATION: usize = 2;

/// Maps a content label and confidence onto a "how real" score in `0..=100`.
#[inline]
pub fn content_score(content: &ContentAssessment) -> u8 {
    let confidence = content.confidence.min(MAX_SCORE);
    match content.label {
        Label::Real => confidence,
        Label::Fake => MAX_SCORE - confidence,
        Label::Uncertain => NEUTRAL_SCORE,
    }
}

/// Blends a content assessment with a source assessment.
pub fn resolve(
    content: &ContentAssessment,
    source: &SourceAssessment,
    policy: &VerdictPolicy,
) -> VerdictResult {
    debug_assert!(
        content.confidence <= MAX_SCORE,
        "content confidence out of range: {}",
        content.confidence
    );
    debug_assert!(
        source.score <= MAX_SCORE,
        "source score out of range: {}",
        source.score
    );
    debug_assert!(policy.validate().is_ok(), "invalid verdict policy: {:?}", policy);

    let confidence = content.confidence.min(MAX_SCORE);
    let source_score = source.score.min(MAX_SCORE);
    let directional = content_score(content);

    let hybrid_score = clamp_score_f64(
        f64::from(directional) * policy.ai_weight + f64::from(source_score) * policy.source_weight,
    );

    let low_confidence = confidence < policy.override_confidence_ceiling;
    let (final_verdict, is_uncertain) = if source_score >= policy.likely_real_source_floor
        && content.label == Label::Fake
        && low_confidence
    {
        (Verdict::LikelyReal, true)
    } else if source_score < policy.likely_fake_source_ceiling
        && content.label == Label::Real
        && low_confidence
    {
        (Verdict::LikelyFake, true)
    } else if hybrid_score >= policy.real_threshold {
        (Verdict::Real, false)
    } else if hybrid_score <= policy.fake_threshold {
        (Verdict::Fake, false)
    } else {
        (Verdict::Uncertain, true)
    };

    debug!(
        content_score = directional,
        source_score,
        hybrid_score,
        verdict = %final_verdict,
        "Resolved verdict"
    );

    VerdictResult {
        hybrid_score,
        final_verdict,
        is_uncertain,
        ai_weight: policy.ai_weight,
        source_weight: policy.source_weight,
        final_confidence: hybrid_score,
    }
}

/// User-facing explanation of a verdict.
///
/// A degraded analysis (content scorer unavailable) is stated explicitly so it is
/// never mistaken for a confident but uncertain result.
pub fn recommendation(
    result: &VerdictResult,
    source: &SourceAssessment,
    signals: &ContentSignals,
    degraded: bool,
) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(3);

    if degraded {
        parts.push(
            "Automated content analysis was unavailable, so this result relies mainly on the source."
                .to_string(),
        );
    }

    let summary = match result.final_verdict {
        Verdict::Real => "The article appears credible.",
        Verdict::Fake => "The article shows strong signs of being false or misleading.",
        Verdict::LikelyReal => {
            "The content raised doubts, but it comes from a highly credible source and is probably genuine."
        }
        Verdict::LikelyFake => {
            "The content reads as genuine, but the source has a poor track record. Treat it with suspicion."
        }
        Verdict::Uncertain if degraded => "Its credibility could not be determined.",
        Verdict::Uncertain => "The evidence is mixed, so its credibility could not be determined.",
    };
    parts.push(summary.to_string());

    let advice = if source.known && source.reliable && source.score >= HIGHLY_RELIABLE_SOURCE {
        format!("{} is a generally reliable source.", source.name)
    } else if source.known && source.score < UNRELIABLE_SOURCE_WARNING {
        format!(
            "Warning: {} is known for unreliable content. Verify this information with trusted sources.",
            source.name
        )
    } else if signals.has_flags() {
        let flags: Vec<&str> = signals
            .flags
            .iter()
            .take(MAX_FLAGS_IN_RECOMMENDATION)
            .map(String::as_str)
            .collect();
        format!(
            "The article contains some concerning patterns: {}. Cross-verify with trusted sources.",
            flags.join(", ")
        )
    } else {
        "Consider verifying this information with established news outlets before sharing."
            .to_string()
    };
    parts.push(advice);

    parts.join(" ")
}
