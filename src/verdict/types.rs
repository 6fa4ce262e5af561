use serde::Serialize;

/// Final call on an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Verdict {
    Real,
    Fake,
    LikelyReal,
    LikelyFake,
    Uncertain,
}

impl Verdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            Verdict::Real => "REAL",
            Verdict::Fake => "FAKE",
            Verdict::LikelyReal => "LIKELY_REAL",
            Verdict::LikelyFake => "LIKELY_FAKE",
            Verdict::Uncertain => "UNCERTAIN",
        }
    }

    /// Returns `true` for verdicts produced by a source override.
    #[inline]
    pub fn is_override(&self) -> bool {
        matches!(self, Verdict::LikelyReal | Verdict::LikelyFake)
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output of [`resolve`](super::resolve).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerdictResult {
    pub hybrid_score: u8,
    pub final_verdict: Verdict,
    pub is_uncertain: bool,
    pub ai_weight: f64,
    pub source_weight: f64,
    /// Same as `hybrid_score`.
    pub final_confidence: u8,
}
