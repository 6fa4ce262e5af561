pub const SATYA_STATUS_HEADER: &str = "X-Satya-Status";
pub const SATYA_VERDICT_HEADER: &str = "X-Satya-Verdict";

pub const SATYA_STATUS_HEALTHY: &str = "healthy";
pub const SATYA_STATUS_READY: &str = "ready";
pub const SATYA_STATUS_NOT_READY: &str = "not_ready";

/// Whether an analysis ran with a working content scorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnalysisStatus {
    Ok,
    Degraded,
}

impl AnalysisStatus {
    #[inline]
    pub fn from_degraded(degraded: bool) -> Self {
        if degraded {
            AnalysisStatus::Degraded
        } else {
            AnalysisStatus::Ok
        }
    }

    #[inline]
    pub fn as_header_value(&self) -> &'static str {
        match self {
            AnalysisStatus::Ok => "ok",
            AnalysisStatus::Degraded => "degraded",
        }
    }
}

impl std::fmt::Display for AnalysisStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_header_value())
    }
}
