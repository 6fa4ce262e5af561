use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ScoringError {
    #[error("provider error: {reason}")]
    Provider { reason: String },

    #[error("provider rate limit or quota exceeded")]
    RateLimited,

    #[error("scorer timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("scorer returned an empty response")]
    EmptyResponse,

    #[error("malformed scorer response: {reason}")]
    MalformedResponse { reason: String },
}

impl ScoringError {
    /// Short explanation suitable for end users.
    pub fn user_message(&self) -> &'static str {
        match self {
            ScoringError::Provider { .. } => "The content analysis service is unavailable.",
            ScoringError::RateLimited => {
                "The content analysis service is busy (rate limit or quota reached)."
            }
            ScoringError::Timeout { .. } => "The content analysis service took too long to answer.",
            ScoringError::EmptyResponse | ScoringError::MalformedResponse { .. } => {
                "The content analysis service returned an unreadable answer."
            }
        }
    }
}
