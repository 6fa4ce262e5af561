use std::time::Duration;

use async_trait::async_trait;
use genai::Client;
use genai::chat::{ChatMessage, ChatOptions, ChatRequest};
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, error};

use super::error::ScoringError;
use super::scorer::ContentScorer;
use super::types::{ContentAssessment, Label, ScorerMode};
use crate::constants::clamp_score_f64;

const SYSTEM_PROMPT: &str = "You are a fact-checking assistant that specialises in Nepali \
and international news. Judge whether the article text you are given reads as genuine \
reporting or as fabricated, misleading or satirical content. Consider sensationalist \
language, unverifiable claims, missing attribution and internal contradictions. Reply \
with a single JSON object and nothing else: \
{\"verdict\": \"REAL\" | \"FAKE\" | \"UNCERTAIN\", \"confidence\": <integer 0-100>, \
\"reasoning\": \"<one or two sentences>\", \"redFlags\": [\"<short phrase>\", ...]}";

/// Content scorer backed by a chat model.
pub struct LlmScorer {
    client: Client,
    model: String,
    timeout: Duration,
    options: ChatOptions,
}

impl LlmScorer {
    /// Uses the default `genai` client, which reads provider keys from the environment.
    pub fn new(model: impl Into<String>, timeout: Duration) -> Self {
        Self::with_client(Client::default(), model, timeout)
    }

    pub fn with_client(client: Client, model: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client,
            model: model.into(),
            timeout,
            options: ChatOptions::default().with_temperature(0.0),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn build_request(text: &str) -> ChatRequest {
        ChatRequest::new(vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(format!("Article text:\n\n{}", text)),
        ])
    }
}

impl std::fmt::Debug for LlmScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmScorer")
            .field("model", &self.model)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ContentScorer for LlmScorer {
    async fn score(&self, text: &str) -> Result<ContentAssessment, ScoringError> {
        let request = Self::build_request(text);
        let secs = self.timeout.as_secs();

        let response = tokio::time::timeout(
            self.timeout,
            self.client
                .exec_chat(&self.model, request, Some(&self.options)),
        )
        .await
        .map_err(|_| ScoringError::Timeout { secs })?
        .map_err(|e| {
            error!(model = %self.model, "Provider error: {}", e);
            classify_provider_error(&e.to_string())
        })?;

        let reply = response.first_text().ok_or(ScoringError::EmptyResponse)?;
        let assessment = parse_model_reply(reply)?;

        debug!(
            model = %self.model,
            label = %assessment.label,
            confidence = assessment.confidence,
            "Model assessment"
        );

        Ok(assessment)
    }

    fn mode(&self) -> ScorerMode {
        ScorerMode::Llm
    }
}

fn classify_provider_error(message: &str) -> ScoringError {
    let lowered = message.to_lowercase();
    if lowered.contains("429") || lowered.contains("rate limit") || lowered.contains("quota") {
        ScoringError::RateLimited
    } else {
        ScoringError::Provider {
            reason: message.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ModelReply {
    #[serde(alias = "label", alias = "prediction")]
    verdict: String,
    confidence: Option<Value>,
    #[serde(default)]
    reasoning: Option<String>,
    #[serde(default, alias = "red_flags")]
    red_flags: Vec<String>,
}

/// Parses a model reply into an assessment.
///
/// The reply may wrap the JSON object in prose or a code fence. A confidence at or
/// below `1.0` is read as a fraction.
pub fn parse_model_reply(reply: &str) -> Result<ContentAssessment, ScoringError> {
    let reply = reply.trim();
    if reply.is_empty() {
        return Err(ScoringError::EmptyResponse);
    }

    let object = match (reply.find('{'), reply.rfind('}')) {
        (Some(start), Some(end)) if start < end => &reply[start..=end],
        _ => {
            return Err(ScoringError::MalformedResponse {
                reason: "no JSON object in reply".to_string(),
            });
        }
    };

    let parsed: ModelReply =
        serde_json::from_str(object).map_err(|e| ScoringError::MalformedResponse {
            reason: e.to_string(),
        })?;

    let confidence = parsed
        .confidence
        .as_ref()
        .and_then(confidence_from_value)
        .ok_or_else(|| ScoringError::MalformedResponse {
            reason: "missing or non-numeric confidence".to_string(),
        })?;

    let mut assessment = ContentAssessment::new(Label::from(parsed.verdict.as_str()), confidence)
        .with_red_flags(parsed.red_flags);
    if let Some(reasoning) = parsed.reasoning.filter(|r| !r.trim().is_empty()) {
        assessment = assessment.with_reasoning(reasoning);
    }
    Ok(assessment)
}

/// Integers are percentages (`1` is 1%). Only a non-integer at or below `1.0` is
/// read as a fraction (`0.9` is 90%).
fn confidence_from_value(value: &Value) -> Option<u8> {
    let (raw, integral) = match value {
        Value::Number(n) => (n.as_f64()?, n.is_u64() || n.is_i64()),
        Value::String(s) => {
            let s = s.trim().trim_end_matches('%').trim();
            (s.parse::<f64>().ok()?, !s.contains('.'))
        }
        _ => return None,
    };
    if !raw.is_finite() {
        return None;
    }
    let scaled = if !integral && raw <= 1.0 {
        raw * 100.0
    } else {
        raw
    };
    Some(clamp_score_f64(scaled))
}
