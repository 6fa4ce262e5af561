use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use tracing::{debug, info};

use super::error::GatewayError;
use super::payload::{AnalyzeRequest, AnalyzeResponse, SourceCheckResponse};
use super::state::HandlerState;
use super::types::{AnalysisStatus, SATYA_STATUS_HEADER, SATYA_VERDICT_HEADER};
use crate::analysis::analyze_content;
use crate::domain::{extract_domain, is_article_url, normalize_domain};
use crate::registry::RECOMMENDED_OUTLETS;
use crate::scoring::{score_or_neutral, truncate_content};
use crate::verdict::{recommendation, resolve};

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Runs the full pipeline for one request: domain, source lookup, content scoring,
/// verdict resolution.
pub async fn analyze(
    state: &HandlerState,
    request: &AnalyzeRequest,
) -> Result<AnalyzeResponse, GatewayError> {
    let url = non_blank(request.url.as_deref());
    let text = non_blank(request.text.as_deref());

    let content = match (text, url) {
        (Some(text), _) => text,
        (None, Some(url)) => url,
        (None, None) => {
            return Err(GatewayError::InvalidRequest(
                "either 'url' or 'text' must be provided".to_string(),
            ));
        }
    };

    let domain = url
        .and_then(extract_domain)
        .or_else(|| text.and_then(extract_domain));
    let source = state.registry.lookup(domain.as_deref());

    let content = truncate_content(content, state.max_content_chars);
    let signals = analyze_content(content);
    let outcome = score_or_neutral(state.scorer.as_ref(), content).await;
    let degraded = outcome.is_degraded();

    let verdict = resolve(&outcome.assessment, &source, &state.policy);
    let recommendation = recommendation(&verdict, &source, &signals, degraded);

    info!(
        domain = domain.as_deref().unwrap_or("-"),
        source_score = source.score,
        content_label = %outcome.assessment.label,
        hybrid_score = verdict.hybrid_score,
        verdict = %verdict.final_verdict,
        degraded,
        "Analysis complete"
    );

    Ok(AnalyzeResponse {
        request_id: uuid::Uuid::new_v4().to_string(),
        analyzed_at: chrono::Utc::now().to_rfc3339(),
        domain,
        article_url: url.map(is_article_url),
        source,
        content: outcome.assessment,
        signals,
        verdict,
        degraded,
        degraded_reason: outcome.degraded,
        recommendation,
        recommended_outlets: RECOMMENDED_OUTLETS.to_vec(),
    })
}

#[tracing::instrument(skip(state, payload))]
pub async fn analyze_handler(
    State(state): State<HandlerState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Response, GatewayError> {
    let Json(request) = payload.map_err(|e| GatewayError::InvalidRequest(e.body_text()))?;

    let response = analyze(&state, &request).await?;

    let status = AnalysisStatus::from_degraded(response.degraded);
    let mut headers = HeaderMap::new();
    headers.insert(
        SATYA_STATUS_HEADER,
        HeaderValue::from_static(status.as_header_value()),
    );
    headers.insert(
        SATYA_VERDICT_HEADER,
        HeaderValue::from_static(response.verdict.final_verdict.as_str()),
    );

    Ok((StatusCode::OK, headers, Json(response)).into_response())
}

#[tracing::instrument(skip(state))]
pub async fn list_sources_handler(State(state): State<HandlerState>) -> Response {
    Json(state.registry.tiers()).into_response()
}

#[tracing::instrument(skip(state))]
pub async fn check_source_handler(
    State(state): State<HandlerState>,
    Path(domain): Path<String>,
) -> Result<Json<SourceCheckResponse>, GatewayError> {
    let normalized = normalize_domain(&domain);
    if normalized.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "domain must not be empty".to_string(),
        ));
    }

    let assessment = state.registry.lookup(Some(&normalized));
    debug!(domain = %normalized, known = assessment.known, "Source check");

    Ok(Json(SourceCheckResponse::from_assessment(
        normalized, assessment,
    )))
}

pub async fn fallback_handler(uri: Uri) -> GatewayError {
    GatewayError::NotFound(format!("no route for {}", uri.path()))
}
