//! HTTP gateway (Axum) for article analysis and source checks.
//!
//! This module is primarily used by the `satya` server binary.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;
pub mod types;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{analyze, analyze_handler, check_source_handler, list_sources_handler};
pub use payload::{AnalyzeRequest, AnalyzeResponse, SourceCheckResponse};
pub use state::HandlerState;
pub use types::{
    AnalysisStatus, SATYA_STATUS_HEADER, SATYA_STATUS_HEALTHY, SATYA_STATUS_NOT_READY,
    SATYA_STATUS_READY, SATYA_VERDICT_HEADER,
};

pub fn create_router_with_state(state: HandlerState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any);

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/v1/analyze", post(analyze_handler))
        .route("/v1/sources", get(list_sources_handler))
        .route("/v1/sources/{domain}", get(check_source_handler))
        .fallback(handler::fallback_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub components: ComponentStatus,
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatus {
    pub http: &'static str,
    pub registry: &'static str,
    pub scorer: &'static str,
    pub scorer_mode: &'static str,
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SATYA_STATUS_HEADER,
        HeaderValue::from_static(SATYA_STATUS_HEALTHY),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let registry_status = if state.registry.is_empty() {
        "empty"
    } else {
        SATYA_STATUS_READY
    };

    let components = ComponentStatus {
        http: SATYA_STATUS_READY,
        registry: registry_status,
        scorer: SATYA_STATUS_READY,
        scorer_mode: state.scorer.mode().as_str(),
    };

    let is_ready = components.registry == SATYA_STATUS_READY;

    let (status_code, status_msg, header) = if is_ready {
        (StatusCode::OK, "ok", SATYA_STATUS_READY)
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            "pending",
            SATYA_STATUS_NOT_READY,
        )
    };

    let mut headers = HeaderMap::new();
    headers.insert(SATYA_STATUS_HEADER, HeaderValue::from_static(header));

    (
        status_code,
        headers,
        Json(ReadyResponse {
            status: status_msg,
            components,
        }),
    )
        .into_response()
}
