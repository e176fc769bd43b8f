//! HTTP gateway (Axum) for device scoring.
//!
//! This module is primarily used by the `devmatch` server binary.

pub mod error;
pub mod handler;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::HeaderValue},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{ScoreRequest, ScoreResponse, score_devices_handler};
pub use state::HandlerState;

/// Names the scorer (`model` / `heuristic`) that produced a response.
pub const DEVMATCH_SCORER_HEADER: &str = "x-devmatch-scorer";

/// Short machine-readable status on health and error responses.
pub const DEVMATCH_STATUS_HEADER: &str = "x-devmatch-status";

pub const SERVICE_RUNNING_MESSAGE: &str = "Recommendation service is running";

pub fn create_router_with_state(state: HandlerState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/healthz", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/ml/score-dispositivos", post(score_devices_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(serde::Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(serde::Serialize)]
pub struct ReadyResponse {
    pub status: &'static str,
    pub scorer: &'static str,
}

#[tracing::instrument]
pub async fn root_handler() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: SERVICE_RUNNING_MESSAGE,
    })
}

#[tracing::instrument]
pub async fn health_handler() -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(DEVMATCH_STATUS_HEADER, HeaderValue::from_static("healthy"));

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse { status: "ok" }),
    )
        .into_response()
}

#[tracing::instrument(skip(state))]
pub async fn ready_handler(State(state): State<HandlerState>) -> Response {
    let scorer = state.scorer_name();

    let mut headers = HeaderMap::new();
    headers.insert(DEVMATCH_STATUS_HEADER, HeaderValue::from_static("ready"));
    headers.insert(DEVMATCH_SCORER_HEADER, HeaderValue::from_static(scorer));

    (
        StatusCode::OK,
        headers,
        Json(ReadyResponse {
            status: "ok",
            scorer,
        }),
    )
        .into_response()
}
