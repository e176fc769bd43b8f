use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, instrument};

use super::DEVMATCH_SCORER_HEADER;
use super::error::GatewayError;
use super::state::HandlerState;
use crate::criteria::Criterion;
use crate::scoring::MatchResult;
use crate::vector::DeviceInput;

/// Body of `POST /ml/score-dispositivos`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreRequest {
    #[serde(default, alias = "criterios")]
    pub criteria: Vec<Criterion>,
    #[serde(default, alias = "dispositivos")]
    pub devices: Vec<DeviceInput>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResponse {
    pub scores: Vec<MatchResult>,
}

#[instrument(skip(state, body), fields(criteria = tracing::field::Empty, devices = tracing::field::Empty))]
pub async fn score_devices_handler(
    State(state): State<HandlerState>,
    body: Bytes,
) -> Result<Response, GatewayError> {
    let request: ScoreRequest = serde_json::from_slice(&body)
        .map_err(|e| GatewayError::InvalidRequest(format!("Invalid request schema: {}", e)))?;
    validate_request(&request)?;

    let span = tracing::Span::current();
    span.record("criteria", request.criteria.len());
    span.record("devices", request.devices.len());
    debug!("Scoring request accepted");

    let engine = Arc::clone(&state.engine);
    let scores = tokio::task::spawn_blocking(move || {
        engine.score_devices(&request.criteria, &request.devices)
    })
    .await
    .map_err(|e| GatewayError::InternalError(format!("Scoring task failed: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        DEVMATCH_SCORER_HEADER,
        HeaderValue::from_static(state.scorer_name()),
    );

    Ok((StatusCode::OK, headers, Json(ScoreResponse { scores })).into_response())
}

pub(crate) fn validate_request(request: &ScoreRequest) -> Result<(), GatewayError> {
    if request.criteria.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "Nenhum critério informado".to_string(),
        ));
    }
    if request.devices.is_empty() {
        return Err(GatewayError::InvalidRequest(
            "Nenhum dispositivo informado".to_string(),
        ));
    }
    Ok(())
}
